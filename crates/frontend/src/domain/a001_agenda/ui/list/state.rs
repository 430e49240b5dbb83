use contracts::domain::a001_agenda::Agenda;
use contracts::domain::common::RecordId;

/// Agenda page list state.
///
/// Every load is stamped with a sequence number. Only the result of the
/// latest load is applied; a local removal invalidates loads still in
/// flight so their older snapshot cannot resurrect the removed row.
#[derive(Clone, Debug)]
pub struct AgendasListState {
    pub items: Vec<Agenda>,
    pub error: Option<String>,

    // load flags
    pub loading: bool,
    pub saving: bool,
    pub is_loaded: bool,

    load_seq: u64,
}

impl Default for AgendasListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            error: None,
            loading: true,
            saving: false,
            is_loaded: false,
            load_seq: 0,
        }
    }
}

impl AgendasListState {
    /// Start a load; returns its stamp
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.loading = true;
        self.error = None;
        self.load_seq
    }

    /// Apply a load result. Returns `false` (and changes nothing) when the
    /// stamp is stale.
    pub fn finish_load(&mut self, seq: u64, result: Result<Vec<Agenda>, String>) -> bool {
        if seq != self.load_seq {
            return false;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.is_loaded = true;
            }
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
        true
    }

    /// Drop a row locally after a confirmed delete
    pub fn remove(&mut self, id: RecordId) -> bool {
        let before = self.items.len();
        self.items.retain(|agenda| agenda.id != id);
        if self.items.len() == before {
            return false;
        }
        self.load_seq += 1;
        self.loading = false;
        true
    }

    pub fn find(&self, id: RecordId) -> Option<&Agenda> {
        self.items.iter().find(|agenda| agenda.id == id)
    }
}

pub fn create_state() -> AgendasListState {
    AgendasListState::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::Record;
    use serde_json::json;

    fn agenda(id: i64) -> Agenda {
        Agenda::normalize(&json!({ "id": id, "title": format!("A{id}") }))
    }

    #[test]
    fn test_latest_load_wins() {
        let mut state = create_state();
        let first = state.begin_load();
        let second = state.begin_load();

        assert!(state.finish_load(second, Ok(vec![agenda(2)])));
        assert!(!state.finish_load(first, Ok(vec![agenda(1)])));
        assert_eq!(state.items, vec![agenda(2)]);
        assert!(!state.loading);
    }

    #[test]
    fn test_failed_load_keeps_items() {
        let mut state = create_state();
        let seq = state.begin_load();
        state.finish_load(seq, Ok(vec![agenda(1)]));

        let seq = state.begin_load();
        state.finish_load(seq, Err("Failed to load agendas.".into()));
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.error.as_deref(), Some("Failed to load agendas."));
    }

    #[test]
    fn test_removal_invalidates_in_flight_load() {
        let mut state = create_state();
        let seq = state.begin_load();
        state.finish_load(seq, Ok(vec![agenda(1), agenda(2)]));

        let in_flight = state.begin_load();
        assert!(state.remove(RecordId(1)));
        assert!(!state.finish_load(in_flight, Ok(vec![agenda(1), agenda(2)])));
        assert_eq!(state.items, vec![agenda(2)]);
        assert!(state.find(RecordId(1)).is_none());
        assert!(!state.remove(RecordId(1)));
    }
}
