//! Agendas page controller
//!
//! Owns the list and form state and drives the API. Failures never escape:
//! each one becomes the page's inline error message.

pub mod state;

use chrono::NaiveDateTime;
use contracts::domain::a001_agenda::approval::status_column_title;
use contracts::domain::a001_agenda::validation::min_datetime_input;
use contracts::domain::a001_agenda::{ApprovalAction, ApprovalState, ImageUpload, RowControl};
use contracts::domain::common::RecordId;
use contracts::system::auth::Role;
use std::sync::Arc;

use self::state::{create_state, AgendasListState};
use super::form::AgendaFormState;
use crate::domain::a001_agenda::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::transport::SharedTransport;
use crate::shared::Confirm;
use crate::system::auth::Session;

pub const LOAD_FAILED: &str = "Failed to load agendas.";
pub const ADD_FAILED: &str = "Failed to add agenda.";

const PLACEHOLDER: &str = "-";

pub type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

fn system_clock() -> Clock {
    Arc::new(|| chrono::Local::now().naive_local())
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaRow {
    /// 1-based position in the list
    pub serial: usize,
    pub id: RecordId,
    pub image: Option<String>,
    pub title: String,
    pub datetime: String,
    pub location: String,
    pub control: RowControl,
}

pub struct AgendasPage {
    transport: SharedTransport,
    role: Role,
    clock: Clock,
    pub state: AgendasListState,
    pub form: AgendaFormState,
}

impl AgendasPage {
    pub fn new(transport: SharedTransport, session: &Session) -> Self {
        Self {
            transport,
            role: session.role(),
            clock: system_clock(),
            state: create_state(),
            form: AgendaFormState::default(),
        }
    }

    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> NaiveDateTime + Send + Sync + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Re-fetch the list. Results of superseded loads are dropped.
    pub async fn reload(&mut self) {
        let seq = self.state.begin_load();
        let result = api::fetch_agendas(self.transport.as_ref())
            .await
            .map_err(|e| {
                log::error!("Failed to load agendas: {}", e);
                LOAD_FAILED.to_string()
            });
        if !self.state.finish_load(seq, result) {
            log::debug!("Discarded stale agenda load #{}", seq);
        }
    }

    /// Validate the form and create the agenda. Returns `true` on success.
    pub async fn submit(&mut self) -> bool {
        self.state.error = None;

        let agenda = match self.form.to_dto().validate((self.clock)()) {
            Ok(agenda) => agenda,
            Err(e) => {
                self.state.error = Some(e.to_string());
                return false;
            }
        };

        self.state.saving = true;
        let created = match api::add_agenda(self.transport.as_ref(), &agenda).await {
            Ok(created) => {
                log::debug!("Created agenda {}", created.id);
                self.reload().await;
                self.form.reset();
                true
            }
            Err(e) => {
                log::error!("Failed to add agenda: {}", e);
                self.state.error = Some(
                    e.remote_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| ADD_FAILED.to_string()),
                );
                false
            }
        };
        self.state.saving = false;
        created
    }

    /// Approve after confirmation; reloads on success
    pub async fn approve(&mut self, id: RecordId, confirm: &dyn Confirm) -> bool {
        let current = self
            .state
            .find(id)
            .map(|agenda| agenda.approval_state())
            .unwrap_or(ApprovalState::Pending);
        let action = ApprovalAction::Approve;
        if !confirm.confirm(action.confirm_prompt(current)) {
            return false;
        }

        self.state.error = None;
        match api::approve_agenda(self.transport.as_ref(), id).await {
            Ok(()) => {
                self.reload().await;
                true
            }
            Err(e) => {
                log::error!("Failed to approve agenda {}: {}", id, e);
                self.state.error = Some(action.failure_message().to_string());
                false
            }
        }
    }

    /// Delete after confirmation; drops the row locally on success
    pub async fn remove(&mut self, id: RecordId, confirm: &dyn Confirm) -> bool {
        let current = self
            .state
            .find(id)
            .map(|agenda| agenda.approval_state())
            .unwrap_or(ApprovalState::Approved);
        let action = ApprovalAction::Remove;
        if !confirm.confirm(action.confirm_prompt(current)) {
            return false;
        }

        self.state.error = None;
        match api::delete_agenda(self.transport.as_ref(), id).await {
            Ok(()) => {
                self.state.remove(id);
                true
            }
            Err(e) => {
                log::error!("Failed to delete agenda {}: {}", id, e);
                self.state.error = Some(action.failure_message().to_string());
                false
            }
        }
    }

    /// Image picker change; an invalid file shows a message but does not
    /// block the rest of the form.
    pub fn select_image(&mut self, file: Option<ImageUpload>) {
        self.state.error = self.form.select_image(file).err().map(|e| e.to_string());
    }

    pub fn rows(&self) -> Vec<AgendaRow> {
        self.state
            .items
            .iter()
            .enumerate()
            .map(|(index, agenda)| AgendaRow {
                serial: index + 1,
                id: agenda.id,
                image: agenda.image_url.clone(),
                title: agenda.title.clone(),
                datetime: format_datetime(&agenda.datetime),
                location: if agenda.location.trim().is_empty() {
                    PLACEHOLDER.to_string()
                } else {
                    agenda.location.clone()
                },
                control: RowControl::for_row(self.role, agenda.approval_state()),
            })
            .collect()
    }

    pub fn status_column_title(&self) -> &'static str {
        status_column_title(self.role)
    }

    /// Earliest selectable value for the date control
    pub fn min_datetime(&self) -> String {
        min_datetime_input((self.clock)())
    }

    pub fn submit_label(&self) -> &'static str {
        if self.state.saving {
            "Adding…"
        } else {
            "Add Agenda"
        }
    }

    pub fn dismiss_error(&mut self) {
        self.state.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::transport::MockTransport;
    use chrono::{Duration, NaiveDate};
    use contracts::system::http::{ApiResponse, Method};
    use std::cell::RefCell;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 30)
            .unwrap()
    }

    fn super_session() -> Session {
        Session::from_token("mock-super")
    }

    fn page(transport: &Arc<MockTransport>, session: &Session) -> AgendasPage {
        AgendasPage::new(transport.clone(), session).with_clock(now)
    }

    fn fill_form(page: &mut AgendasPage, datetime: NaiveDateTime) {
        page.form.set_title("  Keynote  ");
        page.form.set_description("Opening talk");
        page.form
            .set_datetime(&datetime.format("%Y-%m-%dT%H:%M").to_string());
        page.form.set_location("Hall A");
    }

    fn accept(_: &str) -> bool {
        true
    }

    fn decline(_: &str) -> bool {
        false
    }

    #[tokio::test]
    async fn test_reload_populates_rows() {
        let transport = MockTransport::with_defaults().into_shared();
        let mut page = page(&transport, &super_session());
        assert!(page.state.loading);

        page.reload().await;
        assert!(!page.state.loading);
        assert!(page.state.error.is_none());

        let rows = page.rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].serial, 1);
        assert_eq!(rows[0].datetime, "10.01.2025 09:00");
        assert_eq!(rows[0].image, None);
        assert_eq!(rows[0].control, RowControl::Action(ApprovalAction::Remove));
        assert_eq!(rows[1].control, RowControl::Action(ApprovalAction::Approve));
        assert_eq!(page.status_column_title(), "Actions");
    }

    #[tokio::test]
    async fn test_viewer_rows_are_badges() {
        let transport = MockTransport::with_defaults().into_shared();
        let mut page = page(&transport, &Session::from_token("mock-session-token"));
        page.reload().await;

        let labels: Vec<&str> = page.rows().iter().map(|row| row.control.label()).collect();
        assert_eq!(labels, vec!["Approved", "Pending", "Approved", "Pending"]);
        assert_eq!(page.status_column_title(), "Status");
    }

    #[tokio::test]
    async fn test_reload_failure_sets_message() {
        let mut transport = MockTransport::with_defaults();
        transport.set_handler(Method::Get, "/admin/agendas", |_, _| {
            ApiResponse::new(500, "boom")
        });
        let transport = transport.into_shared();
        let mut page = page(&transport, &super_session());

        page.reload().await;
        assert_eq!(page.state.error.as_deref(), Some(LOAD_FAILED));
        assert!(!page.state.loading);
    }

    #[tokio::test]
    async fn test_past_datetime_makes_no_call() {
        let transport = MockTransport::with_defaults().into_shared();
        let mut page = page(&transport, &super_session());
        fill_form(&mut page, now() - Duration::hours(1));

        assert!(!page.submit().await);
        assert_eq!(
            page.state.error.as_deref(),
            Some("Date & time cannot be in the past.")
        );
        assert!(transport.journal().is_empty());
    }

    #[tokio::test]
    async fn test_current_minute_counts_as_past() {
        let transport = MockTransport::with_defaults().into_shared();
        let mut page = page(&transport, &super_session());
        fill_form(&mut page, now());

        assert!(!page.submit().await);
        assert!(transport.journal().is_empty());
    }

    #[tokio::test]
    async fn test_valid_submit_adds_then_reloads() {
        let transport = MockTransport::with_defaults().into_shared();
        let mut page = page(&transport, &super_session());
        fill_form(&mut page, now() + Duration::hours(1));

        assert!(page.submit().await);
        assert!(page.state.error.is_none());
        assert!(!page.state.saving);
        assert_eq!(page.form, AgendaFormState::default());

        let journal = transport.journal();
        assert_eq!(journal.len(), 2);
        assert_eq!(journal[0].path, "/admin/agendas/add");
        assert_eq!(journal[0].body.field("title"), Some("Keynote"));
        assert_eq!(journal[0].body.field("location"), Some("Hall A"));
        assert_eq!(journal[1].path, "/admin/agendas");
    }

    #[tokio::test]
    async fn test_add_failure_prefers_remote_text() {
        let mut transport = MockTransport::with_defaults();
        transport.set_handler(Method::Post, "/admin/agendas/add", |_, _| {
            ApiResponse::new(400, "Duplicate agenda")
        });
        let transport = transport.into_shared();
        let mut page = page(&transport, &super_session());
        fill_form(&mut page, now() + Duration::days(1));

        assert!(!page.submit().await);
        assert_eq!(page.state.error.as_deref(), Some("Duplicate agenda"));
        assert_eq!(page.form.title, "  Keynote  ");
    }

    #[tokio::test]
    async fn test_add_failure_without_text_uses_fallback() {
        let mut transport = MockTransport::with_defaults();
        transport.set_handler(Method::Post, "/admin/agendas/add", |_, _| {
            ApiResponse::new(502, "")
        });
        let transport = transport.into_shared();
        let mut page = page(&transport, &super_session());
        fill_form(&mut page, now() + Duration::days(1));

        assert!(!page.submit().await);
        assert_eq!(page.state.error.as_deref(), Some(ADD_FAILED));
        assert_eq!(page.submit_label(), "Add Agenda");
    }

    #[tokio::test]
    async fn test_approve_calls_update_status_only() {
        let transport = MockTransport::with_defaults().into_shared();
        let mut page = page(&transport, &super_session());
        page.reload().await;
        transport.clear_journal();

        assert!(page.approve(RecordId(7), &accept).await);
        assert_eq!(
            transport.calls_to(Method::Post, "/admin/agendas/updateStatus/7"),
            1
        );
        assert_eq!(transport.calls_to(Method::Post, "/admin/agendas/delete/7"), 0);
        assert_eq!(transport.calls_to(Method::Get, "/admin/agendas"), 1);
    }

    #[tokio::test]
    async fn test_approve_prompt_depends_on_state() {
        let transport = MockTransport::with_defaults().into_shared();
        let mut page = page(&transport, &super_session());
        page.reload().await;

        let prompts = RefCell::new(Vec::new());
        let record = |prompt: &str| {
            prompts.borrow_mut().push(prompt.to_string());
            false
        };
        page.approve(RecordId(1), &record).await;
        page.approve(RecordId(2), &record).await;
        assert_eq!(
            prompts.into_inner(),
            vec![
                "This agenda is already approved. Approve again?".to_string(),
                "Approve this agenda?".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_remove_drops_only_that_row() {
        let transport = MockTransport::with_defaults().into_shared();
        let mut page = page(&transport, &super_session());
        page.reload().await;
        transport.clear_journal();

        assert!(page.remove(RecordId(3), &accept).await);
        assert_eq!(transport.calls_to(Method::Post, "/admin/agendas/delete/3"), 1);
        assert_eq!(transport.journal().len(), 1);

        let ids: Vec<i64> = page.state.items.iter().map(|a| a.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[tokio::test]
    async fn test_declined_confirmation_changes_nothing() {
        let transport = MockTransport::with_defaults().into_shared();
        let mut page = page(&transport, &super_session());
        page.reload().await;
        transport.clear_journal();
        let before = page.state.items.clone();

        assert!(!page.approve(RecordId(2), &decline).await);
        assert!(!page.remove(RecordId(1), &decline).await);
        assert!(transport.journal().is_empty());
        assert_eq!(page.state.items, before);
        assert!(page.state.error.is_none());
    }

    #[tokio::test]
    async fn test_action_failures_use_fixed_messages() {
        let mut transport = MockTransport::with_defaults();
        transport.set_handler(Method::Post, "/admin/agendas/updateStatus/:id", |_, _| {
            ApiResponse::new(500, "nope")
        });
        transport.set_handler(Method::Post, "/admin/agendas/delete/:id", |_, _| {
            ApiResponse::new(403, "Forbidden")
        });
        let transport = transport.into_shared();
        let mut page = page(&transport, &super_session());
        page.reload().await;

        assert!(!page.approve(RecordId(2), &accept).await);
        assert_eq!(page.state.error.as_deref(), Some("Failed to approve agenda."));

        assert!(!page.remove(RecordId(1), &accept).await);
        assert_eq!(page.state.error.as_deref(), Some("Failed to delete agenda."));
        assert_eq!(page.state.items.len(), 4);
    }

    #[tokio::test]
    async fn test_invalid_image_does_not_block_form() {
        let transport = MockTransport::with_defaults().into_shared();
        let mut page = page(&transport, &super_session());
        page.select_image(Some(ImageUpload {
            file_name: "notes.pdf".into(),
            content_type: "application/pdf".into(),
            bytes: vec![1],
        }));
        assert_eq!(
            page.state.error.as_deref(),
            Some("Please select a valid image file (jpg, png, etc.).")
        );

        fill_form(&mut page, now() + Duration::hours(2));
        assert!(page.submit().await);
        assert!(transport.journal()[0].body.file("image").is_none());
    }

    #[test]
    fn test_min_datetime_drops_seconds() {
        let transport = MockTransport::with_defaults().into_shared();
        let page = page(&transport, &super_session());
        assert_eq!(page.min_datetime(), "2030-06-01T12:00");
    }
}
