use serde_json::Value;

use super::RecordId;

/// Trait for a canonical admin record
///
/// Every record type exposed by the admin API (agendas, news, registered
/// users) is built from a raw backend payload through [`Record::normalize`],
/// which must never fail.
pub trait Record: Sized {
    // ============================================================================
    // Instance data
    // ============================================================================

    /// Backend-assigned identifier
    fn id(&self) -> RecordId;

    /// Approval flag (`true` = approved, `false` = pending)
    fn status(&self) -> bool;

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Resource segment under `/admin/` (for example "agendas")
    fn collection_name() -> &'static str;

    // ============================================================================
    // Normalization
    // ============================================================================

    /// Build a fully populated record from an arbitrary payload
    fn normalize(raw: &Value) -> Self;

    /// Normalize a list payload; anything other than a JSON array is empty
    fn normalize_list(raw: &Value) -> Vec<Self> {
        raw.as_array()
            .map(|items| items.iter().map(Self::normalize).collect())
            .unwrap_or_default()
    }
}
