//! Common types and traits for all admin records

pub mod field_rules;
pub mod record;
pub mod record_id;

// Re-exports
pub use field_rules::{coerce_flag, coerce_integer, coerce_text, FieldRule};
pub use record::Record;
pub use record_id::RecordId;
