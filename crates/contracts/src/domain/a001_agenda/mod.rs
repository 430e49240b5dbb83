pub mod aggregate;
pub mod approval;
pub mod validation;

pub use aggregate::{Agenda, ImageUpload, NewAgenda};
pub use approval::{ApprovalAction, ApprovalState, RowControl};
pub use validation::{AgendaDto, ValidationError};
