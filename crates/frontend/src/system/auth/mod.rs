pub mod api;
pub mod session;

pub use session::Session;
