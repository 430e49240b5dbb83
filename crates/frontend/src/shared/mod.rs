pub mod api_utils;
pub mod config;
pub mod confirm;
pub mod date_utils;
pub mod transport;

pub use api_utils::ApiError;
pub use confirm::Confirm;
