//! Admin console client
//!
//! Page controllers, API calls and the transport they go through. Rendering
//! is left to whatever view layer drives these controllers.

pub mod domain;
pub mod layout;
pub mod shared;
pub mod system;

pub use shared::config::{build_transport, load_config, ConsoleConfig};
pub use shared::transport::{HttpTransport, MockTransport, SharedTransport, Transport};
