//! Mock Interception Layer for the admin API
//!
//! A table of `(method, path pattern) -> handler` that answers admin API
//! requests with canned payloads. The console uses it as a transport strategy
//! (`MockTransport`), the mock server serves it over HTTP. Handlers are pure
//! functions of the request: nothing created or deleted is remembered.

pub mod fixtures;
pub mod handlers;
pub mod registry;

pub use registry::{Handler, MockRegistry, PathParams, PathPattern};

/// Registry with every canned admin API handler
pub fn default_registry() -> MockRegistry {
    handlers::register_all(MockRegistry::new())
}
