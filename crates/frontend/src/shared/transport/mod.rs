//! Request transport
//!
//! Every API call goes through a [`Transport`]. The HTTP implementation talks
//! to the real backend; the mock implementation answers from the canned
//! handlers in the `mocks` crate and can forward what it does not know.

pub mod http;
pub mod mock;

use async_trait::async_trait;
use contracts::system::http::{ApiRequest, ApiResponse, Method};
use std::sync::Arc;
use thiserror::Error;

pub use http::HttpTransport;
pub use mock::{MockTransport, UnhandledRequest};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Failed to build request: {0}")]
    InvalidRequest(String),
    #[error("No mock handler for {method} {path}")]
    Unhandled { method: Method, path: String },
}

/// Strategy that turns an [`ApiRequest`] into an [`ApiResponse`].
///
/// Non-2xx statuses are responses, not errors; only failures to get any
/// response at all are reported as [`TransportError`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;

    /// Short name for log lines
    fn name(&self) -> &'static str;
}

pub type SharedTransport = Arc<dyn Transport>;
