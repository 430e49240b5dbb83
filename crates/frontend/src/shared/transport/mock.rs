use async_trait::async_trait;
use contracts::system::http::{ApiRequest, ApiResponse, Method};
use mocks::{MockRegistry, PathParams};
use serde::Deserialize;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{SharedTransport, Transport, TransportError};

/// What to do with a request no mock handler matches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnhandledRequest {
    /// Forward to the passthrough transport (if any)
    #[default]
    Bypass,
    /// Fail the call
    Error,
}

/// Transport answering from a [`MockRegistry`].
///
/// Every request is recorded in a journal so tests can assert which
/// endpoints a flow touched.
pub struct MockTransport {
    registry: MockRegistry,
    on_unhandled: UnhandledRequest,
    passthrough: Option<SharedTransport>,
    journal: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new(registry: MockRegistry) -> Self {
        Self {
            registry,
            on_unhandled: UnhandledRequest::default(),
            passthrough: None,
            journal: Mutex::new(Vec::new()),
        }
    }

    /// Transport with every canned admin handler installed
    pub fn with_defaults() -> Self {
        Self::new(mocks::default_registry())
    }

    pub fn on_unhandled(mut self, mode: UnhandledRequest) -> Self {
        self.on_unhandled = mode;
        self
    }

    /// Transport used for bypassed requests
    pub fn with_passthrough(mut self, transport: SharedTransport) -> Self {
        self.passthrough = Some(transport);
        self
    }

    /// Override one canned handler
    pub fn set_handler<F>(&mut self, method: Method, pattern: &str, handler: F)
    where
        F: Fn(&ApiRequest, &PathParams) -> ApiResponse + Send + Sync + 'static,
    {
        self.registry.set_handler(method, pattern, handler);
    }

    pub fn registry(&self) -> &MockRegistry {
        &self.registry
    }

    fn lock_journal(&self) -> MutexGuard<'_, Vec<ApiRequest>> {
        self.journal
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Requests seen so far, oldest first
    pub fn journal(&self) -> Vec<ApiRequest> {
        self.lock_journal().clone()
    }

    /// Number of recorded requests with this method and exact path
    pub fn calls_to(&self, method: Method, path: &str) -> usize {
        self.lock_journal()
            .iter()
            .filter(|request| request.method == method && request.path == path)
            .count()
    }

    pub fn clear_journal(&self) {
        self.lock_journal().clear();
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.lock_journal().push(request.clone());

        if let Some(response) = self.registry.handle(&request) {
            log::debug!(
                "[mock] {} {} -> {}",
                request.method,
                request.path,
                response.status
            );
            return Ok(response);
        }

        match (self.on_unhandled, &self.passthrough) {
            (UnhandledRequest::Bypass, Some(passthrough)) => {
                log::debug!("[mock] bypass {} {}", request.method, request.path);
                passthrough.send(request).await
            }
            _ => {
                log::warn!("[mock] unhandled {} {}", request.method, request.path);
                Err(TransportError::Unhandled {
                    method: request.method,
                    path: request.path,
                })
            }
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
