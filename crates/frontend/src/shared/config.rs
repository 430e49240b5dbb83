//! Client configuration
//!
//! Defaults are embedded; an optional `console.toml` overrides them and the
//! environment overrides both.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

use super::transport::{HttpTransport, MockTransport, SharedTransport, TransportError, UnhandledRequest};

pub const USE_MOCK_ENV: &str = "ADMIN_CONSOLE_USE_MOCK";
pub const API_BASE_ENV: &str = "ADMIN_CONSOLE_API_BASE";

const DEFAULT_CONFIG: &str = r#"# Admin console client configuration
api_base = "http://127.0.0.1:8000"
use_mock = false
on_unhandled = "bypass"
"#;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default)]
    pub use_mock: bool,
    #[serde(default)]
    pub on_unhandled: UnhandledRequest,
}

fn default_api_base() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            use_mock: false,
            on_unhandled: UnhandledRequest::Bypass,
        }
    }
}

impl ConsoleConfig {
    /// Apply environment-style overrides from `lookup`.
    ///
    /// Mock mode is on only when the variable is exactly `true`.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(flag) = lookup(USE_MOCK_ENV) {
            self.use_mock = flag == "true";
        }
        if let Some(base) = lookup(API_BASE_ENV) {
            if !base.trim().is_empty() {
                self.api_base = base.trim().to_string();
            }
        }
        self
    }
}

pub fn parse_config(contents: &str) -> Result<ConsoleConfig> {
    toml::from_str(contents).context("Failed to parse console config")
}

/// Load config from `path` (or the embedded defaults), then apply the
/// process environment.
pub fn load_config(path: Option<&Path>) -> Result<ConsoleConfig> {
    let config = match path {
        Some(path) if path.exists() => {
            log::info!("Loading console config from {}", path.display());
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            parse_config(&contents)?
        }
        _ => parse_config(DEFAULT_CONFIG)?,
    };
    Ok(config.apply_overrides(|key| std::env::var(key).ok()))
}

/// Build the transport selected by `config`
pub fn build_transport(config: &ConsoleConfig) -> Result<SharedTransport, TransportError> {
    let http = HttpTransport::new(&config.api_base)?;
    if !config.use_mock {
        log::info!("Using API at {}", http.base_url());
        return Ok(Arc::new(http));
    }

    log::info!(
        "Mock mode ON ({} unmatched requests)",
        match config.on_unhandled {
            UnhandledRequest::Bypass => "bypassing",
            UnhandledRequest::Error => "failing",
        }
    );
    let mock = MockTransport::with_defaults().on_unhandled(config.on_unhandled);
    let mock = match config.on_unhandled {
        UnhandledRequest::Bypass => mock.with_passthrough(Arc::new(http)),
        UnhandledRequest::Error => mock,
    };
    Ok(Arc::new(mock))
}
