pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use std::sync::Arc;
use tokio::net::TcpListener;

use handlers::mock_dispatch::AppState;
use handlers::upstream::Upstream;
use shared::config::{self, UnhandledMode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = config::load_config()?;
    let addr = config::get_bind_addr(&config)?;

    let registry = mocks::default_registry();
    for (method, pattern) in registry.routes() {
        tracing::debug!("Mock route {} {}", method, pattern);
    }
    tracing::info!("Loaded {} mock routes", registry.len());

    let mut state = AppState::new(registry);
    state.on_unhandled = config.mock.on_unhandled;
    if let Some(base_url) = config.mock.upstream.as_deref().filter(|url| !url.is_empty()) {
        state.upstream = Some(Arc::new(Upstream::new(base_url)?));
        if state.on_unhandled == UnhandledMode::Bypass {
            tracing::info!("Unmatched requests are forwarded to {}", base_url);
        }
    }

    let app = routes::configure_routes(state);

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Mock server listening on http://{}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!("Port {} is already in use", addr.port());
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
