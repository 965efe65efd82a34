//! Startup Advisor HTTP Server
//!
//! Axum-based server providing the intake relay, brainstorm session API,
//! and the static WASM frontend.

mod config;
mod error;
mod handlers;
mod routes;
mod sessions;
mod state;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use advisor_runtime::{FormRelayClient, SimulatedProvider};

use crate::config::ServerConfig;
use crate::sessions::SessionRegistry;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    // Reply generator
    let provider = SimulatedProvider::from_env();
    tracing::info!("✓ Simulated provider ({} ms delay)", provider.delay().as_millis());

    // Intake relay
    let relay = FormRelayClient::from_env()?;
    tracing::info!("✓ Form relay → {}", relay.url());

    let sessions = Arc::new(SessionRegistry::new());
    Arc::clone(&sessions).spawn_sweeper(config.session_sweep_interval, config.session_idle_timeout);
    tracing::info!(
        "✓ Idle sessions swept after {} s",
        config.session_idle_timeout.as_secs()
    );

    let state = AppState {
        provider: Arc::new(provider),
        relay: Arc::new(relay),
        sessions,
    };

    let app = routes::app(state, &config.static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 advisor server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET    /health                        - Health check");
    tracing::info!("  POST   /api/intake                    - Submit intake form");
    tracing::info!("  POST   /api/sessions                  - Open brainstorm session");
    tracing::info!("  GET    /api/sessions/{{id}}             - Session state");
    tracing::info!("  POST   /api/sessions/{{id}}/access-key  - Unlock session");
    tracing::info!("  POST   /api/sessions/{{id}}/messages    - Send message");
    tracing::info!("  DELETE /api/sessions/{{id}}             - Close session");
    tracing::info!("  Static frontend from ./{}", config.static_dir);
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
