mod advisor;
mod config;
mod errors;
mod llm_client;
mod profile;
mod routes;
mod state;

use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advisor::source::select_source;
use crate::config::Config;
use crate::profile::session::SessionStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Advisor API v{}", env!("CARGO_PKG_VERSION"));

    // Live Gemini source when a key is configured, static fallback otherwise
    let source = select_source(&config);
    info!("Recommendation source: {:?}", source.kind());

    let sessions = SessionStore::with_limits(config.session_idle_ttl, config.max_sessions);
    // Ten sweeps per TTL.
    let sweep_period = (config.session_idle_ttl / 10).max(Duration::from_secs(1));
    sessions.spawn_sweeper(sweep_period);
    info!(
        "Sessions expire after {}s idle (max {})",
        config.session_idle_ttl.as_secs(),
        config.max_sessions
    );

    let state = AppState { sessions, source };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once a web frontend is deployed

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
