use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service version, which data source is active and how many sessions are open.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "career-advisor-api",
        "data_source": state.source.kind(),
        "active_sessions": state.sessions.count().await
    }))
}
