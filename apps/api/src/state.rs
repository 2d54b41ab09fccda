use std::sync::Arc;

use crate::advisor::source::RecommendationSource;
use crate::profile::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Live or fallback backend, chosen once at startup by `select_source`.
    pub source: Arc<dyn RecommendationSource>,
}
