use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::advisor::models::{ProfileAnalysis, Sourced};
use crate::errors::{AppError, AppJson};
use crate::profile::completeness::{compute_completeness_report, CompletenessReport};
use crate::profile::models::{ProfilePatch, StudentProfile};
use crate::profile::session::Session;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub session_id: Uuid,
    pub profile: StudentProfile,
    pub completeness: CompletenessReport,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Session> for ProfileResponse {
    fn from(session: Session) -> Self {
        Self {
            session_id: session.id,
            completeness: compute_completeness_report(&session.profile),
            profile: session.profile,
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<ProfileResponse>) {
    let session = state.sessions.create().await;
    info!("Created session {}", session.id);
    (StatusCode::CREATED, Json(session.into()))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    info!("Discarded session {id}");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/sessions/:id/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, AppError> {
    let session = state.sessions.get(id).await?;
    Ok(Json(session.into()))
}

/// PATCH /api/v1/sessions/:id/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(patch): AppJson<ProfilePatch>,
) -> Result<Json<ProfileResponse>, AppError> {
    let session = state.sessions.update_profile(id, patch).await?;
    Ok(Json(session.into()))
}

/// GET /api/v1/sessions/:id/profile/analysis
pub async fn handle_profile_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Sourced<ProfileAnalysis>>, AppError> {
    let session = state.sessions.get(id).await?;
    Ok(Json(state.source.profile_analysis(&session.profile).await))
}
