//! Axum route handlers for the advisor API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::advisor::catalog::find_career;
use crate::advisor::models::{
    CareerRecommendation, DataSource, LearningIntensity, LearningRoadmap, MarketInsights,
    SkillResources, SkillsGap, Sourced, TargetCareer, Timeframe,
};
use crate::errors::{AppError, AppJson};
use crate::profile::session::Session;
use crate::state::AppState;

/// Recommendations for profiles below this completion carry a notice.
pub const RECOMMENDATION_MIN_COMPLETION: f64 = 30.0;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<CareerRecommendation>,
    pub source: DataSource,
    pub profile_completion: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SkillsGapRequest {
    pub career_title: String,
    pub required_skills: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    pub career_title: String,
    pub required_skills: Option<Vec<String>>,
    #[serde(default)]
    pub timeframe: Timeframe,
    #[serde(default)]
    pub intensity: LearningIntensity,
}

/// Resolves the career a request refers to: explicit skills win, then the session's
/// last recommendations, then the sample catalogue.
fn resolve_target(
    session: &Session,
    career_title: &str,
    required_skills: Option<Vec<String>>,
) -> Result<TargetCareer, AppError> {
    let title = career_title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("career_title cannot be empty".to_string()));
    }

    if let Some(required_skills) = required_skills {
        return Ok(TargetCareer {
            title: title.to_string(),
            required_skills,
        });
    }

    session
        .recommendations
        .iter()
        .find(|c| c.title.eq_ignore_ascii_case(title))
        .map(TargetCareer::from)
        .or_else(|| find_career(title).as_ref().map(TargetCareer::from))
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Career '{title}' not found. Request recommendations first or pass required_skills."
            ))
        })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/recommendations
///
/// Runs recommendations for the session's profile and remembers them so later
/// gap and roadmap requests can refer to a career by title.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let session = state.sessions.get(id).await?;
    let completion = session.profile.completion_percentage();

    let result = state.source.recommendations(&session.profile).await;
    info!(
        "Produced {} recommendations for session {id} ({:?})",
        result.data.len(),
        result.source
    );

    state
        .sessions
        .store_recommendations(id, result.data.clone())
        .await?;

    let notice = (completion < RECOMMENDATION_MIN_COMPLETION).then(|| {
        format!(
            "Profile is {completion:.0}% complete. Complete at least \
             {RECOMMENDATION_MIN_COMPLETION:.0}% for personalized recommendations."
        )
    });

    Ok(Json(RecommendationsResponse {
        recommendations: result.data,
        source: result.source,
        profile_completion: completion,
        notice,
    }))
}

/// POST /api/v1/sessions/:id/skills-gap
pub async fn handle_skills_gap(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(request): AppJson<SkillsGapRequest>,
) -> Result<Json<Sourced<SkillsGap>>, AppError> {
    let session = state.sessions.get(id).await?;
    let target = resolve_target(&session, &request.career_title, request.required_skills)?;

    Ok(Json(state.source.skills_gap(&session.profile, &target).await))
}

/// POST /api/v1/sessions/:id/roadmap
pub async fn handle_roadmap(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(request): AppJson<RoadmapRequest>,
) -> Result<Json<Sourced<LearningRoadmap>>, AppError> {
    let session = state.sessions.get(id).await?;
    let target = resolve_target(&session, &request.career_title, request.required_skills)?;

    let roadmap = state
        .source
        .roadmap(&session.profile, &target, request.timeframe, request.intensity)
        .await;
    Ok(Json(roadmap))
}

/// GET /api/v1/market-insights
pub async fn handle_market_insights(State(state): State<AppState>) -> Json<Sourced<MarketInsights>> {
    Json(state.source.market_insights().await)
}

/// GET /api/v1/skills/:skill/resources
pub async fn handle_skill_resources(
    State(state): State<AppState>,
    Path(skill): Path<String>,
) -> Result<Json<Sourced<SkillResources>>, AppError> {
    if skill.trim().is_empty() {
        return Err(AppError::Validation("skill cannot be empty".to_string()));
    }
    Ok(Json(state.source.skill_resources(&skill).await))
}
