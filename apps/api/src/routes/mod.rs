pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::advisor::handlers as advisor;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile store
        .route("/api/v1/sessions", post(profile::handle_create_session))
        .route("/api/v1/sessions/:id", delete(profile::handle_delete_session))
        .route(
            "/api/v1/sessions/:id/profile",
            get(profile::handle_get_profile).patch(profile::handle_update_profile),
        )
        .route(
            "/api/v1/sessions/:id/profile/analysis",
            get(profile::handle_profile_analysis),
        )
        // Recommendation client
        .route(
            "/api/v1/sessions/:id/recommendations",
            post(advisor::handle_recommendations),
        )
        .route(
            "/api/v1/sessions/:id/skills-gap",
            post(advisor::handle_skills_gap),
        )
        .route("/api/v1/sessions/:id/roadmap", post(advisor::handle_roadmap))
        .route(
            "/api/v1/market-insights",
            get(advisor::handle_market_insights),
        )
        .route(
            "/api/v1/skills/:skill/resources",
            get(advisor::handle_skill_resources),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::advisor::source::FallbackSource;
    use crate::profile::session::SessionStore;

    fn app() -> Router {
        build_router(AppState {
            sessions: SessionStore::default(),
            source: Arc::new(FallbackSource),
        })
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn new_session(app: &Router) -> String {
        let (status, body) = send(app, Method::POST, "/api/v1/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        body["session_id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health_reports_fallback_source() {
        let app = app();
        new_session(&app).await;

        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["data_source"], "fallback");
        assert_eq!(body["active_sessions"], 1);
    }

    #[tokio::test]
    async fn test_new_session_starts_empty() {
        let app = app();
        let (_, body) = send(&app, Method::POST, "/api/v1/sessions", None).await;
        assert_eq!(body["completeness"]["percentage"], 0.0);
        assert_eq!(body["profile"]["current_skills"], json!([]));
    }

    #[tokio::test]
    async fn test_profile_patch_updates_completeness() {
        let app = app();
        let id = new_session(&app).await;

        let (status, body) = send(
            &app,
            Method::PATCH,
            &format!("/api/v1/sessions/{id}/profile"),
            Some(json!({"name": "  Asha  ", "current_skills": ["Python", " SQL "]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"]["name"], "Asha");
        assert_eq!(body["profile"]["current_skills"], json!(["Python", "SQL"]));
        assert_eq!(body["completeness"]["filled"], 2);

        let (_, fetched) = send(&app, Method::GET, &format!("/api/v1/sessions/{id}/profile"), None).await;
        assert_eq!(fetched["profile"]["name"], "Asha");
    }

    #[tokio::test]
    async fn test_out_of_range_age_is_rejected() {
        let app = app();
        let id = new_session(&app).await;

        let (status, body) = send(
            &app,
            Method::PATCH,
            &format!("/api/v1/sessions/{id}/profile"),
            Some(json!({"age": 45})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unrepresentable_age_gets_same_error_body() {
        let app = app();
        let id = new_session(&app).await;

        for age in [300, -1] {
            let (status, body) = send(
                &app,
                Method::PATCH,
                &format!("/api/v1/sessions/{id}/profile"),
                Some(json!({ "age": age })),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn test_malformed_body_gets_error_body() {
        let app = app();
        let id = new_session(&app).await;

        let (status, body) = send(
            &app,
            Method::PATCH,
            &format!("/api/v1/sessions/{id}/profile"),
            Some(json!({"age": "twenty", "nickname": "x"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, body) = send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/skills-gap"),
            Some(json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let app = app();
        let uri = format!("/api/v1/sessions/{}/profile", uuid::Uuid::new_v4());
        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_deleted_session_is_gone() {
        let app = app();
        let id = new_session(&app).await;

        let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, Method::GET, &format!("/api/v1/sessions/{id}/profile"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_recommendations_on_empty_profile_carry_notice() {
        let app = app();
        let id = new_session(&app).await;

        let (status, body) = send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/recommendations"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "fallback");
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 5);
        assert_eq!(body["recommendations"][0]["title"], "Software Engineer");
        assert!(body["notice"].is_string());
    }

    #[tokio::test]
    async fn test_skills_gap_resolves_catalogue_career() {
        let app = app();
        let id = new_session(&app).await;
        send(
            &app,
            Method::PATCH,
            &format!("/api/v1/sessions/{id}/profile"),
            Some(json!({"current_skills": ["Python", "Statistics"]})),
        )
        .await;

        let (status, body) = send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/skills-gap"),
            Some(json!({"career_title": "data scientist"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "fallback");
        assert_eq!(body["data"]["have"], json!(["Python", "Statistics"]));
        assert_eq!(body["data"]["match_percentage"], 50.0);
    }

    #[tokio::test]
    async fn test_skills_gap_for_unknown_career_is_not_found() {
        let app = app();
        let id = new_session(&app).await;

        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/skills-gap"),
            Some(json!({"career_title": "Astronaut"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_roadmap_with_explicit_skills() {
        let app = app();
        let id = new_session(&app).await;

        let (status, body) = send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/roadmap"),
            Some(json!({
                "career_title": "DevOps Engineer",
                "required_skills": ["Docker", "Kubernetes", "Linux"],
                "timeframe": "6 months",
                "intensity": "intensive"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["timeframe"], "6 months");
        assert_eq!(body["data"]["phases"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_market_insights_and_skill_resources() {
        let app = app();

        let (status, body) = send(&app, Method::GET, "/api/v1/market-insights", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "fallback");
        assert!(!body["data"]["growing_sectors"].as_array().unwrap().is_empty());

        let (status, body) = send(&app, Method::GET, "/api/v1/skills/Docker/resources", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["skill"], "Docker");
    }
}
