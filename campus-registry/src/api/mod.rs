//! API Module
//!
//! HTTP API layer for the registry.
//! Each submodule handles endpoints for a specific domain.

pub mod error;
pub mod health;
pub mod university;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::repository::UniversityRepository;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub universities: Arc<dyn UniversityRepository>,
}

impl AppState {
    pub fn new(universities: Arc<dyn UniversityRepository>) -> Self {
        Self { universities }
    }
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // University endpoints
        .route("/university/list", get(university::list_universities))
        .route(
            "/university/with-account",
            get(university::list_universities_with_account),
        )
        .route("/university/{id}", get(university::get_university))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::memory::{InMemoryUniversityRepository, fixture};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn router(repo: InMemoryUniversityRepository) -> Router {
        create_router(AppState::new(Arc::new(repo)))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let response = router(InMemoryUniversityRepository::failing())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_returns_id_and_name_only() {
        let (status, body) = get_json(
            router(InMemoryUniversityRepository::new(fixture())),
            "/university/list",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 2);
        for item in items {
            let keys: Vec<&String> = item.as_object().unwrap().keys().collect();
            assert_eq!(keys.len(), 2);
            assert!(item.get("idUni").is_some());
            assert!(item.get("nomUni").is_some());
        }
    }

    #[tokio::test]
    async fn test_with_account_has_null_account_when_unlinked() {
        let (status, body) = get_json(
            router(InMemoryUniversityRepository::new(fixture())),
            "/university/with-account",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["nomUni"], "Alpha");
        assert!(body[0]["account"].is_null());
        assert_eq!(body[1]["account"]["username"], "bob");
    }

    #[tokio::test]
    async fn test_get_university_by_id() {
        let (status, body) = get_json(
            router(InMemoryUniversityRepository::new(fixture())),
            "/university/2",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["idUni"], 2);
        assert_eq!(body["account"]["id"], 10);
        assert_eq!(body["account"]["isVerified"], true);
        assert_eq!(body["account"]["role"], "admin");
    }

    #[tokio::test]
    async fn test_get_missing_university_is_404() {
        let (status, body) = get_json(
            router(InMemoryUniversityRepository::new(fixture())),
            "/university/999",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "University 999 not found");
    }

    #[tokio::test]
    async fn test_get_with_malformed_id_is_400() {
        let (status, body) = get_json(
            router(InMemoryUniversityRepository::new(fixture())),
            "/university/abc",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("abc"));
    }

    #[tokio::test]
    async fn test_store_fault_is_500_without_details() {
        let (status, body) = get_json(
            router(InMemoryUniversityRepository::failing()),
            "/university/list",
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }
}
