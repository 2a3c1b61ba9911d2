//! API Error Handling
//!
//! Unified error type and its conversion into JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::service::university_service::UniversityError;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    DatabaseError(sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::DatabaseError(err) => {
                tracing::error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<UniversityError> for ApiError {
    fn from(err: UniversityError) -> Self {
        match err {
            UniversityError::NotFound(id) => {
                ApiError::NotFound(format!("University {} not found", id))
            }
            UniversityError::InvalidIdentifier(e) => ApiError::BadRequest(e.to_string()),
            UniversityError::DatabaseError(e) => ApiError::DatabaseError(e),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
