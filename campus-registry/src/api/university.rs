//! University API Handlers
//!
//! Read-only HTTP endpoints over the university service.

use axum::{
    Json,
    extract::{Path, State},
};
use campus_core::dto::university::{UniversitySummary, UniversityWithAccount};

use crate::api::AppState;
use crate::api::error::ApiResult;
use crate::service::university_service;

/// GET /university/list
/// List all universities (id and name)
pub async fn list_universities(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<UniversitySummary>>> {
    tracing::debug!("Listing all universities");

    let universities = university_service::list_universities(state.universities.as_ref()).await?;

    Ok(Json(universities))
}

/// GET /university/with-account
/// List all universities with their linked accounts
pub async fn list_universities_with_account(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<UniversityWithAccount>>> {
    tracing::debug!("Listing universities with accounts");

    let universities =
        university_service::list_universities_with_account(state.universities.as_ref()).await?;

    Ok(Json(universities))
}

/// GET /university/{id}
/// Get university by ID
///
/// The path segment is taken as text so that a malformed id yields the
/// registry's own 400 response.
pub async fn get_university(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UniversityWithAccount>> {
    tracing::debug!("Getting university: {}", id);

    let university =
        university_service::get_university_by_raw_id(state.universities.as_ref(), &id).await?;

    Ok(Json(university))
}
