//! University Service
//!
//! Entry points used by the HTTP handlers and the CLI. Turns a missing row
//! into `NotFound` and parses textual identifiers before any query is issued.

use campus_core::domain::university::{InvalidIdentifier, UniversityId};
use campus_core::dto::university::{UniversitySummary, UniversityWithAccount};
use thiserror::Error;

use crate::repository::UniversityRepository;

/// Service error type
#[derive(Debug, Error)]
pub enum UniversityError {
    #[error("University {0} not found")]
    NotFound(UniversityId),

    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifier),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, UniversityError>;

/// List all universities (id and name only)
pub async fn list_universities(repo: &dyn UniversityRepository) -> Result<Vec<UniversitySummary>> {
    let universities = repo.get_all().await?;
    Ok(universities)
}

/// List all universities with their linked accounts
pub async fn list_universities_with_account(
    repo: &dyn UniversityRepository,
) -> Result<Vec<UniversityWithAccount>> {
    let universities = repo.get_universities_with_account().await?;
    Ok(universities)
}

/// Get a university by ID
pub async fn get_university(
    repo: &dyn UniversityRepository,
    id: UniversityId,
) -> Result<UniversityWithAccount> {
    let university = repo.find_university_by_id(id).await?.ok_or_else(|| {
        tracing::debug!("University {} not found", id);
        UniversityError::NotFound(id)
    })?;

    Ok(university)
}

/// Get a university by an identifier supplied as text
///
/// The identifier is parsed first; an unparsable value is rejected with
/// `InvalidIdentifier` without touching the store.
pub async fn get_university_by_raw_id(
    repo: &dyn UniversityRepository,
    raw_id: &str,
) -> Result<UniversityWithAccount> {
    let id: UniversityId = raw_id.parse()?;
    get_university(repo, id).await
}
