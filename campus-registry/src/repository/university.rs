//! University Repository
//!
//! Read-only access to the `universities` table and the account linked to
//! each university. Every query names its columns explicitly and returns one
//! of the projections from `campus_core::dto::university`.

use async_trait::async_trait;
use campus_core::domain::account::AccountRole;
use campus_core::domain::university::UniversityId;
use campus_core::dto::university::{AccountSummary, UniversitySummary, UniversityWithAccount};
use sqlx::PgPool;

/// Repository trait for university queries
///
/// Store faults are returned unmodified; a missing row is `Ok(None)`.
#[async_trait]
pub trait UniversityRepository: Send + Sync {
    /// Lists every university, projected to id and name
    async fn get_all(&self) -> Result<Vec<UniversitySummary>, sqlx::Error>;

    /// Lists every university with its contact fields and linked account
    async fn get_universities_with_account(
        &self,
    ) -> Result<Vec<UniversityWithAccount>, sqlx::Error>;

    /// Finds a single university by exact id
    async fn find_university_by_id(
        &self,
        id: UniversityId,
    ) -> Result<Option<UniversityWithAccount>, sqlx::Error>;
}

/// PostgreSQL implementation of UniversityRepository
#[derive(Clone)]
pub struct PgUniversityRepository {
    pool: PgPool,
}

impl PgUniversityRepository {
    /// Creates a repository over an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UniversityRepository for PgUniversityRepository {
    async fn get_all(&self) -> Result<Vec<UniversitySummary>, sqlx::Error> {
        let rows = sqlx::query_as::<_, UniversitySummaryRow>(
            r#"
            SELECT id_uni, nom_uni
            FROM universities
            ORDER BY id_uni
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!("Fetched {} university summaries", rows.len());

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn get_universities_with_account(
        &self,
    ) -> Result<Vec<UniversityWithAccount>, sqlx::Error> {
        let rows = sqlx::query_as::<_, UniversityAccountRow>(
            r#"
            SELECT u.id_uni, u.nom_uni, u.adresse_uni, u.telephone_uni, u.email_uni,
                   u.wallet_address,
                   a.id AS account_id, a.username AS account_username,
                   a.email AS account_email, a.is_verified AS account_is_verified,
                   a.role AS account_role
            FROM universities u
            LEFT JOIN accounts a ON a.id = u.account_id
            ORDER BY u.id_uni
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!("Fetched {} universities with accounts", rows.len());

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_university_by_id(
        &self,
        id: UniversityId,
    ) -> Result<Option<UniversityWithAccount>, sqlx::Error> {
        let row = sqlx::query_as::<_, UniversityAccountRow>(
            r#"
            SELECT u.id_uni, u.nom_uni, u.adresse_uni, u.telephone_uni, u.email_uni,
                   u.wallet_address,
                   a.id AS account_id, a.username AS account_username,
                   a.email AS account_email, a.is_verified AS account_is_verified,
                   a.role AS account_role
            FROM universities u
            LEFT JOIN accounts a ON a.id = u.account_id
            WHERE u.id_uni = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        tracing::debug!(
            "University {} {}",
            id,
            if row.is_some() { "found" } else { "not found" }
        );

        Ok(row.map(|r| r.into()))
    }
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct UniversitySummaryRow {
    id_uni: i32,
    nom_uni: String,
}

impl From<UniversitySummaryRow> for UniversitySummary {
    fn from(row: UniversitySummaryRow) -> Self {
        UniversitySummary {
            id: UniversityId::new(row.id_uni),
            name: row.nom_uni,
        }
    }
}

/// One university joined with its (possibly missing) account.
/// All `account_*` columns are NULL when no account is linked.
#[derive(sqlx::FromRow)]
struct UniversityAccountRow {
    id_uni: i32,
    nom_uni: String,
    adresse_uni: Option<String>,
    telephone_uni: Option<String>,
    email_uni: Option<String>,
    wallet_address: Option<String>,
    account_id: Option<i32>,
    account_username: Option<String>,
    account_email: Option<String>,
    account_is_verified: Option<bool>,
    account_role: Option<String>,
}

impl From<UniversityAccountRow> for UniversityWithAccount {
    fn from(row: UniversityAccountRow) -> Self {
        let account = match (
            row.account_id,
            row.account_username,
            row.account_email,
            row.account_is_verified,
            row.account_role,
        ) {
            (Some(id), Some(username), Some(email), Some(is_verified), Some(role)) => {
                Some(AccountSummary {
                    id,
                    username,
                    email,
                    is_verified,
                    role: AccountRole::from(role),
                })
            }
            _ => None,
        };

        UniversityWithAccount {
            id: UniversityId::new(row.id_uni),
            name: row.nom_uni,
            address: row.adresse_uni,
            phone: row.telephone_uni,
            email: row.email_uni,
            wallet_address: row.wallet_address,
            account,
        }
    }
}
