//! In-memory UniversityRepository used by the service and API tests

use async_trait::async_trait;
use campus_core::domain::account::AccountRole;
use campus_core::domain::university::UniversityId;
use campus_core::dto::university::{AccountSummary, UniversitySummary, UniversityWithAccount};

use super::UniversityRepository;

pub struct InMemoryUniversityRepository {
    universities: Vec<UniversityWithAccount>,
    fail: bool,
}

impl InMemoryUniversityRepository {
    pub fn new(mut universities: Vec<UniversityWithAccount>) -> Self {
        universities.sort_by_key(|u| u.id);
        Self {
            universities,
            fail: false,
        }
    }

    /// A store whose every round trip fails with a pool timeout
    pub fn failing() -> Self {
        Self {
            universities: Vec::new(),
            fail: true,
        }
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.fail {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }
}

#[async_trait]
impl UniversityRepository for InMemoryUniversityRepository {
    async fn get_all(&self) -> Result<Vec<UniversitySummary>, sqlx::Error> {
        self.check()?;
        Ok(self.universities.iter().cloned().map(Into::into).collect())
    }

    async fn get_universities_with_account(
        &self,
    ) -> Result<Vec<UniversityWithAccount>, sqlx::Error> {
        self.check()?;
        Ok(self.universities.clone())
    }

    async fn find_university_by_id(
        &self,
        id: UniversityId,
    ) -> Result<Option<UniversityWithAccount>, sqlx::Error> {
        self.check()?;
        Ok(self.universities.iter().find(|u| u.id == id).cloned())
    }
}

/// Alpha (id 1) has no account; Beta (id 2) is linked to admin account 10
pub fn fixture() -> Vec<UniversityWithAccount> {
    vec![
        UniversityWithAccount {
            id: UniversityId::new(1),
            name: "Alpha".to_string(),
            address: None,
            phone: None,
            email: None,
            wallet_address: None,
            account: None,
        },
        UniversityWithAccount {
            id: UniversityId::new(2),
            name: "Beta".to_string(),
            address: Some("2 Beta Avenue".to_string()),
            phone: Some("+33 1 23 45 67 89".to_string()),
            email: Some("contact@beta.edu".to_string()),
            wallet_address: Some("0x2b".to_string()),
            account: Some(AccountSummary {
                id: 10,
                username: "bob".to_string(),
                email: "bob@beta.edu".to_string(),
                is_verified: true,
                role: AccountRole::Admin,
            }),
        },
    ]
}
