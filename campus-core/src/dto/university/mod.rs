//! University DTOs
//!
//! Projections of the `universities` table (and its linked account) as
//! returned by the registry queries. Field names on the wire follow the
//! column naming used by the rest of the platform (`idUni`, `nomUni`, ...).

use serde::{Deserialize, Serialize};

use crate::domain::account::AccountRole;
use crate::domain::university::UniversityId;

/// Identifier and name only, used for pickers and listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversitySummary {
    #[serde(rename = "idUni")]
    pub id: UniversityId,

    #[serde(rename = "nomUni")]
    pub name: String,
}

/// Full university projection with its linked account, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversityWithAccount {
    #[serde(rename = "idUni")]
    pub id: UniversityId,

    #[serde(rename = "nomUni")]
    pub name: String,

    /// Postal address
    #[serde(rename = "adresseUni")]
    pub address: Option<String>,

    #[serde(rename = "telephoneUni")]
    pub phone: Option<String>,

    #[serde(rename = "emailUni")]
    pub email: Option<String>,

    /// On-chain wallet used for credential issuance
    #[serde(rename = "walletAddress")]
    pub wallet_address: Option<String>,

    /// `None` when no account is linked to the university
    pub account: Option<AccountSummary>,
}

/// Subset of account fields exposed alongside a university
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub id: i32,
    pub username: String,
    pub email: String,

    #[serde(rename = "isVerified")]
    pub is_verified: bool,

    pub role: AccountRole,
}

impl From<UniversityWithAccount> for UniversitySummary {
    fn from(university: UniversityWithAccount) -> Self {
        UniversitySummary {
            id: university.id,
            name: university.name,
        }
    }
}
