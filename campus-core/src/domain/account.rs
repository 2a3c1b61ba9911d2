//! Account domain model
//!
//! Accounts are owned by the authentication side of the platform; the
//! registry only echoes a handful of their fields.

use serde::{Deserialize, Serialize};

/// Role granted to an account
///
/// Always carries the stored text: roles this build has no variant for are
/// kept verbatim in `Other`, and serialization writes the stored text back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountRole {
    /// Platform administrator
    Admin,

    /// Account operated on behalf of a university
    University,

    /// Student account
    Student,

    /// Any other stored role
    Other(String),
}

impl AccountRole {
    /// The role as stored
    pub fn as_str(&self) -> &str {
        match self {
            AccountRole::Admin => "admin",
            AccountRole::University => "university",
            AccountRole::Student => "student",
            AccountRole::Other(role) => role,
        }
    }
}

impl From<String> for AccountRole {
    fn from(value: String) -> Self {
        match value.as_str() {
            "admin" => AccountRole::Admin,
            "university" => AccountRole::University,
            "student" => AccountRole::Student,
            _ => AccountRole::Other(value),
        }
    }
}

impl From<AccountRole> for String {
    fn from(role: AccountRole) -> Self {
        match role {
            AccountRole::Other(role) => role,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
