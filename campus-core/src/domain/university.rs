//! University domain model
//!
//! Identifier type for universities, including the parse step applied to
//! identifiers that arrive as text (path segments, CLI arguments).

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Primary identifier of a university row (`idUni`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniversityId(i32);

impl UniversityId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw integer value, as bound into queries
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for UniversityId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UniversityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a textual identifier.
///
/// Surrounding ASCII whitespace is ignored. The remainder must be a base-10
/// integer (optionally signed) that fits in an `i32`; trailing garbage such as
/// `"2abc"` or `"1.5"` is rejected rather than truncated.
impl FromStr for UniversityId {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim_matches(|c: char| c.is_ascii_whitespace())
            .parse::<i32>()
            .map(UniversityId)
            .map_err(|_| InvalidIdentifier {
                input: s.to_string(),
            })
    }
}

/// A university identifier that could not be parsed as an integer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid university identifier: {input:?}")]
pub struct InvalidIdentifier {
    input: String,
}

impl InvalidIdentifier {
    /// The text that was rejected
    pub fn input(&self) -> &str {
        &self.input
    }
}
