//! Repository Module
//!
//! Data access layer for the registry.
//! Repositories are trait-based so services can run against a fake store.

#[cfg(test)]
pub(crate) mod memory;
pub mod university;

// Re-export for convenience
pub use university::{PgUniversityRepository, UniversityRepository};
