//! Service Module
//!
//! Business logic layer for the registry.
//! Services sit between callers and repositories and own the error taxonomy.

pub mod university;

// Re-export for convenience
pub use university as university_service;
