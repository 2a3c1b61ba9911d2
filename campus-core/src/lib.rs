//! Campus Core
//!
//! Core types shared by the Campus registry services and tools.
//!
//! This crate contains:
//! - Domain types: identifiers and categories (UniversityId, AccountRole)
//! - DTOs: the read projections returned by the university queries

pub mod domain;
pub mod dto;
