//! Core domain types
//!
//! Identifiers and enumerations shared between the registry (which reads
//! them from the database) and its callers.

pub mod account;
pub mod university;
