//! Data Transfer Objects
//!
//! Read projections returned by the registry. Each query has its own named
//! shape, so the set of fields a caller receives is fixed by the type.

pub mod university;
