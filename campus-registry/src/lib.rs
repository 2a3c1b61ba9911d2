//! Campus Registry
//!
//! Read-only access to the university registry: a repository over
//! PostgreSQL, the service functions built on it, and an HTTP surface.

pub mod api;
pub mod config;
pub mod db;
pub mod repository;
pub mod service;
