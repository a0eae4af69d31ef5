//! # Infrastructure Layer
//!
//! Concrete implementations of the `gb_core` repository ports, backed by
//! MySQL through SQLx, plus the connection-pool wrapper the API binary
//! wires in at startup.

use thiserror::Error;

pub mod database;

pub use database::DatabasePool;

/// Infrastructure-level errors
///
/// These never cross the domain boundary: repository implementations
/// translate SQLx failures into `DomainError::Database` before returning.
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
