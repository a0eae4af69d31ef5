//! Shared configuration types for the Groupboard server
//!
//! This crate provides the configuration surface used across all server
//! modules: database pool settings, HTTP server settings, and JWT
//! authentication settings. Everything here is plain data with env-backed
//! constructors; no domain knowledge lives in this crate.

pub mod config;

// Re-export commonly used items at crate root
pub use config::{AuthConfig, DatabaseConfig, ServerConfig};
