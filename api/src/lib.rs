//! HTTP surface for the Groupboard backend.
//!
//! Routes, DTOs, authentication extraction, and the domain-error to HTTP
//! translation live here. Business rules stay in `gb_core`; this crate
//! only moves bytes in and out.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
