//! JWT token service.

mod service;

pub use service::TokenService;
