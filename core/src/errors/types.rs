//! Domain-specific error types for token verification and input validation
//!
//! Error messages on the validation variants are the exact user-facing
//! strings of the HTTP contract; the API layer serializes them verbatim.

use thiserror::Error;

/// Token-related errors
///
/// Each variant captures why verification failed. The distinction is kept
/// for logging only: the HTTP layer reports every one of these uniformly as
/// an unauthenticated request.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors for the group-creation command
///
/// Variants are ordered the way the checks run; only the first failing
/// check is ever reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Group name can not be empty")]
    EmptyGroupName,

    #[error("Group description can not be empty")]
    EmptyDescription,

    #[error("Group description needs to be at least 10 characters long")]
    DescriptionTooShort,
}
