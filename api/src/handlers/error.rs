//! Domain-error to HTTP translation.
//!
//! Status mapping:
//! - `Unauthenticated` and every `Token` failure → 401 with the fixed
//!   message; missing and malformed credentials are indistinguishable.
//! - `Validation` and `ReferenceNotFound` → 400 with the rule's message.
//! - `Database` → 500 with a generic body; the underlying cause is logged,
//!   never echoed to the caller.

use std::fmt;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use gb_core::errors::DomainError;

use crate::dto::MessageBody;

/// API-level wrapper turning a [`DomainError`] into an HTTP response
#[derive(Debug)]
pub struct ApiError(DomainError);

impl ApiError {
    /// The wrapped domain error
    pub fn inner(&self) -> &DomainError {
        &self.0
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::Unauthenticated | DomainError::Token(_) => StatusCode::UNAUTHORIZED,
            DomainError::Validation(_) | DomainError::ReferenceNotFound => StatusCode::BAD_REQUEST,
            DomainError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let msg = match &self.0 {
            // Absent and invalid tokens report the same thing.
            DomainError::Unauthenticated | DomainError::Token(_) => {
                log::warn!("rejected unauthenticated request: {}", self.0);
                DomainError::Unauthenticated.to_string()
            }
            DomainError::Database { .. } => {
                log::error!("persistence failure: {}", self.0);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(MessageBody::new(msg))
    }
}
