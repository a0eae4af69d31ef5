//! Domain-specific error types and error handling.

mod types;

pub use types::{TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// No valid caller identity. Missing and malformed credentials are
    /// deliberately indistinguishable.
    #[error("You need to be logged in")]
    Unauthenticated,

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A referenced entity does not exist. The message does not leak which
    /// id was looked up.
    #[error("ID not found")]
    ReferenceNotFound,

    /// Unclassified persistence failure; never retried, only propagated.
    #[error("Database error: {message}")]
    Database { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_messages() {
        assert_eq!(
            DomainError::Unauthenticated.to_string(),
            "You need to be logged in"
        );
        assert_eq!(DomainError::ReferenceNotFound.to_string(), "ID not found");
        assert_eq!(
            DomainError::from(ValidationError::EmptyGroupName).to_string(),
            "Group name can not be empty"
        );
        assert_eq!(
            DomainError::from(ValidationError::EmptyDescription).to_string(),
            "Group description can not be empty"
        );
        assert_eq!(
            DomainError::from(ValidationError::DescriptionTooShort).to_string(),
            "Group description needs to be at least 10 characters long"
        );
    }
}
