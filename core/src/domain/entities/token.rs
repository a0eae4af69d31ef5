//! JWT claims for bearer-token authentication.
//!
//! A decoded token yields one [`Claims`] value per request; it is never
//! persisted and is discarded once the response has been sent.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DomainError, TokenError};

/// JWT issuer
pub const JWT_ISSUER: &str = "groupboard";

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id, stringified)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for an access token
    pub fn new(user_id: i64, expiry_seconds: i64) -> Self {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(expiry_seconds);

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            nbf: now.timestamp(),
            iss: JWT_ISSUER.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Parses the subject claim back into a user id
    pub fn user_id(&self) -> Result<i64, DomainError> {
        self.sub
            .parse()
            .map_err(|_| DomainError::Token(TokenError::InvalidClaims))
    }
}
