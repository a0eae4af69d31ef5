//! HS256 access-token signing and verification.
//!
//! Verification is the gate in front of every protected endpoint. Signing
//! lives here too because the signin subsystem and the test suites need a
//! source of valid tokens, and the two halves must agree on claims shape,
//! issuer, and algorithm.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use gb_shared::config::AuthConfig;

use crate::domain::entities::token::{Claims, JWT_ISSUER};
use crate::errors::{DomainError, DomainResult, TokenError};

/// Token service for JWT management
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_token_expiry: i64,
}

impl TokenService {
    /// Create a token service from the auth configuration
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.validate_exp = true;

        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            access_token_expiry: config.access_token_expiry,
        }
    }

    /// Generates a signed access token for a user
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded JWT
    /// * `Err(DomainError)` - Token could not be signed
    pub fn generate_access_token(&self, user_id: i64) -> DomainResult<String> {
        let claims = Claims::new(user_id, self.access_token_expiry);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies an access token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(DomainError)` - Token is invalid, expired, or malformed
    pub fn verify_access_token(&self, token: &str) -> DomainResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        DomainError::Token(TokenError::TokenExpired)
                    }
                    jsonwebtoken::errors::ErrorKind::ImmatureSignature => {
                        DomainError::Token(TokenError::TokenNotYetValid)
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        DomainError::Token(TokenError::InvalidSignature)
                    }
                    _ => DomainError::Token(TokenError::InvalidTokenFormat),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(&AuthConfig::new("test-secret"))
    }

    #[test]
    fn test_generate_and_verify_round_trip() {
        let service = service();
        let token = service.generate_access_token(1).unwrap();

        let claims = service.verify_access_token(&token).unwrap();
        assert_eq!(claims.user_id().unwrap(), 1);
        assert_eq!(claims.iss, JWT_ISSUER);
    }

    #[test]
    fn test_rejects_garbage_token() {
        let service = service();
        let result = service.verify_access_token("not-a-jwt");
        assert!(matches!(
            result,
            Err(DomainError::Token(TokenError::InvalidTokenFormat))
        ));
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let token = service().generate_access_token(1).unwrap();
        let other = TokenService::new(&AuthConfig::new("different-secret"));

        let result = other.verify_access_token(&token);
        assert!(matches!(
            result,
            Err(DomainError::Token(TokenError::InvalidSignature))
        ));
    }

    #[test]
    fn test_rejects_expired_token() {
        let config = AuthConfig {
            jwt_secret: "test-secret".to_string(),
            access_token_expiry: -3600,
        };
        let service = TokenService::new(&config);
        let token = service.generate_access_token(1).unwrap();

        let result = service.verify_access_token(&token);
        assert!(matches!(
            result,
            Err(DomainError::Token(TokenError::TokenExpired))
        ));
    }
}
