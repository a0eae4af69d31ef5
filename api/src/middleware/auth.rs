//! Bearer-token authentication for protected endpoints.
//!
//! [`AuthContext`] is an extractor: declaring it as a handler parameter
//! gates the handler behind JWT verification. The extractor resolves
//! synchronously, so on a protected route authentication always fails
//! before any of the request body is looked at.

use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header::AUTHORIZATION, web, FromRequest, HttpRequest};

use gb_core::errors::DomainError;
use gb_core::services::token::TokenService;

use crate::handlers::error::ApiError;

/// Caller identity established from a verified bearer token
///
/// Lives for the duration of one request and is never stored.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User id from the token's subject claim
    pub user_id: i64,
    /// JWT ID, carried for request logging
    pub jti: String,
}

impl FromRequest for AuthContext {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthContext, ApiError> {
    let token = extract_bearer_token(req).ok_or(DomainError::Unauthenticated)?;

    let token_service = req
        .app_data::<web::Data<TokenService>>()
        .ok_or(DomainError::Database {
            message: "token service not configured".to_string(),
        })?;

    let claims = token_service.verify_access_token(&token)?;
    let user_id = claims.user_id()?;

    Ok(AuthContext {
        user_id,
        jti: claims.jti,
    })
}

/// Extracts the Bearer token from the Authorization header
fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extract_bearer_token() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_http_request();
        assert_eq!(
            extract_bearer_token(&req),
            Some("test_token_123".to_string())
        );

        let req_no_bearer = TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_http_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_no_header = TestRequest::default().to_http_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }
}
