//! Authenticated identity attached to requests by the gate.
//!
//! The gate verifies the caller's token once per request and stores an
//! [`AuthContext`] in the request extensions. Handlers read it through the
//! extractors below and never look at tokens themselves.

use actix_web::{
    cookie::Cookie,
    dev::ServiceRequest,
    error::InternalError,
    http::header::{AUTHORIZATION, COOKIE},
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use ship_core::domain::entities::Claims;
use ship_core::services::gate::AUTH_REQUIRED_MESSAGE;
use ship_shared::MessageResponse;
use std::future::{ready, Ready};

/// User authentication context injected into requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// User ID taken from verified claims
    pub user_id: String,
    /// Token issue time (unix seconds)
    pub issued_at: i64,
    /// Token expiry (unix seconds)
    pub expires_at: i64,
}

impl AuthContext {
    /// Creates a new authentication context from verified claims
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            user_id: claims.id,
            issued_at: claims.iat,
            expires_at: claims.exp,
        }
    }
}

/// Extracts the token from `Authorization: Bearer <token>`
pub fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
}

/// Reads cookie `name` from the raw `Cookie` headers.
///
/// Entries that fail to parse are skipped, so an unrelated malformed cookie
/// on the same domain does not hide the session cookie.
pub fn extract_cookie_token(req: &ServiceRequest, name: &str) -> Option<String> {
    req.headers()
        .get_all(COOKIE)
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| Cookie::parse_encoded(pair).ok())
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}

/// 401 response with the generic message; never says why
pub fn authentication_required() -> HttpResponse {
    HttpResponse::Unauthorized().json(MessageResponse::new(AUTH_REQUIRED_MESSAGE))
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result: Result<Self, Self::Error> = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| {
                InternalError::from_response(AUTH_REQUIRED_MESSAGE, authentication_required()).into()
            });

        ready(result)
    }
}

/// Extractor for optional authentication
pub struct OptionalAuth(pub Option<AuthContext>);

impl FromRequest for OptionalAuth {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let auth = req.extensions().get::<AuthContext>().cloned();
        ready(Ok(OptionalAuth(auth)))
    }
}
