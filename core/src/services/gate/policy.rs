//! Gate decision combining route classification and token verification

use crate::domain::entities::Claims;
use crate::services::token::TokenVerifier;

use super::headers::SecurityHeaders;
use super::routes::{RouteClass, RoutePolicy};

/// Body message for rejected API calls
pub const AUTH_REQUIRED_MESSAGE: &str = "Authentication required";

/// Where unauthenticated visitors of protected pages are sent
pub const LOGIN_PATH: &str = "/login";

/// Where signed-in visitors of auth-only pages are sent
pub const HOME_PATH: &str = "/";

/// Raw token candidates pulled from a request
#[derive(Debug, Clone, Copy, Default)]
pub struct Credentials<'a> {
    /// Value of the auth cookie
    pub cookie: Option<&'a str>,
    /// Token from `Authorization: Bearer <token>`
    pub bearer: Option<&'a str>,
}

/// What the transport layer must do with a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Forward to the handler; `identity` is set when the caller is signed in
    PassThrough { identity: Option<Claims> },
    /// Answer with a temporary redirect to `location`
    Redirect { location: &'static str },
    /// Answer with `status` and a `{"message": ...}` body
    Reject { status: u16, message: &'static str },
}

/// The request gate.
///
/// Pure and synchronous: all state is fixed at construction, so a single
/// instance can be shared by every worker.
#[derive(Clone)]
pub struct GatePolicy {
    routes: RoutePolicy,
    verifier: TokenVerifier,
    headers: SecurityHeaders,
}

impl GatePolicy {
    pub fn new(routes: RoutePolicy, verifier: TokenVerifier, headers: SecurityHeaders) -> Self {
        Self {
            routes,
            verifier,
            headers,
        }
    }

    pub fn security_headers(&self) -> &SecurityHeaders {
        &self.headers
    }

    /// Resolves the caller's identity.
    ///
    /// API calls present a bearer token, falling back to the cookie when no
    /// Authorization header was sent. Pages only use the cookie. A token that
    /// fails verification is treated exactly like a missing one.
    pub fn authenticate(&self, class: &RouteClass, credentials: &Credentials<'_>) -> Option<Claims> {
        let token = if class.is_api {
            credentials.bearer.or(credentials.cookie)
        } else {
            credentials.cookie
        };
        token.and_then(|t| self.verifier.verify(t))
    }

    /// Decides the fate of a request to `path`
    pub fn decide(&self, path: &str, credentials: &Credentials<'_>) -> GateDecision {
        let class = self.routes.classify(path);
        let identity = self.authenticate(&class, credentials);
        let decision = Self::apply(&class, identity);

        tracing::debug!(path, ?class, ?decision, "gate decision");
        decision
    }

    fn apply(class: &RouteClass, identity: Option<Claims>) -> GateDecision {
        let authenticated = identity.is_some();

        if class.is_api {
            if class.is_protected_api && !authenticated {
                return GateDecision::Reject {
                    status: 401,
                    message: AUTH_REQUIRED_MESSAGE,
                };
            }
            return GateDecision::PassThrough { identity };
        }

        // Checked before the login redirect so extended tables stay deterministic
        if authenticated && class.is_auth_only_page {
            return GateDecision::Redirect { location: HOME_PATH };
        }

        if !authenticated && class.is_protected_page {
            return GateDecision::Redirect { location: LOGIN_PATH };
        }

        GateDecision::PassThrough { identity }
    }
}
