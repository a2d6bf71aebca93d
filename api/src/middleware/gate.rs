//! Request gate middleware.
//!
//! Runs the core [`GatePolicy`] for every request: protected API calls
//! without a valid token get a JSON 401, pages are redirected according to
//! the signed-in state, and everything else is forwarded with the caller's
//! [`AuthContext`] attached when there is one.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::{header::LOCATION, StatusCode},
    Error, HttpMessage, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use ship_core::services::gate::{Credentials, GateDecision, GatePolicy};
use ship_shared::{config::DEFAULT_AUTH_COOKIE, MessageResponse};
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use super::auth::{extract_bearer_token, extract_cookie_token, AuthContext};

/// Gate middleware factory
#[derive(Clone)]
pub struct RequestGate {
    policy: Arc<GatePolicy>,
    cookie_name: Rc<str>,
}

impl RequestGate {
    /// Creates a gate reading tokens from the default `auth_token` cookie
    pub fn new(policy: Arc<GatePolicy>) -> Self {
        Self::with_cookie(policy, DEFAULT_AUTH_COOKIE)
    }

    pub fn with_cookie(policy: Arc<GatePolicy>, cookie_name: &str) -> Self {
        Self {
            policy,
            cookie_name: Rc::from(cookie_name),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestGateMiddleware {
            service: Rc::new(service),
            policy: Arc::clone(&self.policy),
            cookie_name: Rc::clone(&self.cookie_name),
        }))
    }
}

/// Gate middleware service
pub struct RequestGateMiddleware<S> {
    service: Rc<S>,
    policy: Arc<GatePolicy>,
    cookie_name: Rc<str>,
}

impl<S, B> Service<ServiceRequest> for RequestGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        let cookie = extract_cookie_token(&req, &self.cookie_name);
        let bearer = extract_bearer_token(&req);
        let credentials = Credentials {
            cookie: cookie.as_deref(),
            bearer: bearer.as_deref(),
        };

        match self.policy.decide(req.path(), &credentials) {
            GateDecision::PassThrough { identity } => {
                if let Some(claims) = identity {
                    req.extensions_mut().insert(AuthContext::from_claims(claims));
                }
                Box::pin(async move {
                    let response = service.call(req).await?;
                    Ok(response.map_into_left_body())
                })
            }
            GateDecision::Redirect { location } => {
                log::debug!("Gate redirect: {} -> {}", req.path(), location);
                let response = HttpResponse::TemporaryRedirect()
                    .insert_header((LOCATION, location))
                    .finish();
                Box::pin(async move { Ok(req.into_response(response).map_into_right_body()) })
            }
            GateDecision::Reject { status, message } => {
                log::debug!("Gate rejected {} {}", req.method(), req.path());
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::UNAUTHORIZED);
                let response = HttpResponse::build(status).json(MessageResponse::new(message));
                Box::pin(async move { Ok(req.into_response(response).map_into_right_body()) })
            }
        }
    }
}
