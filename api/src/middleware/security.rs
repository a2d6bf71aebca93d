//! Security headers middleware.
//!
//! Stamps the baseline security headers (plus HSTS in production) onto every
//! response, whatever produced it: handlers, the gate's redirects and
//! rejections, or the 404 fallback.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    Error,
};
use futures_util::future::LocalBoxFuture;
use ship_core::services::gate::SecurityHeaders;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

/// Security middleware factory
#[derive(Clone)]
pub struct SecurityMiddleware {
    headers: Rc<SecurityHeaders>,
}

impl SecurityMiddleware {
    pub fn new(headers: SecurityHeaders) -> Self {
        log::info!(
            "Security middleware configured: {} headers, hsts={}",
            headers.len(),
            headers.includes_hsts()
        );
        Self {
            headers: Rc::new(headers),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityMiddlewareService {
            service: Rc::new(service),
            headers: Rc::clone(&self.headers),
        }))
    }
}

/// Security middleware service implementation
pub struct SecurityMiddlewareService<S> {
    service: Rc<S>,
    headers: Rc<SecurityHeaders>,
}

impl<S, B> Service<ServiceRequest> for SecurityMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let headers = Rc::clone(&self.headers);

        Box::pin(async move {
            let mut response = service.call(req).await?;
            add_security_response_headers(&mut response, &headers);
            Ok(response)
        })
    }
}

/// Adds the configured security headers to the response
fn add_security_response_headers<B>(response: &mut ServiceResponse<B>, headers: &SecurityHeaders) {
    let response_headers = response.headers_mut();
    for (name, value) in headers.iter() {
        response_headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }
}
