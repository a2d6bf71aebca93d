//! Request gate
//!
//! Decides, for every inbound request, whether it passes through, is
//! redirected, or is rejected:
//! - `routes` - prefix tables and path classification
//! - `headers` - baseline security headers stamped on every response
//! - `policy` - the decision combining classification and verification

mod headers;
mod policy;
mod routes;


pub use headers::{SecurityHeaders, CONTENT_SECURITY_POLICY, STRICT_TRANSPORT_SECURITY};
pub use policy::{
    Credentials, GateDecision, GatePolicy, AUTH_REQUIRED_MESSAGE, HOME_PATH, LOGIN_PATH,
};
pub use routes::{
    RouteClass, RoutePolicy, API_PREFIX, AUTH_ONLY_PAGES, PROTECTED_API, PROTECTED_PAGES,
};
