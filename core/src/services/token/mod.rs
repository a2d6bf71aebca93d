//! Token service module for session token verification
//!
//! Tokens are issued elsewhere; this module only decodes and validates them
//! against the shared HS256 secret.

mod verifier;


pub use verifier::TokenVerifier;
