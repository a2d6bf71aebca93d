//! # ShipTrack Core
//!
//! Core business logic and domain layer for the ShipTrack backend.
//! This crate contains the request gate (token verification, route
//! classification, gate policy, security headers), the order domain,
//! the order repository interface and the order service.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
