//! Shared utilities and common types for the ShipTrack server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types (environment, JWT, server, database)
//! - Error response structures
//! - Validation helpers for order fields

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    CorsConfig, DatabaseConfig, Environment, JwtConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse, MessageResponse};
pub use utils::validation;
