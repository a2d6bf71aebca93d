//! # Infrastructure Layer
//!
//! Concrete implementations for the ShipTrack backend's external
//! dependencies:
//! - **Database**: MySQL connection pool and the `OrderRepository`
//!   implementation using SQLx
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

use thiserror::Error;

// Re-export core types for convenience
pub use ship_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Errors raised while setting up infrastructure
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
