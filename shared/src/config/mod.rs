//! Configuration module with business-specific sub-modules
//!
//! - `auth` - JWT verification and auth cookie configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

// Re-export commonly used types
pub use auth::{JwtConfig, DEFAULT_AUTH_COOKIE};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::{CorsConfig, ServerConfig};
