//! Authentication configuration
//!
//! Only verification settings live here; tokens are issued by a separate
//! login service that shares the signing secret.

use serde::{Deserialize, Serialize};

/// Name of the cookie carrying the session token for page navigation
pub const DEFAULT_AUTH_COOKIE: &str = "auth_token";

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT verification configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared secret used to verify HS256 signatures
    pub secret: String,

    /// Cookie that carries the token on page requests
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Clock skew tolerance in seconds when checking `exp`
    #[serde(default = "default_leeway")]
    pub leeway: u64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            cookie_name: default_cookie_name(),
            leeway: default_leeway(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| String::from(DEFAULT_SECRET));
        let leeway = std::env::var("JWT_LEEWAY_SECONDS")
            .unwrap_or_else(|_| "0".to_string())
            .parse()
            .unwrap_or(0);

        Self {
            secret,
            leeway,
            ..Default::default()
        }
    }

    /// Override the clock skew tolerance
    pub fn with_leeway(mut self, seconds: u64) -> Self {
        self.leeway = seconds;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

fn default_cookie_name() -> String {
    String::from(DEFAULT_AUTH_COOKIE)
}

fn default_leeway() -> u64 {
    0
}
