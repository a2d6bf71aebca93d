//! Claims carried inside a session token.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Decoded identity payload of a valid session token.
///
/// Built per request by the verifier and dropped with the request. Tokens
/// are minted by the login service; this side only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Stable user identifier
    pub id: String,

    /// Issued at timestamp
    #[serde(default)]
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `user_id` valid for `ttl` from now
    pub fn new(user_id: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            id: user_id.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}
