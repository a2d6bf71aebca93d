//! Session token verifier

use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use ship_shared::config::JwtConfig;

use crate::domain::entities::Claims;
use crate::errors::TokenError;

/// Verifies HS256 session tokens against the process-wide secret.
///
/// Immutable after construction and cheap to share across workers.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Creates a verifier from the JWT configuration
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }

    /// Creates a verifier for `secret` with default settings
    pub fn from_secret(secret: &str) -> Self {
        Self::new(&JwtConfig::new(secret))
    }

    /// Returns the claims of a valid token, `None` for anything else.
    ///
    /// Bad signatures, malformed payloads, expired tokens and empty input
    /// all produce `None`; the cause is only logged.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        match self.decode(token) {
            Ok(claims) => Some(claims),
            Err(reason) => {
                tracing::debug!(%reason, "session token rejected");
                None
            }
        }
    }

    pub(crate) fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(TokenError::InvalidTokenFormat);
        }

        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::MissingRequiredClaim(claim) => TokenError::MissingClaim {
                    claim: claim.clone(),
                },
                ErrorKind::Json(_) => TokenError::InvalidClaims,
                _ => TokenError::InvalidTokenFormat,
            })?;

        if token_data.claims.id.trim().is_empty() {
            return Err(TokenError::MissingClaim {
                claim: "id".to_string(),
            });
        }

        Ok(token_data.claims)
    }
}
