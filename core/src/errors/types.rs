//! Error types for token verification and order rules

use thiserror::Error;

use crate::domain::entities::OrderStatus;

/// Token verification failures.
///
/// These never leave the verifier: every variant collapses to "not
/// authenticated" before the gate branches on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Missing required claim: {claim}")]
    MissingClaim { claim: String },
}

/// Order business rule violations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    #[error("Invalid order status: {value}")]
    InvalidStatus { value: String },

    #[error("Cannot change order status from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("Total amount must be a non-negative number")]
    InvalidAmount,

    #[error("Order details must be a JSON object")]
    InvalidDetails,

    #[error("Invalid tracking number")]
    InvalidTrackingNumber,
}
