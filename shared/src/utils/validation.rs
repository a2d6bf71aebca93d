//! Field validation helpers shared by the order API and the store

use once_cell::sync::Lazy;
use regex::Regex;

/// Carrier tracking numbers: 6-40 characters of letters, digits and dashes
static TRACKING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9\-]{5,39}$").expect("valid tracking regex"));

/// Check if a carrier tracking number is well formed
pub fn is_valid_tracking_number(value: &str) -> bool {
    TRACKING_NUMBER.is_match(value)
}

/// Check if a monetary amount can be stored (finite and not negative)
pub fn is_valid_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Check if a string is not empty after trimming
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}
