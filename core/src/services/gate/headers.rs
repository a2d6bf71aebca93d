//! Baseline security headers

use ship_shared::config::Environment;

/// Fixed source allow-list sent with every response
pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; script-src 'self' 'unsafe-inline' 'unsafe-eval'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; font-src 'self' data:; connect-src 'self'";

/// One year, subdomains included, eligible for browser preload lists
pub const STRICT_TRANSPORT_SECURITY: &str = "max-age=31536000; includeSubDomains; preload";

const BASELINE: [(&str, &str); 5] = [
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("x-xss-protection", "1; mode=block"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    ("content-security-policy", CONTENT_SECURITY_POLICY),
];

/// Header set stamped onto every response the gate lets out, including
/// redirects and rejections. Names are lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityHeaders {
    headers: Vec<(&'static str, &'static str)>,
}

impl SecurityHeaders {
    /// `production` adds Strict-Transport-Security
    pub fn new(production: bool) -> Self {
        let mut headers = BASELINE.to_vec();
        if production {
            headers.push(("strict-transport-security", STRICT_TRANSPORT_SECURITY));
        }
        Self { headers }
    }

    pub fn for_environment(environment: Environment) -> Self {
        Self::new(environment.is_production())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.headers.iter().copied()
    }

    pub fn includes_hsts(&self) -> bool {
        self.headers
            .iter()
            .any(|(name, _)| *name == "strict-transport-security")
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}
