//! Route tables and path classification

/// Pages that require a signed-in user
pub const PROTECTED_PAGES: &[&str] = &["/orders"];

/// Pages only meaningful to visitors who are not signed in
pub const AUTH_ONLY_PAGES: &[&str] = &["/login", "/register"];

/// API paths that require a signed-in user
pub const PROTECTED_API: &[&str] = &["/api/auth/me", "/api/orders"];

/// Prefix that marks a request as an API call rather than page navigation
pub const API_PREFIX: &str = "/api/";

/// Categories a request path falls into.
///
/// Each flag is computed on its own, so a path may match several lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteClass {
    pub is_api: bool,
    pub is_protected_page: bool,
    pub is_auth_only_page: bool,
    pub is_protected_api: bool,
}

/// Immutable prefix tables consulted by the gate.
///
/// Built once at startup and shared read-only by every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePolicy {
    api_prefix: String,
    protected_pages: Vec<String>,
    auth_only_pages: Vec<String>,
    protected_api: Vec<String>,
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self::new(
            PROTECTED_PAGES.iter().copied(),
            AUTH_ONLY_PAGES.iter().copied(),
            PROTECTED_API.iter().copied(),
        )
    }
}

impl RoutePolicy {
    pub fn new<P, A, I>(protected_pages: P, auth_only_pages: A, protected_api: I) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            api_prefix: API_PREFIX.to_string(),
            protected_pages: protected_pages.into_iter().map(Into::into).collect(),
            auth_only_pages: auth_only_pages.into_iter().map(Into::into).collect(),
            protected_api: protected_api.into_iter().map(Into::into).collect(),
        }
    }

    /// Classifies `path` by plain prefix match against each table
    pub fn classify(&self, path: &str) -> RouteClass {
        RouteClass {
            is_api: path.starts_with(&self.api_prefix),
            is_protected_page: matches_any(path, &self.protected_pages),
            is_auth_only_page: matches_any(path, &self.auth_only_pages),
            is_protected_api: matches_any(path, &self.protected_api),
        }
    }

    pub fn protected_pages(&self) -> &[String] {
        &self.protected_pages
    }

    pub fn auth_only_pages(&self) -> &[String] {
        &self.auth_only_pages
    }

    pub fn protected_api(&self) -> &[String] {
        &self.protected_api
    }
}

fn matches_any(path: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
}
