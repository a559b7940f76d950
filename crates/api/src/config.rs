//! Client configuration.

pub const API_VERSION_PREFIX: &str = "/api/v1";
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";
pub const API_BASE_ENV: &str = "BOOKNEST_API_BASE";

/// Where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Normalise `base`: trailing slashes are dropped and the API version
    /// prefix is appended unless already present.
    pub fn new(base: impl AsRef<str>) -> Self {
        let trimmed = base.as_ref().trim().trim_end_matches('/');
        let base_url = if trimmed.ends_with(API_VERSION_PREFIX) {
            trimmed.to_string()
        } else {
            format!("{trimmed}{API_VERSION_PREFIX}")
        };
        Self { base_url }
    }

    /// Read `BOOKNEST_API_BASE`, falling back to the local dev backend.
    pub fn from_env() -> Self {
        let base = std::env::var(API_BASE_ENV).unwrap_or_else(|_| {
            tracing::debug!("{API_BASE_ENV} not set; using {DEFAULT_API_BASE}");
            DEFAULT_API_BASE.to_string()
        });
        Self::new(base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/books/42`.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
