//! API gateway configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Path prefix the SPA's dev server proxies to the backend gateway.
pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned(), timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS) }
    }
}

impl ApiConfig {
    /// Config pointing at `base_url` with the default request timeout.
    /// A trailing `/` is dropped so paths can always start with one.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_owned(), ..Self::default() }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Join the base URL and an absolute API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
