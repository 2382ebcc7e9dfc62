//! API endpoint configuration parsed from environment variables.

/// Path of the configuration document, appended to the base URL.
pub const CONFIG_PATH: &str = "/api/v1/config";

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "API_BASE_URL";

/// Where the configuration document is served from.
///
/// An empty base URL means "same origin": the request targets
/// [`CONFIG_PATH`] relative to whatever serves the frontend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiEndpoint {
    base_url: String,
}

impl ApiEndpoint {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Build from `API_BASE_URL`; unset means an empty base URL.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(std::env::var(BASE_URL_ENV).unwrap_or_default())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the configuration document.
    #[must_use]
    pub fn config_url(&self) -> String {
        format!("{}{CONFIG_PATH}", self.base_url)
    }
}

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod tests;
