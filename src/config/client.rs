//! HTTP retrieval of the system configuration.
//!
//! DESIGN
//! ======
//! One GET per call, no retries, no timeout beyond the transport default.
//! Every failure is returned to the caller; nothing here substitutes a
//! default configuration. Decoding and validation live in
//! [`SystemConfiguration::from_json`] so they can be tested without a server.

use tracing::{debug, warn};

use super::endpoint::ApiEndpoint;
use super::types::{ConfigError, SystemConfiguration};

// =============================================================================
// CONFIG SOURCE TRAIT
// =============================================================================

/// Anything that can produce a validated configuration. Enables canned
/// sources in tests.
#[async_trait::async_trait]
pub trait ConfigSource: Send + Sync {
    /// Retrieve and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] on transport failure, non-success status,
    /// malformed JSON, or missing required sections.
    async fn fetch_system_configuration(&self) -> Result<SystemConfiguration, ConfigError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

pub struct HttpConfigClient {
    http: reqwest::Client,
    endpoint: ApiEndpoint,
}

impl HttpConfigClient {
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new(endpoint: ApiEndpoint) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ConfigError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint })
    }

    /// Build a client targeting `API_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(ApiEndpoint::from_env())
    }

    #[must_use]
    pub fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl ConfigSource for HttpConfigClient {
    async fn fetch_system_configuration(&self) -> Result<SystemConfiguration, ConfigError> {
        let url = self.endpoint.config_url();
        debug!(%url, "fetching system configuration");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), %url, "system configuration fetch failed");
            return Err(ConfigError::Fetch { status: status.as_u16(), body: text });
        }

        let config = SystemConfiguration::from_json(&text)?;
        debug!(roles = config.roles.len(), "system configuration loaded");
        Ok(config)
    }
}

/// Fetch the configuration from `API_BASE_URL` with a fresh client.
///
/// # Errors
///
/// See [`ConfigSource::fetch_system_configuration`].
pub async fn fetch_system_configuration() -> Result<SystemConfiguration, ConfigError> {
    HttpConfigClient::from_env()?
        .fetch_system_configuration()
        .await
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
