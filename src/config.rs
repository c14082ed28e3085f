//! Provider configuration.
//!
//! Holds the admin API endpoint and the knobs that shape resource behaviour.
//! Built either explicitly through [`ProviderConfigBuilder`] or from the
//! environment with [`ProviderConfig::from_env`].

use crate::error::{ProviderError, ProviderResult};
use crate::state::IdStrategy;
use std::time::Duration;

/// Environment variable holding the admin API endpoint.
pub const ENV_ENDPOINT: &str = "MINIO_ENDPOINT";
/// Environment variable holding the request timeout in seconds.
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "MINIO_REQUEST_TIMEOUT_SECS";
/// Environment variable selecting the identity strategy (`random` or `derived`).
pub const ENV_ID_STRATEGY: &str = "MINIO_LDAP_ID_STRATEGY";

const DEFAULT_ENDPOINT: &str = "http://localhost:9090";
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration shared by every resource the provider manages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Base URL of the admin API, without trailing slash.
    /// Examples: "http://localhost:9090", "https://console.minio.example.com"
    pub endpoint: String,

    /// Timeout applied to every admin API request.
    pub request_timeout: Duration,

    /// Identity generation strategy used on create.
    pub id_strategy: IdStrategy,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            id_strategy: IdStrategy::default(),
        }
    }
}

impl ProviderConfig {
    /// Start building a configuration.
    pub fn builder() -> ProviderConfigBuilder {
        ProviderConfigBuilder::new()
    }

    /// Build a configuration from `MINIO_*` environment variables.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> ProviderResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> ProviderResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            builder = builder.endpoint(endpoint);
        }

        if let Some(secs) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                ProviderError::configuration(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    ENV_REQUEST_TIMEOUT_SECS, secs
                ))
            })?;
            builder = builder.request_timeout(Duration::from_secs(secs));
        }

        if let Some(strategy) = lookup(ENV_ID_STRATEGY) {
            builder = builder.id_strategy(strategy.parse()?);
        }

        builder.build()
    }

    /// Absolute URL of an admin API path such as `/api/v1/configs/identity_ldap`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint, path.trim_start_matches('/'))
    }
}

/// Builder for [`ProviderConfig`].
#[derive(Debug, Clone, Default)]
pub struct ProviderConfigBuilder {
    config: ProviderConfig,
}

impl ProviderConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the admin API endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the admin API request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Set the identity strategy.
    pub fn id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.config.id_strategy = strategy;
        self
    }

    /// Validate and return the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not an http(s) URL or the timeout is zero.
    pub fn build(mut self) -> ProviderResult<ProviderConfig> {
        let endpoint = self.config.endpoint.trim().trim_end_matches('/').to_string();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ProviderError::configuration(format!(
                "endpoint must start with http:// or https://, got '{}'",
                self.config.endpoint
            )));
        }
        if self.config.request_timeout.is_zero() {
            return Err(ProviderError::configuration(
                "request timeout must be greater than zero",
            ));
        }

        self.config.endpoint = endpoint;
        Ok(self.config)
    }
}
