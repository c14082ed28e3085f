//! Config checker backed by the server's admin API.

use super::ConfigChecker;
use crate::config::ProviderConfig;
use crate::context::RequestContext;
use crate::error::{ProviderError, ProviderResult};
use crate::ldap::{ConfigurationResponse, IDENTITY_LDAP_SUBSYSTEM, LdapConfig};
use crate::state::ResourceData;
use log::{debug, trace, warn};
use reqwest::Client;

/// Admin API path of the LDAP identity config subsystem.
pub const IDENTITY_LDAP_PATH: &str = "/api/v1/configs/identity_ldap";

/// Fetches the effective configuration with `GET /api/v1/configs/identity_ldap`.
#[derive(Debug, Clone)]
pub struct AdminApiConfigChecker {
    client: Client,
    url: String,
}

impl AdminApiConfigChecker {
    /// Build a checker with its own HTTP client.
    pub fn new(config: &ProviderConfig) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self::with_client(config, client))
    }

    /// Build a checker around a shared HTTP client.
    pub fn with_client(config: &ProviderConfig, client: Client) -> Self {
        Self {
            client,
            url: config.api_url(IDENTITY_LDAP_PATH),
        }
    }

    /// URL this checker reads from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ConfigChecker for AdminApiConfigChecker {
    async fn check_config(
        &self,
        data: &ResourceData,
        context: &RequestContext,
    ) -> ProviderResult<LdapConfig> {
        debug!(
            "Fetching LDAP configuration for '{}' from {} (request: '{}')",
            data.id_str(),
            self.url,
            context.request_id
        );

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        trace!("Admin API answered {} with {} bytes", status, body.len());

        if !status.is_success() {
            warn!(
                "Admin API rejected LDAP config read for '{}' with status {}",
                data.id_str(),
                status
            );
            return Err(ProviderError::admin_api(status.as_u16(), body));
        }

        let parsed: ConfigurationResponse = serde_json::from_str(&body)?;
        let subsystem = parsed.into_subsystem(IDENTITY_LDAP_SUBSYSTEM).ok_or_else(|| {
            ProviderError::admin_api(
                status.as_u16(),
                format!("response did not contain the {} subsystem", IDENTITY_LDAP_SUBSYSTEM),
            )
        })?;

        let config = LdapConfig::from_key_values(&subsystem.key_values);
        debug!("Server LDAP configuration for '{}': {:?}", data.id_str(), config);
        Ok(config)
    }
}
