//! Config checker that resolves the configuration from local state only.

use super::ConfigChecker;
use crate::context::RequestContext;
use crate::error::ProviderResult;
use crate::ldap::LdapConfig;
use crate::state::ResourceData;
use log::debug;

/// Derives the effective configuration from the declared attribute values.
///
/// Never touches the network. Useful for plans and for servers whose admin API
/// is not reachable from where the provider runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalConfigChecker;

impl LocalConfigChecker {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigChecker for LocalConfigChecker {
    async fn check_config(
        &self,
        data: &ResourceData,
        context: &RequestContext,
    ) -> ProviderResult<LdapConfig> {
        let config = LdapConfig::from_resource_data(data);
        debug!(
            "Resolved LDAP configuration from local state for '{}' (request: '{}'): {:?}",
            data.id_str(),
            context.request_id,
            config
        );
        Ok(config)
    }
}
