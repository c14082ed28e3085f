//! The provider: resource catalogue and construction of resource adapters.

use crate::checker::{AdminApiConfigChecker, ConfigChecker, LocalConfigChecker};
use crate::config::ProviderConfig;
use crate::error::{ProviderError, ProviderResult};
use crate::resource::LdapIntegrationResource;
use crate::schema::{ResourceSchema, SchemaRegistry};
use crate::state::ResourceData;
use log::info;
use serde_json::Value;

/// Provider plugin for a MinIO server's identity management.
#[derive(Debug, Clone)]
pub struct MinioProvider {
    config: ProviderConfig,
    registry: SchemaRegistry,
}

impl MinioProvider {
    /// Create a provider with the embedded resource schemas.
    pub fn new(config: ProviderConfig) -> ProviderResult<Self> {
        let registry = SchemaRegistry::new()?;
        info!(
            "Configured MinIO provider for {} with {} resource type(s)",
            config.endpoint,
            registry.get_schemas().len()
        );
        Ok(Self { config, registry })
    }

    /// Create a provider configured from `MINIO_*` environment variables.
    pub fn from_env() -> ProviderResult<Self> {
        Self::new(ProviderConfig::from_env()?)
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Names of every resource type this provider manages, sorted.
    pub fn resource_types(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .registry
            .get_schemas()
            .into_iter()
            .map(|schema| schema.type_name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Schema of a resource type.
    pub fn resource_schema(&self, type_name: &str) -> ProviderResult<&ResourceSchema> {
        self.registry
            .get_schema(type_name)
            .ok_or_else(|| ProviderError::UnknownResourceType(type_name.to_string()))
    }

    /// Validate a configuration block and build the initial state for it.
    pub fn plan_resource(&self, type_name: &str, config: &Value) -> ProviderResult<ResourceData> {
        let schema = self.resource_schema(type_name)?;
        Ok(ResourceData::from_config(schema, config)?)
    }

    /// The LDAP integration resource, reading through the given checker.
    pub fn ldap_integration<C: ConfigChecker>(&self, checker: C) -> LdapIntegrationResource<C> {
        LdapIntegrationResource::new(
            self.registry.get_ldap_integration_schema().clone(),
            checker,
            &self.config,
        )
    }

    /// The LDAP integration resource, reading from local state.
    pub fn ldap_integration_local(&self) -> LdapIntegrationResource<LocalConfigChecker> {
        self.ldap_integration(LocalConfigChecker::new())
    }

    /// The LDAP integration resource, reading from the admin API.
    pub fn ldap_integration_admin_api(
        &self,
    ) -> ProviderResult<LdapIntegrationResource<AdminApiConfigChecker>> {
        Ok(self.ldap_integration(AdminApiConfigChecker::new(&self.config)?))
    }
}
