//! The `minio_ldap_integration` resource.
//!
//! Declares the LDAP connection settings of a MinIO server and mirrors the
//! effective configuration reported by a [`ConfigChecker`] into local state.
//!
//! Create assigns an identity and reads; it does not push the declared
//! settings to the server. Update and delete are accepted without contacting
//! the server. Both behaviours match what existing state files were produced
//! with.

use super::ResourceLifecycle;
use crate::checker::ConfigChecker;
use crate::config::ProviderConfig;
use crate::context::RequestContext;
use crate::error::{ProviderError, ProviderResult};
use crate::schema::ResourceSchema;
use crate::state::{IdStrategy, ResourceData};
use log::{debug, info, trace, warn};

/// Resource adapter for the server's LDAP identity configuration.
#[derive(Debug, Clone)]
pub struct LdapIntegrationResource<C: ConfigChecker> {
    schema: ResourceSchema,
    checker: C,
    id_strategy: IdStrategy,
    endpoint: String,
}

impl<C: ConfigChecker> LdapIntegrationResource<C> {
    /// Create the resource adapter.
    pub fn new(schema: ResourceSchema, checker: C, config: &ProviderConfig) -> Self {
        Self {
            schema,
            checker,
            id_strategy: config.id_strategy,
            endpoint: config.endpoint.clone(),
        }
    }

    /// The config checker consulted on read.
    pub fn checker(&self) -> &C {
        &self.checker
    }

    /// The identity strategy used on create.
    pub fn id_strategy(&self) -> IdStrategy {
        self.id_strategy
    }
}

impl<C: ConfigChecker> ResourceLifecycle for LdapIntegrationResource<C> {
    fn schema(&self) -> &ResourceSchema {
        &self.schema
    }

    async fn create(&self, data: &mut ResourceData, context: &RequestContext) -> ProviderResult<()> {
        let id = self.id_strategy.generate(data);
        info!(
            "Creating {} '{}' (request: '{}')",
            self.type_name(),
            id,
            context.request_id
        );
        data.set_id(id);

        self.read(data, context).await
    }

    async fn read(&self, data: &mut ResourceData, context: &RequestContext) -> ProviderResult<()> {
        trace!(
            "Reading {} '{}' (request: '{}')",
            self.type_name(),
            data.id_str(),
            context.request_id
        );

        let config = self.checker.check_config(data, context).await?;
        debug!("LDAP configuration for '{}': {:?}", data.id_str(), config);

        if let Err(source) = config.write_to(data) {
            warn!(
                "Failed to sync LDAP configuration into state of '{}': {}",
                data.id_str(),
                source
            );
            return Err(ProviderError::state_sync(data.id_str(), source));
        }

        Ok(())
    }

    async fn update(&self, data: &mut ResourceData, context: &RequestContext) -> ProviderResult<()> {
        debug!(
            "Update of {} '{}' requested (request: '{}', endpoint: '{}', state: {:?})",
            self.type_name(),
            data.id_str(),
            context.request_id,
            self.endpoint,
            data
        );
        warn!(
            "Changes to {} '{}' are recorded locally but not applied to {}",
            self.type_name(),
            data.id_str(),
            self.endpoint
        );
        Ok(())
    }

    async fn delete(&self, data: &mut ResourceData, context: &RequestContext) -> ProviderResult<()> {
        debug!(
            "Delete of {} '{}' requested (request: '{}'); server configuration left in place",
            self.type_name(),
            data.id_str(),
            context.request_id
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::LocalConfigChecker;
    use crate::error::StateError;
    use crate::schema::SchemaRegistry;
    use crate::state::LDAP_CONFIG_ID_PREFIX;
    use serde_json::json;

    fn resource() -> LdapIntegrationResource<LocalConfigChecker> {
        let registry = SchemaRegistry::new().unwrap();
        LdapIntegrationResource::new(
            registry.get_ldap_integration_schema().clone(),
            LocalConfigChecker::new(),
            &ProviderConfig::default(),
        )
    }

    fn scenario_data(resource: &LdapIntegrationResource<LocalConfigChecker>) -> ResourceData {
        ResourceData::from_config(
            resource.schema(),
            &json!({
                "server_addr": "10.10.3.64:30089",
                "lookup_bind_dn": "cn=admin,dc=example,dc=org",
                "lookup_bind_password": "secret",
                "user_dn_search_base_dn": "ou=users,dc=example,dc=org",
                "user_dn_search_filter": "(&(objectClass=inetOrgPerson)(uid=%s))"
            }),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_prefixed_id_and_reads() {
        let resource = resource();
        let mut data = scenario_data(&resource);
        let ctx = RequestContext::with_generated_id();

        resource.create(&mut data, &ctx).await.unwrap();

        let id = data.id().expect("create must assign an id");
        assert!(id.as_str().starts_with(LDAP_CONFIG_ID_PREFIX));
        assert!(id.as_str().len() > LDAP_CONFIG_ID_PREFIX.len());
        assert_eq!(data.attributes().len(), 8);
        assert_eq!(data.get_str("server_insecure"), Some("on"));
        assert_eq!(data.get_str("group_search_base_dn"), Some(""));
    }

    #[tokio::test]
    async fn test_read_with_mismatched_schema_fails() {
        let resource = resource();
        let narrowed = resource.schema().without_attribute("group_search_filter");
        let mut data = ResourceData::new(narrowed);
        data.set_id(crate::state::ResourceId::new("minio_ldap_configX").unwrap());

        let err = resource
            .read(&mut data, &RequestContext::default())
            .await
            .unwrap_err();

        match err {
            ProviderError::StateSync { id, source } => {
                assert_eq!(id, "minio_ldap_configX");
                assert!(matches!(source, StateError::UnknownAttribute { ref attribute, .. } if attribute == "group_search_filter"));
            }
            other => panic!("Expected StateSync error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_and_delete_leave_state_alone() {
        let resource = resource();
        let mut data = scenario_data(&resource);
        let ctx = RequestContext::default();
        resource.create(&mut data, &ctx).await.unwrap();
        let before = data.to_state_json();

        resource.update(&mut data, &ctx).await.unwrap();
        assert_eq!(data.to_state_json(), before);

        resource.delete(&mut data, &ctx).await.unwrap();
        assert_eq!(data.to_state_json(), before);
    }

    #[tokio::test]
    async fn test_import_is_disabled() {
        let resource = resource();
        assert!(!resource.supports_import());
        let err = resource
            .import("minio_ldap_configX", &RequestContext::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::ImportNotSupported { ref resource_type } if resource_type == "minio_ldap_integration"));
    }
}
