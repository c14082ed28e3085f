//! Common test utilities for lifecycle and checker tests.
//!
//! Not every test crate uses every helper.
#![allow(dead_code)]

use minio_ldap_provider::{
    ConfigChecker, LdapConfig, LdapIntegrationResource, MinioProvider, ProviderConfig,
    ProviderError, ProviderResult, RequestContext, ResourceData,
};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// The configuration block from the provider's acceptance scenario.
pub fn scenario_config() -> Value {
    json!({
        "server_addr": "10.10.3.64:30089",
        "lookup_bind_dn": "cn=admin,dc=example,dc=org",
        "lookup_bind_password": "secret",
        "user_dn_search_base_dn": "ou=users,dc=example,dc=org",
        "user_dn_search_filter": "(&(objectClass=inetOrgPerson)(uid=%s))"
    })
}

/// A fully populated configuration, as a server would report it.
pub fn server_ldap_config() -> LdapConfig {
    LdapConfig {
        server_addr: "10.10.3.64:30089".to_string(),
        lookup_bind_dn: "cn=admin,dc=example,dc=org".to_string(),
        lookup_bind_password: "Not@SecurePassw0rd".to_string(),
        user_dn_search_base_dn: "ou=users,dc=example,dc=org".to_string(),
        user_dn_search_filter: "(&(objectClass=inetOrgPerson)(uid=%s))".to_string(),
        group_search_base_dn: "ou=test-group,dc=example,dc=org".to_string(),
        group_search_filter: "(&(objectClass=groupOfNames)(member=%d))".to_string(),
        server_insecure: "on".to_string(),
    }
}

/// The same configuration as the admin API encodes it.
pub fn server_ldap_body() -> Value {
    json!([{
        "name": "identity_ldap",
        "key_values": [
            {"key": "server_insecure", "value": "on"},
            {"key": "server_addr", "value": "10.10.3.64:30089"},
            {"key": "lookup_bind_dn", "value": "cn=admin,dc=example,dc=org"},
            {"key": "lookup_bind_password", "value": "Not@SecurePassw0rd"},
            {"key": "user_dn_search_base_dn", "value": "ou=users,dc=example,dc=org"},
            {"key": "user_dn_search_filter", "value": "(&(objectClass=inetOrgPerson)(uid=%s))"},
            {"key": "group_search_base_dn", "value": "ou=test-group,dc=example,dc=org"},
            {"key": "group_search_filter", "value": "(&(objectClass=groupOfNames)(member=%d))"}
        ]
    }])
}

pub fn provider() -> MinioProvider {
    MinioProvider::new(ProviderConfig::default()).expect("default provider config is valid")
}

pub fn planned(provider: &MinioProvider, config: &Value) -> ResourceData {
    provider
        .plan_resource("minio_ldap_integration", config)
        .expect("config should resolve")
}

pub fn ctx() -> RequestContext {
    RequestContext::with_generated_id()
}

/// Config checker returning a canned answer and counting calls.
#[derive(Debug, Clone)]
pub struct RecordingChecker {
    answer: Result<LdapConfig, String>,
    calls: Arc<AtomicUsize>,
}

impl RecordingChecker {
    pub fn returning(config: LdapConfig) -> Self {
        Self {
            answer: Ok(config),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            answer: Err(message.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ConfigChecker for RecordingChecker {
    async fn check_config(
        &self,
        _data: &ResourceData,
        _context: &RequestContext,
    ) -> ProviderResult<LdapConfig> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer
            .clone()
            .map_err(|message| ProviderError::admin_api(500, message))
    }
}

pub fn recording_resource(
    provider: &MinioProvider,
    checker: RecordingChecker,
) -> LdapIntegrationResource<RecordingChecker> {
    provider.ldap_integration(checker)
}
