//! Terraform-style provider resource for MinIO's LDAP identity integration.
//!
//! Declares the `minio_ldap_integration` resource (eight string attributes
//! describing the LDAP server connection) and implements its lifecycle hooks
//! on top of a pluggable source of the effective configuration.
//!
//! # Core Components
//!
//! - [`MinioProvider`] - Resource catalogue and adapter construction
//! - [`ResourceLifecycle`] - Create/read/update/delete hooks of a resource type
//! - [`LdapIntegrationResource`] - The LDAP integration resource adapter
//! - [`ConfigChecker`] - Source of the effective LDAP configuration
//! - [`ResourceData`] - Schema-bound local state of one resource instance
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use minio_ldap_provider::{MinioProvider, ProviderConfig, RequestContext, ResourceLifecycle};
//! use minio_ldap_provider::schema::LDAP_INTEGRATION_TYPE;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MinioProvider::new(ProviderConfig::from_env()?)?;
//! let resource = provider.ldap_integration_admin_api()?;
//!
//! let mut data = provider.plan_resource(LDAP_INTEGRATION_TYPE, &json!({
//!     "server_addr": "ldap.example.org:389",
//!     "lookup_bind_dn": "cn=admin,dc=example,dc=org",
//!     "lookup_bind_password": "secret",
//!     "user_dn_search_base_dn": "ou=users,dc=example,dc=org",
//!     "user_dn_search_filter": "(uid=%s)"
//! }))?;
//!
//! resource.create(&mut data, &RequestContext::with_generated_id()).await?;
//! println!("created {}", data.id_str());
//! # Ok(())
//! # }
//! ```

pub mod checker;
pub mod config;
pub mod context;
pub mod error;
pub mod ldap;
pub mod provider;
pub mod resource;
pub mod schema;
pub mod state;

// Re-export commonly used types for convenience
pub use checker::{AdminApiConfigChecker, ConfigChecker, LocalConfigChecker};
pub use config::{ProviderConfig, ProviderConfigBuilder};
pub use context::RequestContext;
pub use error::{Diagnostic, ProviderError, ProviderResult, StateError, ValidationError};
pub use ldap::LdapConfig;
pub use provider::MinioProvider;
pub use resource::{LdapIntegrationResource, ResourceLifecycle};
pub use schema::{ResourceSchema, SchemaRegistry};
pub use state::{IdStrategy, ResourceData, ResourceId};
