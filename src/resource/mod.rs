//! Resource lifecycle hooks.
//!
//! Every resource the provider exposes implements [`ResourceLifecycle`]: a
//! declared schema plus create/read/update/delete hooks that the host framework
//! drives. Hooks receive the framework-owned [`ResourceData`] by mutable
//! reference and run to completion; there is no shared state between calls.

pub mod ldap_integration;

pub use ldap_integration::LdapIntegrationResource;

use crate::context::RequestContext;
use crate::error::{ProviderError, ProviderResult};
use crate::schema::ResourceSchema;
use crate::state::ResourceData;
use std::future::Future;

/// Lifecycle hooks of a provider-managed resource type.
pub trait ResourceLifecycle: Send + Sync {
    /// Resource type name exposed to the configuration language.
    fn type_name(&self) -> &str {
        &self.schema().type_name
    }

    /// Declared schema of the resource's configuration block.
    fn schema(&self) -> &ResourceSchema;

    /// Whether `import` is wired for this resource type.
    fn supports_import(&self) -> bool {
        false
    }

    /// Create the resource and assign its identity.
    fn create(
        &self,
        data: &mut ResourceData,
        context: &RequestContext,
    ) -> impl Future<Output = ProviderResult<()>> + Send;

    /// Refresh local state from the authoritative configuration.
    fn read(
        &self,
        data: &mut ResourceData,
        context: &RequestContext,
    ) -> impl Future<Output = ProviderResult<()>> + Send;

    /// Apply a configuration change.
    fn update(
        &self,
        data: &mut ResourceData,
        context: &RequestContext,
    ) -> impl Future<Output = ProviderResult<()>> + Send;

    /// Tear the resource down.
    fn delete(
        &self,
        data: &mut ResourceData,
        context: &RequestContext,
    ) -> impl Future<Output = ProviderResult<()>> + Send;

    /// Adopt an existing remote object under the given identity.
    fn import(
        &self,
        _id: &str,
        _context: &RequestContext,
    ) -> impl Future<Output = ProviderResult<ResourceData>> + Send {
        let resource_type = self.type_name().to_string();
        async move { Err(ProviderError::ImportNotSupported { resource_type }) }
    }
}
