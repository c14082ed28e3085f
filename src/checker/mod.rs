//! Config checkers: where the authoritative LDAP configuration comes from.
//!
//! The LDAP integration resource never talks to the server itself. On read it
//! asks a [`ConfigChecker`] for the effective configuration and mirrors the
//! answer into local state.
//!
//! - [`LocalConfigChecker`] - derives the configuration from the declared values
//! - [`AdminApiConfigChecker`] - fetches it from `/api/v1/configs/identity_ldap`

pub mod admin_api;
pub mod local;

pub use admin_api::{AdminApiConfigChecker, IDENTITY_LDAP_PATH};
pub use local::LocalConfigChecker;

use crate::context::RequestContext;
use crate::error::ProviderResult;
use crate::ldap::LdapConfig;
use crate::state::ResourceData;
use std::future::Future;

/// Source of the effective LDAP configuration for a resource.
pub trait ConfigChecker: Send + Sync {
    /// Return the configuration the server should be (or is) running with.
    fn check_config(
        &self,
        data: &ResourceData,
        context: &RequestContext,
    ) -> impl Future<Output = ProviderResult<LdapConfig>> + Send;
}
