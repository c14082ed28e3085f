//! LDAP identity configuration and its admin API representation.
//!
//! - [`LdapConfig`] - the effective configuration, one field per schema attribute
//! - [`wire`] - key/value payloads of the `identity_ldap` config subsystem

pub mod config;
pub mod wire;

pub use config::{DEFAULT_SERVER_INSECURE, LdapConfig};
pub use wire::{ConfigKeyValue, Configuration, ConfigurationResponse, IDENTITY_LDAP_SUBSYSTEM};
