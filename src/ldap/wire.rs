//! Admin API payloads for the `identity_ldap` config subsystem.

use serde::{Deserialize, Serialize};

/// Name of the config subsystem holding the LDAP identity settings.
pub const IDENTITY_LDAP_SUBSYSTEM: &str = "identity_ldap";

/// A single `key=value` setting of a config subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigKeyValue {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

impl ConfigKeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One config subsystem as returned by `GET /api/v1/configs/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub key_values: Vec<ConfigKeyValue>,
}

/// Body of `GET /api/v1/configs/{name}`.
///
/// Servers answer with a list of subsystems; some versions answer with the
/// bare subsystem object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ConfigurationResponse {
    List(Vec<Configuration>),
    Single(Configuration),
}

impl ConfigurationResponse {
    /// Pick the subsystem named `name`.
    ///
    /// Targeted entries such as `identity_ldap:primary` also match. A bare
    /// object without a name is taken as the requested subsystem.
    pub fn into_subsystem(self, name: &str) -> Option<Configuration> {
        match self {
            Self::Single(config) if config.name.is_empty() => Some(config),
            Self::Single(config) => config.is_subsystem(name).then_some(config),
            Self::List(configs) => configs.into_iter().find(|c| c.is_subsystem(name)),
        }
    }
}

impl Configuration {
    /// Whether this entry belongs to subsystem `name`, with or without a target.
    pub fn is_subsystem(&self, name: &str) -> bool {
        match self.name.strip_prefix(name) {
            Some(rest) => rest.is_empty() || rest.starts_with(':'),
            None => false,
        }
    }
}
