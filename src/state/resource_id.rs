//! Resource identity for provider-managed resources.
//!
//! Identities are opaque to the host framework. The default strategy mirrors
//! what earlier releases of the provider produced: a fixed prefix followed by
//! a random UUID. A deterministic strategy is available for users who need
//! re-creation to yield the same identity.

use super::ResourceData;
use crate::error::{ProviderError, ProviderResult};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Prefix shared by every LDAP integration identity.
pub const LDAP_CONFIG_ID_PREFIX: &str = "minio_ldap_config";

/// An identity assigned to a resource instance by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    /// Wrap an existing identity, e.g. one read back from saved state.
    ///
    /// Returns `None` for an empty string; the host framework uses the empty
    /// id to mean "resource is gone".
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Get the string representation of the id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the id and return the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// How a new resource identity is generated on create.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// Prefix plus a random UUID v4. Re-creating the resource yields a new id.
    #[default]
    Random,
    /// Prefix plus a SHA-256 over the required, non-sensitive attributes.
    /// Re-creating the resource with the same settings yields the same id.
    Derived,
}

impl IdStrategy {
    /// Generate an identity for the given resource state.
    pub fn generate(&self, data: &ResourceData) -> ResourceId {
        match self {
            Self::Random => ResourceId(format!("{}{}", LDAP_CONFIG_ID_PREFIX, Uuid::new_v4())),
            Self::Derived => {
                let mut hasher = Sha256::new();
                for attr in data
                    .schema()
                    .required_attributes()
                    .filter(|attr| !attr.sensitive)
                {
                    hasher.update(attr.name.as_bytes());
                    hasher.update(b"=");
                    hasher.update(data.get_str(&attr.name).unwrap_or_default().as_bytes());
                    hasher.update(b"\n");
                }
                ResourceId(format!("{}{:x}", LDAP_CONFIG_ID_PREFIX, hasher.finalize()))
            }
        }
    }
}

impl FromStr for IdStrategy {
    type Err = ProviderError;

    fn from_str(s: &str) -> ProviderResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "derived" => Ok(Self::Derived),
            other => Err(ProviderError::configuration(format!(
                "unknown id strategy '{}', expected 'random' or 'derived'",
                other
            ))),
        }
    }
}
