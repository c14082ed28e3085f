//! The effective LDAP identity configuration of a MinIO server.

use super::wire::ConfigKeyValue;
use crate::error::StateResult;
use crate::state::ResourceData;
use std::fmt;

/// Value of `server_insecure` when neither configuration nor server sets it.
pub const DEFAULT_SERVER_INSECURE: &str = "on";

/// Effective LDAP configuration, as reported by a config checker.
///
/// Field names are the schema attribute names and the admin API keys.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LdapConfig {
    pub server_addr: String,
    pub lookup_bind_dn: String,
    pub lookup_bind_password: String,
    pub user_dn_search_base_dn: String,
    pub user_dn_search_filter: String,
    pub group_search_base_dn: String,
    pub group_search_filter: String,
    pub server_insecure: String,
}

fn default_server_insecure() -> String {
    DEFAULT_SERVER_INSECURE.to_string()
}

impl LdapConfig {
    /// Attribute names in the order [`LdapConfig::fields`] yields them.
    pub const FIELD_NAMES: [&'static str; 8] = [
        "server_addr",
        "lookup_bind_dn",
        "lookup_bind_password",
        "user_dn_search_base_dn",
        "user_dn_search_filter",
        "group_search_base_dn",
        "group_search_filter",
        "server_insecure",
    ];

    /// Every field paired with the attribute name it maps to.
    ///
    /// The destructuring is exhaustive: a field added to the struct does not
    /// compile until it is mapped here.
    pub fn fields(&self) -> [(&'static str, &str); 8] {
        let Self {
            server_addr,
            lookup_bind_dn,
            lookup_bind_password,
            user_dn_search_base_dn,
            user_dn_search_filter,
            group_search_base_dn,
            group_search_filter,
            server_insecure,
        } = self;

        [
            ("server_addr", server_addr),
            ("lookup_bind_dn", lookup_bind_dn),
            ("lookup_bind_password", lookup_bind_password),
            ("user_dn_search_base_dn", user_dn_search_base_dn),
            ("user_dn_search_filter", user_dn_search_filter),
            ("group_search_base_dn", group_search_base_dn),
            ("group_search_filter", group_search_filter),
            ("server_insecure", server_insecure),
        ]
        .map(|(name, value)| (name, value.as_str()))
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "server_addr" => Some(&mut self.server_addr),
            "lookup_bind_dn" => Some(&mut self.lookup_bind_dn),
            "lookup_bind_password" => Some(&mut self.lookup_bind_password),
            "user_dn_search_base_dn" => Some(&mut self.user_dn_search_base_dn),
            "user_dn_search_filter" => Some(&mut self.user_dn_search_filter),
            "group_search_base_dn" => Some(&mut self.group_search_base_dn),
            "group_search_filter" => Some(&mut self.group_search_filter),
            "server_insecure" => Some(&mut self.server_insecure),
            _ => None,
        }
    }

    /// Build the configuration declared in local state.
    ///
    /// Missing attributes become empty strings, except `server_insecure`
    /// which falls back to [`DEFAULT_SERVER_INSECURE`].
    pub fn from_resource_data(data: &ResourceData) -> Self {
        let mut config = Self {
            server_insecure: default_server_insecure(),
            ..Self::default()
        };
        for name in Self::FIELD_NAMES {
            if let (Some(value), Some(slot)) = (data.get_str(name), config.field_mut(name)) {
                *slot = value.to_string();
            }
        }
        config
    }

    /// Mirror every field into local state.
    ///
    /// Stops at the first attribute the state rejects.
    pub fn write_to(&self, data: &mut ResourceData) -> StateResult<()> {
        for (name, value) in self.fields() {
            data.set(name, value)?;
        }
        Ok(())
    }

    /// Decode the admin API's key/value list.
    ///
    /// Unknown keys are ignored. A missing `server_insecure` falls back to
    /// [`DEFAULT_SERVER_INSECURE`].
    pub fn from_key_values<'a>(pairs: impl IntoIterator<Item = &'a ConfigKeyValue>) -> Self {
        let mut config = Self {
            server_insecure: default_server_insecure(),
            ..Self::default()
        };
        for pair in pairs {
            if let Some(slot) = config.field_mut(&pair.key) {
                *slot = pair.value.clone();
            }
        }
        config
    }

    /// Encode as the admin API's key/value list.
    pub fn to_key_values(&self) -> Vec<ConfigKeyValue> {
        self.fields()
            .into_iter()
            .map(|(key, value)| ConfigKeyValue::new(key, value))
            .collect()
    }
}

impl fmt::Debug for LdapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LdapConfig")
            .field("server_addr", &self.server_addr)
            .field("lookup_bind_dn", &self.lookup_bind_dn)
            .field("lookup_bind_password", &"***REDACTED***")
            .field("user_dn_search_base_dn", &self.user_dn_search_base_dn)
            .field("user_dn_search_filter", &self.user_dn_search_filter)
            .field("group_search_base_dn", &self.group_search_base_dn)
            .field("group_search_filter", &self.group_search_filter)
            .field("server_insecure", &self.server_insecure)
            .finish()
    }
}
