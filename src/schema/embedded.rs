//! Embedded resource schemas.
//!
//! Schemas are kept as JSON so they can be diffed against generated provider
//! documentation and loaded through the same serde path as external files.

/// Resource type name of the LDAP integration resource.
pub const LDAP_INTEGRATION_TYPE: &str = "minio_ldap_integration";

/// Returns the `minio_ldap_integration` resource schema as a JSON string.
pub fn ldap_integration_schema() -> &'static str {
    r#"{
  "type": "minio_ldap_integration",
  "description": "Integration of the MinIO server with an LDAP service for access management.",
  "version": 0,
  "attributes": [
    {
      "name": "server_addr",
      "type": "string",
      "description": "LDAP server address (host:port).",
      "required": true
    },
    {
      "name": "lookup_bind_dn",
      "type": "string",
      "description": "DN (Distinguished Name) for LDAP read-only service account used to perform DN and group lookups.",
      "required": true
    },
    {
      "name": "lookup_bind_password",
      "type": "string",
      "description": "Password for LDAP read-only service account used to perform DN and group lookups.",
      "required": true,
      "sensitive": true
    },
    {
      "name": "user_dn_search_base_dn",
      "type": "string",
      "description": "Base DN under which to perform user search.",
      "required": true
    },
    {
      "name": "user_dn_search_filter",
      "type": "string",
      "description": "LDAP user search filter.",
      "required": true
    },
    {
      "name": "group_search_base_dn",
      "type": "string",
      "description": "Base DN under which to perform group search.",
      "optional": true
    },
    {
      "name": "group_search_filter",
      "type": "string",
      "description": "LDAP group search filter.",
      "optional": true
    },
    {
      "name": "server_insecure",
      "type": "string",
      "description": "Allow plain-text connections to the LDAP server (\"on\" or \"off\").",
      "optional": true,
      "default": "on"
    }
  ]
}"#
}
