//! Schema registry for loading, managing, and accessing resource schemas.
//!
//! The registry owns every resource schema the provider exposes and is the
//! entry point for resolving configuration blocks against them.

use super::{embedded, types::ResourceSchema};
use crate::error::ProviderResult;

use std::collections::HashMap;

/// Registry of resource schemas keyed by resource type name.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    ldap_integration_schema: ResourceSchema,
    schemas: HashMap<String, ResourceSchema>,
}

impl SchemaRegistry {
    /// Create a new schema registry with the embedded resource schemas.
    pub fn new() -> ProviderResult<Self> {
        Self::with_embedded_schemas()
    }

    /// Create a new schema registry with the embedded resource schemas.
    pub fn with_embedded_schemas() -> ProviderResult<Self> {
        let ldap_integration_schema =
            Self::load_schema_from_str(embedded::ldap_integration_schema())?;

        let mut schemas = HashMap::new();
        schemas.insert(
            ldap_integration_schema.type_name.clone(),
            ldap_integration_schema.clone(),
        );

        Ok(Self {
            ldap_integration_schema,
            schemas,
        })
    }

    /// Load a schema from a JSON string.
    pub fn load_schema_from_str(content: &str) -> ProviderResult<ResourceSchema> {
        let mut schema: ResourceSchema = serde_json::from_str(content)?;

        // Required attributes are never optional, whatever the document says
        for attr in &mut schema.attributes {
            if attr.required {
                attr.optional = false;
            }
        }

        Ok(schema)
    }

    /// Get all available schemas.
    pub fn get_schemas(&self) -> Vec<&ResourceSchema> {
        self.schemas.values().collect()
    }

    /// Get a specific schema by resource type name.
    pub fn get_schema(&self, type_name: &str) -> Option<&ResourceSchema> {
        self.schemas.get(type_name)
    }

    /// Get the `minio_ldap_integration` schema.
    pub fn get_ldap_integration_schema(&self) -> &ResourceSchema {
        &self.ldap_integration_schema
    }

    /// Add a schema to the registry, replacing any schema with the same type name.
    pub fn add_schema(&mut self, schema: ResourceSchema) {
        self.schemas.insert(schema.type_name.clone(), schema);
    }
}
