//! Configuration resolution against resource schemas.
//!
//! This is the small slice of a plugin framework's job that the provider needs
//! to run on its own: reject malformed configuration blocks and fill in
//! declared defaults before a lifecycle hook sees the values.

use super::registry::SchemaRegistry;
use super::types::{AttributeDefinition, ResourceSchema, value_type_name};
use crate::error::{ValidationError, ValidationResult};
use serde_json::{Map, Value};

impl SchemaRegistry {
    /// Resolve a configuration block for the named resource type.
    pub fn resolve_config(
        &self,
        type_name: &str,
        config: &Value,
    ) -> ValidationResult<Map<String, Value>> {
        let schema =
            self.get_schema(type_name)
                .ok_or_else(|| ValidationError::UnknownResourceType {
                    resource_type: type_name.to_string(),
                })?;
        resolve_config(schema, config)
    }
}

/// Validate a configuration block against a schema and apply defaults.
///
/// Null values are treated as omitted. The returned map contains every
/// attribute that is either set or has a default.
pub fn resolve_config(
    schema: &ResourceSchema,
    config: &Value,
) -> ValidationResult<Map<String, Value>> {
    let obj = config
        .as_object()
        .ok_or_else(|| ValidationError::NotAnObject {
            actual: value_type_name(config).to_string(),
        })?;

    // Strict: every key must be declared
    for field_name in obj.keys() {
        if schema.attribute(field_name).is_none() {
            return Err(ValidationError::UnknownAttribute {
                attribute: field_name.clone(),
                resource_type: schema.type_name.clone(),
            });
        }
    }

    let mut resolved = Map::new();
    for attr_def in &schema.attributes {
        let value = obj.get(&attr_def.name).filter(|v| !v.is_null());
        if let Some(value) = resolve_attribute(attr_def, value)? {
            resolved.insert(attr_def.name.clone(), value);
        }
    }

    Ok(resolved)
}

fn resolve_attribute(
    attr_def: &AttributeDefinition,
    value: Option<&Value>,
) -> ValidationResult<Option<Value>> {
    let Some(value) = value else {
        if attr_def.required {
            return Err(ValidationError::missing_required(&attr_def.name));
        }
        return Ok(attr_def.default.clone());
    };

    if !attr_def.data_type.accepts(value) {
        return Err(ValidationError::invalid_type(
            &attr_def.name,
            attr_def.data_type.as_str(),
            value_type_name(value),
        ));
    }

    if attr_def.required && value.as_str().is_some_and(str::is_empty) {
        return Err(ValidationError::EmptyRequiredAttribute {
            attribute: attr_def.name.clone(),
        });
    }

    Ok(Some(value.clone()))
}
