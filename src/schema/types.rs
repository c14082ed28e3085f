//! Core schema type definitions for provider resources.
//!
//! This module contains the data structures that declare a resource's
//! attributes and their characteristics, in the shape a Terraform-style
//! plugin framework expects.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A resource schema definition.
///
/// Declares the resource type name exposed to the configuration language and
/// the attributes of its configuration block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSchema {
    /// Resource type name, e.g. `minio_ldap_integration`
    #[serde(rename = "type")]
    pub type_name: String,
    /// Human-readable resource description
    pub description: String,
    /// Schema version, bumped when the attribute set changes
    #[serde(default)]
    pub version: u32,
    /// List of attribute definitions
    pub attributes: Vec<AttributeDefinition>,
}

impl ResourceSchema {
    /// Look up an attribute definition by name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeDefinition> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// Names of all declared attributes, in declaration order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|attr| attr.name.as_str())
    }

    /// Definitions of the required attributes, in declaration order.
    pub fn required_attributes(&self) -> impl Iterator<Item = &AttributeDefinition> {
        self.attributes.iter().filter(|attr| attr.required)
    }

    /// Return a copy of this schema without the named attribute.
    pub fn without_attribute(&self, name: &str) -> Self {
        let mut schema = self.clone();
        schema.attributes.retain(|attr| attr.name != name);
        schema
    }
}

/// Definition of a single resource attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeDefinition {
    /// Attribute name
    pub name: String,
    /// Data type of the attribute
    #[serde(rename = "type")]
    pub data_type: AttributeType,
    /// Attribute description shown in generated documentation
    #[serde(default)]
    pub description: String,
    /// Whether the attribute must be set in configuration
    #[serde(default)]
    pub required: bool,
    /// Whether the attribute may be omitted from configuration
    #[serde(default)]
    pub optional: bool,
    /// Value used when an optional attribute is omitted
    #[serde(default)]
    pub default: Option<Value>,
    /// Whether the value is secret and must be hidden from plan output and logs
    #[serde(default)]
    pub sensitive: bool,
}

impl Default for AttributeDefinition {
    fn default() -> Self {
        Self {
            name: String::new(),
            data_type: AttributeType::default(),
            description: String::new(),
            required: false,
            optional: true,
            default: None,
            sensitive: false,
        }
    }
}

/// Attribute data types.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    /// String value
    #[default]
    String,
    /// Boolean value
    Bool,
    /// Integer number
    Int,
}

impl AttributeType {
    /// Whether a JSON value is acceptable for this type.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Bool => value.is_boolean(),
            Self::Int => value.is_i64() || value.is_u64(),
        }
    }

    /// Type name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::Int => "int",
        }
    }
}

/// Get the type name of a JSON value for error messages.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_i64() || n.is_u64() => "int",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
