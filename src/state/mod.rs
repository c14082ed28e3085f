//! Local resource state.
//!
//! [`ResourceData`] plays the role of the host framework's per-resource state
//! object: it is bound to one [`ResourceSchema`], carries the identity the
//! provider assigned, and holds the attribute values that end up in the state
//! file. Writes are checked against the bound schema so a collaborator that
//! returns fields the schema does not declare is caught at write time.

pub mod resource_id;

pub use resource_id::{IdStrategy, LDAP_CONFIG_ID_PREFIX, ResourceId};

use crate::error::{StateError, StateResult, ValidationResult};
use crate::schema::{ResourceSchema, resolve_config, types::value_type_name};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Redaction marker used in place of sensitive values.
const REDACTED: &str = "***REDACTED***";

/// State of a single resource instance.
#[derive(Clone)]
pub struct ResourceData {
    schema: ResourceSchema,
    id: Option<ResourceId>,
    attributes: BTreeMap<String, Value>,
}

impl ResourceData {
    /// Create empty state bound to a schema.
    pub fn new(schema: ResourceSchema) -> Self {
        Self {
            schema,
            id: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Resolve a configuration block against the schema and build state from it.
    pub fn from_config(schema: &ResourceSchema, config: &Value) -> ValidationResult<Self> {
        let resolved = resolve_config(schema, config)?;
        Ok(Self {
            schema: schema.clone(),
            id: None,
            attributes: resolved.into_iter().collect(),
        })
    }

    /// Resource type name of the bound schema.
    pub fn resource_type(&self) -> &str {
        &self.schema.type_name
    }

    /// The schema this state is bound to.
    pub fn schema(&self) -> &ResourceSchema {
        &self.schema
    }

    /// The identity assigned on create, if any.
    pub fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref()
    }

    /// The identity as a string, empty when none has been assigned.
    pub fn id_str(&self) -> &str {
        self.id.as_ref().map(ResourceId::as_str).unwrap_or_default()
    }

    /// Assign the resource identity.
    pub fn set_id(&mut self, id: ResourceId) {
        self.id = Some(id);
    }

    /// Forget the resource identity.
    pub fn clear_id(&mut self) {
        self.id = None;
    }

    /// Get an attribute value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Get a string attribute value.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(Value::as_str)
    }

    /// Write an attribute value.
    ///
    /// Fails when `name` is not declared by the bound schema or when the value
    /// does not match the declared type. State is left untouched on failure.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> StateResult<()> {
        let value = value.into();
        let attr_def =
            self.schema
                .attribute(name)
                .ok_or_else(|| StateError::UnknownAttribute {
                    attribute: name.to_string(),
                    resource_type: self.schema.type_name.clone(),
                })?;

        if !value.is_null() && !attr_def.data_type.accepts(&value) {
            return Err(StateError::TypeMismatch {
                attribute: name.to_string(),
                expected: attr_def.data_type.as_str().to_string(),
                actual: value_type_name(&value).to_string(),
            });
        }

        self.attributes.insert(name.to_string(), value);
        Ok(())
    }

    /// All attribute values currently held.
    pub fn attributes(&self) -> &BTreeMap<String, Value> {
        &self.attributes
    }

    /// Serialize to the flat JSON object stored in the state file.
    pub fn to_state_json(&self) -> Value {
        let mut obj: Map<String, Value> = self
            .attributes
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        obj.insert("id".to_string(), Value::String(self.id_str().to_string()));
        Value::Object(obj)
    }

    fn is_sensitive(&self, name: &str) -> bool {
        self.schema.attribute(name).is_some_and(|attr| attr.sensitive)
    }
}

impl fmt::Debug for ResourceData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted = Value::String(REDACTED.to_string());
        let shown: BTreeMap<&str, &Value> = self
            .attributes
            .iter()
            .map(|(k, v)| {
                let v = if self.is_sensitive(k) { &redacted } else { v };
                (k.as_str(), v)
            })
            .collect();

        f.debug_struct("ResourceData")
            .field("resource_type", &self.schema.type_name)
            .field("id", &self.id)
            .field("attributes", &shown)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaRegistry;
    use serde_json::json;

    fn schema() -> ResourceSchema {
        SchemaRegistry::new()
            .unwrap()
            .get_ldap_integration_schema()
            .clone()
    }

    #[test]
    fn test_set_declared_attribute() {
        let mut data = ResourceData::new(schema());
        data.set("server_addr", "ldap:389").unwrap();
        assert_eq!(data.get_str("server_addr"), Some("ldap:389"));
    }

    #[test]
    fn test_set_undeclared_attribute_fails() {
        let mut data = ResourceData::new(schema());
        let err = data.set("ServerAddr", "ldap:389").unwrap_err();
        assert_eq!(
            err,
            StateError::UnknownAttribute {
                attribute: "ServerAddr".to_string(),
                resource_type: "minio_ldap_integration".to_string(),
            }
        );
        assert!(data.attributes().is_empty());
    }

    #[test]
    fn test_set_wrong_type_fails() {
        let mut data = ResourceData::new(schema());
        let err = data.set("server_insecure", json!(false)).unwrap_err();
        assert!(matches!(err, StateError::TypeMismatch { .. }));
        assert!(data.get("server_insecure").is_none());
    }

    #[test]
    fn test_id_round_trip() {
        let mut data = ResourceData::new(schema());
        assert_eq!(data.id_str(), "");
        data.set_id(ResourceId::new("minio_ldap_configabc").unwrap());
        assert_eq!(data.id_str(), "minio_ldap_configabc");
        data.clear_id();
        assert!(data.id().is_none());
    }

    #[test]
    fn test_debug_redacts_sensitive_values() {
        let mut data = ResourceData::new(schema());
        data.set("lookup_bind_password", "hunter2").unwrap();
        data.set("server_addr", "ldap:389").unwrap();

        let rendered = format!("{:?}", data);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains(REDACTED));
        assert!(rendered.contains("ldap:389"));
    }

    #[test]
    fn test_state_json_includes_id() {
        let mut data = ResourceData::new(schema());
        data.set("server_addr", "ldap:389").unwrap();
        data.set_id(ResourceId::new("x").unwrap());
        assert_eq!(
            data.to_state_json(),
            json!({"id": "x", "server_addr": "ldap:389"})
        );
    }
}
