//! Schema definitions and configuration resolution for provider resources.
//!
//! # Key Types
//!
//! - [`ResourceSchema`] - Resource type declaration with its attributes
//! - [`SchemaRegistry`] - Registry for managing and accessing schemas
//! - [`AttributeDefinition`] - Individual attribute definition
//!
//! # Examples
//!
//! ```rust
//! use minio_ldap_provider::schema::SchemaRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::new()?;
//! let schema = registry.get_ldap_integration_schema();
//! assert_eq!(schema.attributes.len(), 8);
//! # Ok(())
//! # }
//! ```

pub mod embedded;
pub mod registry;
pub mod types;
pub mod validation;


pub use embedded::LDAP_INTEGRATION_TYPE;
pub use registry::SchemaRegistry;
pub use types::{AttributeDefinition, AttributeType, ResourceSchema};
pub use validation::resolve_config;
