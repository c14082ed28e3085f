//! Error types for provider operations.
//!
//! This module provides the error hierarchy shared by the schema layer, the
//! resource state, the configuration checkers and the lifecycle hooks, plus the
//! [`Diagnostic`] shape that a host framework renders to the user.

/// Main error type for provider operations.
///
/// Lifecycle hooks return this error; [`ProviderError::to_diagnostic`] turns it
/// into a framework-facing diagnostic.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// A value returned by a config checker could not be written back into
    /// the resource state.
    #[error("error reading LDAP config {id}: {source}")]
    StateSync {
        /// Identity of the resource whose state could not be synchronised
        id: String,
        /// Underlying state error
        #[source]
        source: StateError,
    },

    /// Configuration does not conform to the resource schema
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The admin API answered with an error status or an unusable body
    #[error("Admin API error (status {status}): {message}")]
    AdminApi { status: u16, message: String },

    /// Transport-level failure talking to the admin API
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid provider configuration
    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    /// The resource type does not support `terraform import`
    #[error("Resource type '{resource_type}' does not support import")]
    ImportNotSupported { resource_type: String },

    /// The provider does not know the requested resource type
    #[error("Unknown resource type: {0}")]
    UnknownResourceType(String),
}

/// Validation errors raised while resolving a configuration block against
/// its schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Configuration block is not a JSON object
    #[error("Configuration must be an object, got {actual}")]
    NotAnObject { actual: String },

    /// Required attribute is missing
    #[error("Required attribute '{attribute}' is missing")]
    MissingRequiredAttribute { attribute: String },

    /// Required attribute is present but empty
    #[error("Required attribute '{attribute}' cannot be empty")]
    EmptyRequiredAttribute { attribute: String },

    /// Attribute value doesn't match expected type
    #[error("Attribute '{attribute}' has invalid type, expected {expected}, got {actual}")]
    InvalidAttributeType {
        attribute: String,
        expected: String,
        actual: String,
    },

    /// Attribute is not declared by the resource schema
    #[error("Unknown attribute '{attribute}' for resource type '{resource_type}'")]
    UnknownAttribute {
        attribute: String,
        resource_type: String,
    },

    /// No schema is registered for the resource type
    #[error("No schema registered for resource type '{resource_type}'")]
    UnknownResourceType { resource_type: String },
}

/// Errors raised when writing attributes into a [`ResourceData`](crate::state::ResourceData).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// The attribute is not part of the schema the state is bound to
    #[error("attribute '{attribute}' is not declared by schema '{resource_type}'")]
    UnknownAttribute {
        attribute: String,
        resource_type: String,
    },

    /// The value type does not match the attribute declaration
    #[error("attribute '{attribute}' expects {expected}, got {actual}")]
    TypeMismatch {
        attribute: String,
        expected: String,
        actual: String,
    },
}

/// Severity of a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

/// A user-facing diagnostic, as rendered by the host framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic with no detail.
    pub fn error(summary: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: None,
        }
    }

    /// Attach a detail line.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

// Convenience methods for creating common errors
impl ProviderError {
    /// Create a state synchronisation error for the given resource id
    pub fn state_sync(id: impl Into<String>, source: StateError) -> Self {
        Self::StateSync {
            id: id.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an admin API error
    pub fn admin_api(status: u16, message: impl Into<String>) -> Self {
        Self::AdminApi {
            status,
            message: message.into(),
        }
    }

    /// Render this error as a host-framework diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.to_string());
        match self {
            Self::StateSync { source, .. } => diagnostic.with_detail(source.to_string()),
            Self::Validation(e) => diagnostic.with_detail(e.to_string()),
            _ => diagnostic,
        }
    }
}

impl ValidationError {
    /// Create a missing required attribute error
    pub fn missing_required(attribute: impl Into<String>) -> Self {
        Self::MissingRequiredAttribute {
            attribute: attribute.into(),
        }
    }

    /// Create an invalid type error
    pub fn invalid_type(
        attribute: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidAttributeType {
            attribute: attribute.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

// Result type aliases for convenience
pub type ProviderResult<T> = Result<T, ProviderError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type StateResult<T> = Result<T, StateError>;
