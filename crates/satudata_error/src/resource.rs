//! Resource registry errors.

/// Specific resource lookup conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ResourceErrorKind {
    /// No resource is configured under this name
    #[display("Unknown resource: {}", _0)]
    UnknownResource(String),

    /// The resource has no endpoint for the requested operation
    #[display("Resource '{}' has no '{}' endpoint", resource, operation)]
    MissingEndpoint {
        /// Resource name
        resource: String,
        /// Operation name (create, update, delete, status)
        operation: String,
    },

    /// A field name was not registered in the resource specification
    #[display("Resource '{}' has no field '{}'", resource, field)]
    UnknownField {
        /// Resource name
        resource: String,
        /// Field name
        field: String,
    },
}

/// Resource error with location tracking.
///
/// # Examples
///
/// ```
/// use satudata_error::{ResourceError, ResourceErrorKind};
///
/// let err = ResourceError::new(ResourceErrorKind::UnknownResource("parks".to_string()));
/// assert!(format!("{}", err).contains("Unknown resource: parks"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Resource Error: {} at line {} in {}", kind, line, file)]
pub struct ResourceError {
    kind: ResourceErrorKind,
    line: u32,
    file: &'static str,
}

impl ResourceError {
    /// Create a new resource error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ResourceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ResourceErrorKind {
        &self.kind
    }
}
