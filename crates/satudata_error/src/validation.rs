//! Client-side validation errors.

/// A payload failed a precondition before any request was sent.
///
/// # Examples
///
/// ```
/// use satudata_error::ValidationError;
///
/// let err = ValidationError::new("email", "must contain '@'");
/// assert_eq!(err.field, "email");
/// assert!(format!("{}", err).contains("must contain"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {}: {} at line {} in {}", field, reason, line, file)]
pub struct ValidationError {
    /// Field that failed validation
    pub field: String,
    /// Reason for failure
    pub reason: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error at the current location.
    #[track_caller]
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            field: field.into(),
            reason: reason.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Human-readable message without location details, suitable for
    /// surfacing next to a form field.
    pub fn user_message(&self) -> String {
        format!("{} {}", self.field, self.reason)
    }
}
