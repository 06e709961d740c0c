//! Client-side payload validation.

use satudata_error::ValidationError;

/// Preconditions a mutation payload must meet before it is sent.
///
/// The default implementation accepts everything.
pub trait Validate {
    /// Check the payload.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails its precondition.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Validate for serde_json::Value {}

/// Require a non-blank text field.
///
/// ```
/// use satudata_core::require_text;
///
/// assert!(require_text("nama_opd", "Dinas Kesehatan").is_ok());
/// assert!(require_text("nama_opd", "   ").is_err());
/// ```
#[track_caller]
pub fn require_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "is required"));
    }
    Ok(())
}

/// Require a plausible email address.
///
/// ```
/// use satudata_core::require_email;
///
/// assert!(require_email("email", "budi@example.go.id").is_ok());
/// assert!(require_email("email", "budi").is_err());
/// ```
#[track_caller]
pub fn require_email(field: &str, value: &str) -> Result<(), ValidationError> {
    require_text(field, value)?;
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(ValidationError::new(field, "must be a valid email address")),
    }
}

/// Require a year between 1900 and 2100.
///
/// ```
/// use satudata_core::require_year;
///
/// assert!(require_year("tahun", 2024).is_ok());
/// assert!(require_year("tahun", 24).is_err());
/// ```
#[track_caller]
pub fn require_year(field: &str, value: i32) -> Result<(), ValidationError> {
    if !(1900..=2100).contains(&value) {
        return Err(ValidationError::new(field, "must be between 1900 and 2100"));
    }
    Ok(())
}
