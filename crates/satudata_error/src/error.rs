//! Top-level error wrapper types.

use crate::{ConfigError, HttpError, JsonError, ResourceError, ValidationError};

/// The foundation error enum shared by all SatuData crates.
///
/// # Examples
///
/// ```
/// use satudata_error::{HttpError, SatuDataError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: SatuDataError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SatuDataErrorKind {
    /// Transport failure
    #[from(HttpError)]
    Http(HttpError),
    /// Decoding failure
    #[from(JsonError)]
    Json(JsonError),
    /// Client-side validation failure
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Resource registry error
    #[from(ResourceError)]
    Resource(ResourceError),
}

/// SatuData error with kind discrimination.
///
/// # Examples
///
/// ```
/// use satudata_error::{ConfigError, SatuDataResult};
///
/// fn might_fail() -> SatuDataResult<()> {
///     Err(ConfigError::new("Missing base_url"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("SatuData Error: {}", _0)]
pub struct SatuDataError(Box<SatuDataErrorKind>);

impl SatuDataError {
    /// Create a new error from a kind.
    pub fn new(kind: SatuDataErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SatuDataErrorKind {
        &self.0
    }

    /// Whether this error is a transport failure.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind(), SatuDataErrorKind::Http(_))
    }

    /// Whether this error is a client-side validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), SatuDataErrorKind::Validation(_))
    }

    /// Short message without the location suffix, for display in a UI.
    ///
    /// ```
    /// use satudata_error::{HttpError, SatuDataError};
    ///
    /// let err: SatuDataError = HttpError::with_status(500, "Internal Server Error").into();
    /// assert_eq!(err.user_message(), "Internal Server Error");
    /// ```
    pub fn user_message(&self) -> String {
        match self.kind() {
            SatuDataErrorKind::Http(e) => e.message.clone(),
            SatuDataErrorKind::Json(e) => e.message.clone(),
            SatuDataErrorKind::Validation(e) => e.user_message(),
            SatuDataErrorKind::Config(e) => e.message.clone(),
            SatuDataErrorKind::Resource(e) => e.kind().to_string(),
        }
    }
}

// Generic From implementation for any type that converts to SatuDataErrorKind
impl<T> From<T> for SatuDataError
where
    T: Into<SatuDataErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for SatuData operations.
pub type SatuDataResult<T> = std::result::Result<T, SatuDataError>;
