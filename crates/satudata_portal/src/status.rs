//! Status change payload.

use satudata_core::{Validate, require_text};
use satudata_error::ValidationError;
use serde::{Deserialize, Serialize};

/// Body of a set-status call.
///
/// Activation toggles send `active`/`inactive`; workflow resources such as
/// sectoral transactions send their own status words.
///
/// ```
/// use satudata_core::Validate;
/// use satudata_portal::StatusChange;
///
/// assert_eq!(StatusChange::activate().status(), "active");
/// assert!(StatusChange::new("  ").validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    status: String,
}

impl StatusChange {
    /// A change to an arbitrary status word.
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }

    /// Mark an account active.
    pub fn activate() -> Self {
        Self::new("active")
    }

    /// Mark an account inactive.
    pub fn deactivate() -> Self {
        Self::new("inactive")
    }

    /// Toggle helper for checkbox-style controls.
    pub fn active(active: bool) -> Self {
        if active {
            Self::activate()
        } else {
            Self::deactivate()
        }
    }

    /// Target status.
    pub fn status(&self) -> &str {
        &self.status
    }
}

impl Validate for StatusChange {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("status", &self.status)
    }
}
