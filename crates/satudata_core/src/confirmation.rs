//! Confirmation gate for destructive operations.

/// Answer to "are you sure?" collected at the caller boundary.
///
/// A `Cancelled` delete performs no request and changes no state.
///
/// ```
/// use satudata_core::Confirmation;
///
/// assert!(Confirmation::from(true).is_confirmed());
/// assert!(!Confirmation::from(false).is_confirmed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Confirmation {
    /// The user confirmed the operation.
    Confirmed,
    /// The user backed out.
    Cancelled,
}

impl Confirmation {
    /// True when the operation may proceed.
    pub fn is_confirmed(self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::Cancelled
        }
    }
}
