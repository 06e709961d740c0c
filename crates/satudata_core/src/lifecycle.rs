//! Lifecycle of a resource list.

use serde::{Deserialize, Serialize};

/// Whether the raw collection of a controller can be trusted to render.
///
/// A failed load keeps whatever was loaded before, so `Failed` is never
/// confused with a successful load that returned no rows.
///
/// # Examples
///
/// ```
/// use satudata_core::LifecycleStatus;
///
/// let status = LifecycleStatus::Failed("connection refused".to_string());
/// assert!(status.is_failed());
/// assert_eq!(status.failure_reason(), Some("connection refused"));
/// assert!(!LifecycleStatus::default().is_ready());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum LifecycleStatus {
    /// Nothing requested yet.
    #[default]
    #[display("idle")]
    Idle,
    /// A load is in flight.
    #[display("loading")]
    Loading,
    /// The last load succeeded.
    #[display("ready")]
    Ready,
    /// The last load failed; the previous raw collection is still available.
    #[display("failed: {}", _0)]
    Failed(String),
}

impl LifecycleStatus {
    /// True while a load is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// True after a successful load.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// True after a failed load.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Reason of the last failure, if any.
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}
