//! Mutation outcomes.

use serde::{Deserialize, Serialize};

/// Operations the mutation coordinator knows how to issue.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    /// Create a new item.
    Create,
    /// Replace the fields of an existing item.
    Update,
    /// Remove an item.
    Delete,
    /// Change the activation status of an item.
    SetStatus,
}

impl MutationKind {
    /// Default message reported when the server succeeds without one.
    pub fn success_fallback(&self) -> &'static str {
        match self {
            Self::Create => "Data created successfully",
            Self::Update => "Data updated successfully",
            Self::Delete => "Data deleted successfully",
            Self::SetStatus => "Status updated successfully",
        }
    }

    /// Default message reported when the server fails without one.
    pub fn failure_fallback(&self) -> &'static str {
        match self {
            Self::Create => "Failed to create data",
            Self::Update => "Failed to update data",
            Self::Delete => "Failed to delete data",
            Self::SetStatus => "Failed to update status",
        }
    }
}

/// Outcome of a single mutation, returned to the caller and never stored.
///
/// # Examples
///
/// ```
/// use satudata_core::MutationResult;
///
/// let ok = MutationResult::ok("Saved");
/// assert!(ok.success);
///
/// let cancelled = MutationResult::cancelled();
/// assert!(!cancelled.success);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MutationResult {
    /// Whether the server accepted the mutation.
    pub success: bool,
    /// Server message, or a generic fallback.
    pub message: String,
}

impl MutationResult {
    /// A successful outcome.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// A failed outcome.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Outcome of a destructive operation the user declined to confirm.
    pub fn cancelled() -> Self {
        Self::failed("Operation cancelled")
    }
}
