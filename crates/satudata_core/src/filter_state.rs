//! User-editable filter state.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current predicate values of a controller.
///
/// Holds the free-text search query and one selected value per categorical
/// predicate. An empty or missing value means "no constraint".
///
/// # Examples
///
/// ```
/// use satudata_core::FilterState;
///
/// let mut state = FilterState::default();
/// assert!(state.is_empty());
///
/// state.set_query("budi");
/// state.select("status", "active");
/// assert_eq!(state.selection("status"), Some("active"));
///
/// state.select("status", "");
/// assert_eq!(state.selection("status"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct FilterState {
    /// Free-text search query.
    #[serde(default)]
    query: String,
    /// Selected value per predicate name.
    #[serde(default)]
    selections: BTreeMap<String, String>,
}

impl FilterState {
    /// Replace the search query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Select a value for a named predicate. An empty value clears it.
    pub fn select(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if value.is_empty() {
            self.selections.remove(&name);
        } else {
            self.selections.insert(name, value);
        }
    }

    /// Remove the selection for a named predicate.
    pub fn clear(&mut self, name: &str) {
        self.selections.remove(name);
    }

    /// Remove every constraint.
    pub fn reset(&mut self) {
        self.query.clear();
        self.selections.clear();
    }

    /// The active selection for a predicate, if any.
    pub fn selection(&self, name: &str) -> Option<&str> {
        self.selections
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// The search query as typed, or `None` when it is empty.
    ///
    /// Whitespace is significant: `"santoso "` only matches text containing
    /// that exact substring.
    pub fn active_query(&self) -> Option<&str> {
        (!self.query.is_empty()).then_some(self.query.as_str())
    }

    /// True when no predicate constrains the view.
    pub fn is_empty(&self) -> bool {
        self.active_query().is_none() && self.selections.values().all(|v| v.is_empty())
    }
}
