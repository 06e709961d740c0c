//! The filter engine: a pure projection from raw collection to view.

use crate::ResourceSpec;
use satudata_core::FilterState;

/// Whether one item satisfies every active predicate.
///
/// - the search query matches when any search field contains it,
///   case-insensitively
/// - each selected categorical filter matches on exact equality
/// - selections naming no registered filter are ignored
pub fn matches<T>(item: &T, spec: &ResourceSpec<T>, state: &FilterState) -> bool {
    if let Some(query) = state.active_query() {
        let needle = query.to_lowercase();
        let hit = spec.search_fields().iter().any(|field| {
            field
                .value(item)
                .is_some_and(|v| v.to_lowercase().contains(&needle))
        });
        if !hit {
            return false;
        }
    }

    spec.filters().iter().all(|field| match state.selection(field.name()) {
        None => true,
        Some(selected) => field.value(item).is_some_and(|v| v == selected),
    })
}

/// Derive the view: the ordered subsequence of `raw` matching `state`.
///
/// Recomputed from scratch on every call; the result never depends on a
/// previous view.
///
/// # Examples
///
/// ```
/// use satudata_core::{FilterState, ResourceEndpoints};
/// use satudata_resource::{Field, ResourceSpec, project};
///
/// let spec = ResourceSpec::new("names", ResourceEndpoints::new("/names"))
///     .search(Field::text("name", |s: &String| Some(s.clone())));
///
/// let raw = vec!["Budi Santoso".to_string(), "Siti Aminah".to_string()];
/// let mut state = FilterState::default();
/// assert_eq!(project(&raw, &spec, &state), raw);
///
/// state.set_query("BuDi");
/// assert_eq!(project(&raw, &spec, &state), vec!["Budi Santoso".to_string()]);
/// ```
pub fn project<T: Clone>(raw: &[T], spec: &ResourceSpec<T>, state: &FilterState) -> Vec<T> {
    if state.is_empty() {
        return raw.to_vec();
    }
    raw.iter()
        .filter(|item| matches(*item, spec, state))
        .cloned()
        .collect()
}
