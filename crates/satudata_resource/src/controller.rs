//! One resource controller per dashboard list.

use crate::{ControllerSnapshot, MutationCoordinator, ResourceSpec, ResourceStore, aggregate};
use chrono::{Datelike, Local};
use satudata_core::{Confirmation, FilterState, LifecycleStatus, MutationResult, Resource, Validate};
use satudata_error::SatuDataResult;
use satudata_interface::{AuthProvider, Transport};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::watch;

/// Store, filter engine, mutation coordinator and aggregates of one resource.
///
/// Cloning is cheap; clones share the same state.
pub struct ResourceController<T> {
    store: Arc<ResourceStore<T>>,
    mutations: MutationCoordinator<T>,
}

impl<T> Clone for ResourceController<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            mutations: self.mutations.clone(),
        }
    }
}

impl<T> std::fmt::Debug for ResourceController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceController")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl<T: Resource> ResourceController<T> {
    /// Create an idle controller. Nothing is fetched until [`load`](Self::load).
    pub fn new(
        spec: ResourceSpec<T>,
        transport: Arc<dyn Transport>,
        auth: Arc<dyn AuthProvider>,
    ) -> Self {
        let store = Arc::new(ResourceStore::new(spec, transport, auth));
        let mutations = MutationCoordinator::new(Arc::clone(&store));
        Self { store, mutations }
    }

    /// Resource description.
    pub fn spec(&self) -> &ResourceSpec<T> {
        self.store.spec()
    }

    // Store

    /// Fetch the list. See [`ResourceStore::load`].
    pub async fn load(&self) -> LifecycleStatus {
        self.store.load().await
    }

    /// Current lifecycle status.
    pub fn status(&self) -> LifecycleStatus {
        self.store.status()
    }

    /// Raw collection of the last successful load.
    pub fn raw(&self) -> Arc<Vec<T>> {
        self.store.raw()
    }

    /// Current filtered view.
    pub fn view(&self) -> Arc<Vec<T>> {
        self.store.view()
    }

    /// Current filter state.
    pub fn filter(&self) -> FilterState {
        self.store.filter()
    }

    /// A consistent copy of status, raw, view and filter.
    pub fn snapshot(&self) -> ControllerSnapshot<T> {
        self.store.snapshot()
    }

    /// Observe every state transition.
    pub fn subscribe(&self) -> watch::Receiver<ControllerSnapshot<T>> {
        self.store.subscribe()
    }

    /// True when the last load succeeded and returned no items.
    pub fn is_empty_result(&self) -> bool {
        let snapshot = self.store.snapshot();
        snapshot.status().is_ready() && snapshot.raw().is_empty()
    }

    /// Find an item of the raw collection by id.
    pub fn find(&self, id: &T::Id) -> Option<T> {
        self.store.raw().iter().find(|item| &item.id() == id).cloned()
    }

    // Filters

    /// Replace the search query.
    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.store.update_filter(|f| f.set_query(query));
    }

    /// Select a value for a named filter; an empty value clears it.
    pub fn select(&self, name: impl Into<String>, value: impl Into<String>) {
        let (name, value) = (name.into(), value.into());
        self.store.update_filter(|f| f.select(name, value));
    }

    /// Clear one named filter.
    pub fn clear_selection(&self, name: &str) {
        self.store.update_filter(|f| f.clear(name));
    }

    /// Clear the query and every selection.
    pub fn reset_filters(&self) {
        self.store.update_filter(FilterState::reset);
    }

    /// Replace the whole filter state at once.
    pub fn set_filter(&self, state: FilterState) {
        self.store.update_filter(|f| *f = state);
    }

    // Mutations

    /// Create an item and refetch on success.
    pub async fn create<P>(&self, payload: &P) -> MutationResult
    where
        P: Serialize + Validate + ?Sized,
    {
        self.mutations.create(payload).await
    }

    /// Update an item and refetch on success.
    pub async fn update<P>(&self, id: &T::Id, payload: &P) -> MutationResult
    where
        P: Serialize + Validate + ?Sized,
    {
        self.mutations.update(id, payload).await
    }

    /// Change an item's status and refetch on success.
    pub async fn set_status<P>(&self, id: &T::Id, payload: &P) -> MutationResult
    where
        P: Serialize + Validate + ?Sized,
    {
        self.mutations.set_status(id, payload).await
    }

    /// Delete an item after confirmation and refetch on success.
    pub async fn delete(&self, id: &T::Id, confirmation: Confirmation) -> MutationResult {
        self.mutations.delete(id, confirmation).await
    }

    // Aggregates (always over the raw collection)

    /// Distinct values of a named field, ascending.
    pub fn distinct(&self, field: &str) -> SatuDataResult<Vec<String>> {
        let field = self.spec().field(field)?;
        Ok(aggregate::distinct(&self.raw(), field))
    }

    /// Distinct years of a named field, newest first.
    pub fn distinct_years(&self, field: &str) -> SatuDataResult<Vec<i32>> {
        let field = self.spec().field(field)?;
        Ok(aggregate::distinct_years(&self.raw(), field))
    }

    /// Item count per value of a named field.
    pub fn count_by(&self, field: &str) -> SatuDataResult<BTreeMap<String, usize>> {
        let field = self.spec().field(field)?;
        Ok(aggregate::count_by(&self.raw(), field))
    }

    /// Number of items whose named field equals `value`.
    pub fn count_value(&self, field: &str, value: &str) -> SatuDataResult<usize> {
        let field = self.spec().field(field)?;
        Ok(aggregate::count_value(&self.raw(), field, value))
    }

    /// Number of items satisfying a predicate.
    pub fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        aggregate::count_where(&self.raw(), predicate)
    }

    /// Number of items created in `year`; zero when no timestamp is configured.
    pub fn count_in_year(&self, year: i32) -> usize {
        self.spec()
            .timestamp_field()
            .map(|ts| aggregate::count_in_year(&self.raw(), ts, year))
            .unwrap_or(0)
    }

    /// Number of items created in the current calendar year.
    pub fn count_current_year(&self) -> usize {
        self.count_in_year(Local::now().year())
    }

    /// Items created per month of `year`; index 0 is January.
    pub fn monthly_counts(&self, year: i32) -> [usize; 12] {
        self.spec()
            .timestamp_field()
            .map(|ts| aggregate::monthly_counts(&self.raw(), ts, year))
            .unwrap_or([0; 12])
    }
}
