//! The resource store: raw collection, lifecycle and derived view.

use crate::{ResourceSpec, decode_items, project};
use derive_getters::Getters;
use satudata_core::{FilterState, LifecycleStatus, Resource};
use satudata_error::{HttpError, SatuDataResult};
use satudata_interface::{AuthProvider, HttpRequest, Transport};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument};

/// Observable state of one controller.
///
/// `raw` is replaced wholesale by successful loads only; `view` is recomputed
/// from `raw` and `filter` on every change to either.
#[derive(Debug, Getters)]
pub struct ControllerSnapshot<T> {
    /// Lifecycle of the raw collection.
    status: LifecycleStatus,
    /// Raw collection in server order.
    raw: Arc<Vec<T>>,
    /// Filtered view of `raw`.
    view: Arc<Vec<T>>,
    /// Active predicates.
    filter: FilterState,
    /// Number of successful loads applied so far.
    generation: u64,
}

impl<T> Clone for ControllerSnapshot<T> {
    fn clone(&self) -> Self {
        Self {
            status: self.status.clone(),
            raw: Arc::clone(&self.raw),
            view: Arc::clone(&self.view),
            filter: self.filter.clone(),
            generation: self.generation,
        }
    }
}

impl<T> Default for ControllerSnapshot<T> {
    fn default() -> Self {
        Self {
            status: LifecycleStatus::Idle,
            raw: Arc::new(Vec::new()),
            view: Arc::new(Vec::new()),
            filter: FilterState::default(),
            generation: 0,
        }
    }
}

impl<T: Clone> ControllerSnapshot<T> {
    fn reproject(&mut self, spec: &ResourceSpec<T>) {
        self.view = Arc::new(project(&self.raw, spec, &self.filter));
    }
}

/// Owns the raw collection of one resource and the only path that writes it.
///
/// Loads are not serialized: two concurrent [`load`](Self::load) calls race
/// and whichever response resolves last is kept.
pub struct ResourceStore<T> {
    spec: ResourceSpec<T>,
    transport: Arc<dyn Transport>,
    auth: Arc<dyn AuthProvider>,
    state: watch::Sender<ControllerSnapshot<T>>,
}

impl<T> std::fmt::Debug for ResourceStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ResourceStore")
            .field("resource", &self.spec.name())
            .field("status", &state.status)
            .field("raw", &state.raw.len())
            .field("generation", &state.generation)
            .finish_non_exhaustive()
    }
}

impl<T: Resource> ResourceStore<T> {
    /// Create an idle store.
    pub fn new(
        spec: ResourceSpec<T>,
        transport: Arc<dyn Transport>,
        auth: Arc<dyn AuthProvider>,
    ) -> Self {
        debug!(resource = spec.name(), list = %spec.endpoints().list(), "Creating resource store");
        let (state, _) = watch::channel(ControllerSnapshot::default());
        Self {
            spec,
            transport,
            auth,
            state,
        }
    }

    /// Resource description.
    pub fn spec(&self) -> &ResourceSpec<T> {
        &self.spec
    }

    /// Transport used for every request of this resource.
    pub(crate) fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Header contributor used for every request of this resource.
    pub(crate) fn auth(&self) -> &Arc<dyn AuthProvider> {
        &self.auth
    }

    /// Fetch the list, replacing the raw collection on success.
    ///
    /// On failure the status becomes [`LifecycleStatus::Failed`] and the
    /// previous raw collection and view are kept.
    #[instrument(skip(self), fields(resource = self.spec.name()))]
    pub async fn load(&self) -> LifecycleStatus {
        self.state.send_modify(|s| s.status = LifecycleStatus::Loading);
        debug!("Loading resource list");

        match self.fetch().await {
            Ok(items) => {
                let count = items.len();
                self.state.send_modify(|s| {
                    s.raw = Arc::new(items);
                    s.status = LifecycleStatus::Ready;
                    s.generation += 1;
                    s.reproject(&self.spec);
                });
                info!(count, "Resource list loaded");
                LifecycleStatus::Ready
            }
            Err(e) => {
                let reason = e.user_message();
                error!(error = %e, "Resource list failed to load; keeping previous data");
                let status = LifecycleStatus::Failed(reason);
                self.state.send_modify(|s| s.status = status.clone());
                status
            }
        }
    }

    async fn fetch(&self) -> SatuDataResult<Vec<T>> {
        let request =
            HttpRequest::get(self.spec.endpoints().list()).with_headers(self.auth.auth_headers());
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            let status = *response.status();
            let message = response
                .json()
                .ok()
                .and_then(|body| server_message(&body))
                .unwrap_or_else(|| format!("Server returned status {}", status));
            return Err(HttpError::with_status(status, message).into());
        }

        decode_items(response.json()?)
    }

    /// Apply a change to the filter state and recompute the view.
    pub fn update_filter<F>(&self, change: F)
    where
        F: FnOnce(&mut FilterState),
    {
        self.state.send_modify(|s| {
            change(&mut s.filter);
            s.reproject(&self.spec);
        });
        debug!(
            resource = self.spec.name(),
            view = self.state.borrow().view.len(),
            "Filter updated"
        );
    }

    /// Current lifecycle status.
    pub fn status(&self) -> LifecycleStatus {
        self.state.borrow().status.clone()
    }

    /// Raw collection of the last successful load.
    pub fn raw(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.state.borrow().raw)
    }

    /// Current filtered view.
    pub fn view(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.state.borrow().view)
    }

    /// Current filter state.
    pub fn filter(&self) -> FilterState {
        self.state.borrow().filter.clone()
    }

    /// A consistent copy of the whole state.
    pub fn snapshot(&self) -> ControllerSnapshot<T> {
        self.state.borrow().clone()
    }

    /// Observe every state transition.
    pub fn subscribe(&self) -> watch::Receiver<ControllerSnapshot<T>> {
        self.state.subscribe()
    }
}

/// The `message` field of a response body, if it has one.
pub(crate) fn server_message(body: &serde_json::Value) -> Option<String> {
    body.get("message")
        .and_then(|m| m.as_str())
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
