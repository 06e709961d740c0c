//! The mutation coordinator.

use crate::ResourceStore;
use crate::store::server_message;
use satudata_core::{Confirmation, MutationKind, MutationResult, Resource, Validate};
use satudata_interface::{HttpRequest, Method};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Issues mutations for one resource and refetches its list on success.
///
/// Every operation resolves to a [`MutationResult`]; nothing is raised past
/// the caller. Failed mutations leave the store untouched.
pub struct MutationCoordinator<T> {
    store: Arc<ResourceStore<T>>,
}

impl<T> Clone for MutationCoordinator<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<T> std::fmt::Debug for MutationCoordinator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MutationCoordinator")
            .field("store", &self.store)
            .finish()
    }
}

impl<T: Resource> MutationCoordinator<T> {
    /// Coordinate mutations against the given store.
    pub fn new(store: Arc<ResourceStore<T>>) -> Self {
        Self { store }
    }

    /// Create an item.
    pub async fn create<P>(&self, payload: &P) -> MutationResult
    where
        P: Serialize + Validate + ?Sized,
    {
        self.submit(MutationKind::Create, Method::Post, None, Some(payload))
            .await
    }

    /// Replace the fields of an item.
    pub async fn update<P>(&self, id: &T::Id, payload: &P) -> MutationResult
    where
        P: Serialize + Validate + ?Sized,
    {
        self.submit(MutationKind::Update, Method::Put, Some(id), Some(payload))
            .await
    }

    /// Change the activation status of an item.
    pub async fn set_status<P>(&self, id: &T::Id, payload: &P) -> MutationResult
    where
        P: Serialize + Validate + ?Sized,
    {
        self.submit(MutationKind::SetStatus, Method::Put, Some(id), Some(payload))
            .await
    }

    /// Delete an item once the caller has confirmed.
    ///
    /// A cancelled confirmation returns immediately without any request.
    pub async fn delete(&self, id: &T::Id, confirmation: Confirmation) -> MutationResult {
        if !confirmation.is_confirmed() {
            info!(resource = self.store.spec().name(), id = %id, "Delete cancelled by user");
            return MutationResult::cancelled();
        }
        self.submit::<Value>(MutationKind::Delete, Method::Delete, Some(id), None)
            .await
    }

    #[instrument(skip(self, id, payload), fields(resource = self.store.spec().name()))]
    async fn submit<P>(
        &self,
        kind: MutationKind,
        method: Method,
        id: Option<&T::Id>,
        payload: Option<&P>,
    ) -> MutationResult
    where
        P: Serialize + Validate + ?Sized,
    {
        let spec = self.store.spec();

        let body = match payload {
            Some(payload) => {
                if let Err(e) = payload.validate() {
                    warn!(field = %e.field, reason = %e.reason, "Payload rejected before sending");
                    return MutationResult::failed(e.user_message());
                }
                match serde_json::to_value(payload) {
                    Ok(body) => Some(body),
                    Err(e) => {
                        warn!(error = %e, "Payload could not be serialized");
                        return MutationResult::failed(kind.failure_fallback());
                    }
                }
            }
            None => None,
        };

        let path = match spec
            .endpoints()
            .path_for(spec.name(), kind, id.map(|id| id as &dyn Display))
        {
            Ok(path) => path,
            Err(e) => {
                warn!(error = %e, "No endpoint configured");
                return MutationResult::failed(e.user_message());
            }
        };

        let request = HttpRequest::builder()
            .method(method)
            .path(path)
            .headers(self.store.auth().auth_headers())
            .body(body)
            .build();
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Failed to build request");
                return MutationResult::failed(kind.failure_fallback());
            }
        };

        debug!(path = %request.path(), method = %request.method(), "Sending mutation");
        let response = match self.store.transport().send(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Mutation request failed");
                return MutationResult::failed(e.user_message());
            }
        };

        let status = *response.status();
        let body = response.json().unwrap_or(Value::Null);
        let message = server_message(&body);

        if !response.is_success() {
            warn!(status, "Mutation rejected by server");
            return MutationResult::failed(message.unwrap_or_else(|| {
                format!("{} (status {})", kind.failure_fallback(), status)
            }));
        }

        if body == Value::Bool(false) {
            warn!(status, "Server reported failure in response body");
            return MutationResult::failed(kind.failure_fallback());
        }

        info!(status, "Mutation accepted; refreshing list");
        self.store.load().await;
        MutationResult::ok(message.unwrap_or_else(|| kind.success_fallback().to_string()))
    }
}
