//! Transport trait.

use crate::{HttpRequest, HttpResponse};
use async_trait::async_trait;
use satudata_error::SatuDataResult;

/// Performs one HTTP exchange with the portal backend.
///
/// Implementations return `Err` only when no response was obtained (network
/// failure, timeout). Non-2xx responses are returned as `Ok` so that callers
/// can read the server's message.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and wait for its response.
    async fn send(&self, request: HttpRequest) -> SatuDataResult<HttpResponse>;
}
