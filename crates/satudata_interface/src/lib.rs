//! Collaborator traits for the SatuData resource controller.
//!
//! The controller depends on exactly two external collaborators: a
//! [`Transport`] that performs one HTTP exchange, and an [`AuthProvider`] that
//! contributes headers to every request. Both are plain traits so controllers
//! can be driven by a scripted transport in tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod traits;
mod types;

pub use auth::{AuthProvider, Session};
pub use traits::Transport;
pub use types::{HttpRequest, HttpRequestBuilder, HttpResponse, Method};
