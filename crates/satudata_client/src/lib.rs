//! HTTP transport and configuration for the SatuData portal backend.
//!
//! [`HttpTransport`] implements [`Transport`](satudata_interface::Transport)
//! on top of `reqwest`; [`PortalConfig`] carries the backend URL and the
//! endpoint table of every portal resource.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod settings;
mod transport;

pub use settings::PortalConfig;
pub use transport::HttpTransport;
