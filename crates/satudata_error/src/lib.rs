//! Error types for the SatuData workspace.
//!
//! This crate provides the foundation error types used by every SatuData crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The three failure classes a resource controller distinguishes map onto
//! [`HttpError`] (transport failure), [`JsonError`] (decoding failure) and
//! [`ValidationError`] (client-side precondition failure).
//!
//! # Examples
//!
//! ```
//! use satudata_error::{HttpError, SatuDataResult};
//!
//! fn fetch_list() -> SatuDataResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_list() {
//!     Ok(body) => println!("Got: {}", body),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod http;
mod json;
mod resource;
mod validation;

pub use config::ConfigError;
pub use error::{SatuDataError, SatuDataErrorKind, SatuDataResult};
pub use http::HttpError;
pub use json::JsonError;
pub use resource::{ResourceError, ResourceErrorKind};
pub use validation::ValidationError;
