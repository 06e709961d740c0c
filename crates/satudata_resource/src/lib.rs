//! Generic resource controller for SatuData portal datasets.
//!
//! Every dashboard list in the portal follows the same shape: fetch a list from
//! a backend whose envelope is not fixed, keep the raw copy, derive a filtered
//! view, mutate through the backend, and refetch. This crate implements that
//! shape once.
//!
//! # Components
//!
//! - [`Envelope`] normalizes `{data}`, `{hasil}`, `{result}` and bare-array bodies
//! - [`ResourceStore`] owns the raw collection and its [`LifecycleStatus`]
//! - [`project`] derives the view from the raw collection and a [`FilterState`]
//! - [`MutationCoordinator`] issues create/update/delete/status calls and
//!   refetches on success
//! - [`aggregate`] computes dropdown values and counters from the raw collection
//!
//! [`ResourceController`] bundles them for one resource described by a
//! [`ResourceSpec`].
//!
//! # Example
//!
//! ```rust,no_run
//! use satudata_core::{Resource, ResourceEndpoints};
//! use satudata_interface::{Session, Transport};
//! use satudata_resource::{Field, ResourceController, ResourceSpec};
//! use serde::Deserialize;
//! use std::sync::Arc;
//!
//! #[derive(Debug, Clone, Deserialize)]
//! struct Opd {
//!     id: i64,
//!     nama_opd: String,
//! }
//!
//! impl Resource for Opd {
//!     type Id = i64;
//!     fn id(&self) -> i64 {
//!         self.id
//!     }
//! }
//!
//! # async fn example(transport: Arc<dyn Transport>) {
//! let spec = ResourceSpec::new("opd", ResourceEndpoints::new("/opd"))
//!     .search(Field::text("nama_opd", |o: &Opd| Some(o.nama_opd.clone())));
//!
//! let controller = ResourceController::new(spec, transport, Arc::new(Session::anonymous()));
//! controller.load().await;
//! controller.set_query("kesehatan");
//! println!("{} of {} units", controller.view().len(), controller.raw().len());
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod aggregate;
mod controller;
mod envelope;
mod field;
mod filter;
mod mutation;
mod spec;
mod store;

pub use controller::ResourceController;
pub use envelope::{Envelope, decode_items, normalize};
pub use field::{Field, TimestampField, dotted_prefix};
pub use filter::{matches, project};
pub use mutation::MutationCoordinator;
pub use spec::ResourceSpec;
pub use store::{ControllerSnapshot, ResourceStore};

pub use satudata_core::{FilterState, LifecycleStatus, MutationResult};
