//! Core data types for the SatuData resource controller.
//!
//! This crate provides the small values every other SatuData crate passes
//! around: the lifecycle of a resource list, the outcome of a mutation, the
//! filter state a user edits, and the identity contract a resource item meets.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod confirmation;
mod endpoints;
mod filter_state;
mod lifecycle;
mod mutation;
mod resource;
mod telemetry;
mod validate;

pub use confirmation::Confirmation;
pub use endpoints::ResourceEndpoints;
pub use filter_state::FilterState;
pub use lifecycle::LifecycleStatus;
pub use mutation::{MutationKind, MutationResult};
pub use resource::Resource;
pub use telemetry::init_telemetry;
pub use validate::{Validate, require_email, require_text, require_year};
