//! SatuData - resource controllers for a government open-data portal.
//!
//! Every list in the portal dashboards (government units, affairs codes,
//! digital books, agency-head accounts, sectoral statistics, staff users)
//! is driven by the same [`ResourceController`]: it fetches a list whatever
//! envelope the backend wraps it in, keeps the raw copy alongside a filtered
//! view, runs create/update/delete/status calls with a refetch on success,
//! and derives dropdown values and counters from the raw data.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use satudata::{Portal, PortalConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let portal = Portal::new(PortalConfig::load()?)?;
//!
//!     let akun = portal.akun_kepala_dinas()?;
//!     akun.load().await;
//!     akun.select("status", "active");
//!
//!     println!("{} active of {}", akun.view().len(), akun.raw().len());
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - OpenTelemetry span export to stdout
//!
//! # Architecture
//!
//! - `satudata_error` - Error types
//! - `satudata_core` - Lifecycle, filter state, mutation outcomes, telemetry
//! - `satudata_interface` - `Transport` and `AuthProvider` traits
//! - `satudata_resource` - The generic resource controller
//! - `satudata_client` - HTTP transport and layered configuration
//! - `satudata_portal` - Typed portal resources
//!
//! This crate (`satudata`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod portal;

pub use portal::Portal;

pub use satudata_client::*;
pub use satudata_core::*;
pub use satudata_error::*;
pub use satudata_interface::*;
pub use satudata_portal::{
    AkunKepalaDinas, Book, NewAkun, NewAkunBuilder, NewBook, NewBookBuilder, NewOpd,
    NewOpdBuilder, NewTrxSektoral, NewTrxSektoralBuilder, NewUrusan, NewUrusanBuilder, Opd,
    PortalResource, StatusChange, TrxSektoral, Urusan, User, is_urusan_code,
};
pub use satudata_resource::{
    ControllerSnapshot, Envelope, Field, MutationCoordinator, ResourceController, ResourceSpec,
    ResourceStore, TimestampField, aggregate, decode_items, dotted_prefix, matches, normalize,
    project,
};

#[cfg(feature = "observability")]
pub mod observability;
