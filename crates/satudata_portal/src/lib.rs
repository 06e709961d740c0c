//! SatuData portal resources.
//!
//! Each module describes one dashboard list of the portal: the item the
//! backend returns, the payloads accepted by its mutation endpoints, and a
//! ready-made [`ResourceSpec`](satudata_resource::ResourceSpec) naming the
//! searchable fields and dropdown filters.
//!
//! | Resource | Item | Search | Filters |
//! |----------|------|--------|---------|
//! | `opd` | [`Opd`] | name, code, abbreviation | status |
//! | `urusan` | [`Urusan`] | name, code | kategori (code prefix) |
//! | `buku` | [`Book`] | title, author | tahun, opd, kategori |
//! | `akun_kepala_dinas` | [`AkunKepalaDinas`] | name, email, username | status, nama_opd |
//! | `trx_sektoral` | [`TrxSektoral`] | description, OPD | tahun, nama_opd, status, kategori_urusan |
//! | `users` | [`User`] | name, email | role, status |
//!
//! Endpoint paths come from configuration, so every spec constructor takes
//! the [`ResourceEndpoints`](satudata_core::ResourceEndpoints) to use.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod akun;
pub mod book;
mod catalog;
mod lenient;
pub mod opd;
mod status;
pub mod trx_sektoral;
pub mod urusan;
pub mod user;

pub use akun::{AkunKepalaDinas, NewAkun, NewAkunBuilder};
pub use book::{Book, NewBook, NewBookBuilder};
pub use catalog::PortalResource;
pub use opd::{NewOpd, NewOpdBuilder, Opd};
pub use status::StatusChange;
pub use trx_sektoral::{NewTrxSektoral, NewTrxSektoralBuilder, TrxSektoral};
pub use urusan::{NewUrusan, NewUrusanBuilder, Urusan, is_urusan_code};
pub use user::User;
