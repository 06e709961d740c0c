//! Government affairs classification (urusan pemerintahan).
//!
//! Codes are dotted (`1.02`, `2.17`); the segment before the first dot is
//! the affairs category used by the dropdown filter.

use crate::lenient;
use regex::Regex;
use satudata_core::{Resource, ResourceEndpoints, Validate, require_text};
use satudata_error::ValidationError;
use satudata_resource::{Field, ResourceSpec, dotted_prefix};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Configuration key of the resource.
pub const NAME: &str = "urusan";

static URUSAN_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)*$").expect("Valid urusan code regex"));

/// Whether a code is dotted digits such as `1.02`.
///
/// ```
/// use satudata_portal::is_urusan_code;
///
/// assert!(is_urusan_code("1.02"));
/// assert!(is_urusan_code("3"));
/// assert!(!is_urusan_code("1..2"));
/// assert!(!is_urusan_code("A.01"));
/// ```
pub fn is_urusan_code(code: &str) -> bool {
    URUSAN_CODE.is_match(code.trim())
}

/// An affairs classification entry.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Urusan {
    /// Backend id
    #[serde(deserialize_with = "lenient::id")]
    #[getter(skip)]
    id: i64,
    /// Dotted code
    #[serde(default)]
    kode_urusan: String,
    /// Affairs name
    #[serde(default)]
    nama_urusan: String,
}

impl Urusan {
    /// Category of this entry: the code prefix before the first dot.
    pub fn kategori(&self) -> Option<String> {
        dotted_prefix(&self.kode_urusan)
    }
}

impl Resource for Urusan {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Search by name and code; filter by derived category.
pub fn spec(endpoints: ResourceEndpoints) -> ResourceSpec<Urusan> {
    ResourceSpec::new(NAME, endpoints)
        .search(Field::text("nama_urusan", |u: &Urusan| Some(u.nama_urusan.clone())))
        .search(Field::text("kode_urusan", |u: &Urusan| Some(u.kode_urusan.clone())))
        .filter(Field::text("kategori", Urusan::kategori))
}

/// Body of an urusan create or update call.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct NewUrusan {
    /// Dotted code (required)
    kode_urusan: String,
    /// Affairs name (required)
    nama_urusan: String,
}

impl Validate for NewUrusan {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("kode_urusan", &self.kode_urusan)?;
        if !is_urusan_code(&self.kode_urusan) {
            return Err(ValidationError::new(
                "kode_urusan",
                "must be dotted digits such as 1.02",
            ));
        }
        require_text("nama_urusan", &self.nama_urusan)
    }
}
