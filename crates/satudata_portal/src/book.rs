//! Digital library books.

use crate::lenient;
use satudata_core::{Resource, ResourceEndpoints, Validate, require_text, require_year};
use satudata_error::ValidationError;
use satudata_resource::{Field, ResourceSpec};
use serde::{Deserialize, Serialize};

/// Configuration key of the resource.
pub const NAME: &str = "buku";

/// A published book in the digital library.
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
pub struct Book {
    /// Backend id
    #[serde(deserialize_with = "lenient::id")]
    #[getter(skip)]
    id: i64,
    /// Title
    #[serde(default)]
    judul: String,
    /// Author (optional)
    #[serde(default)]
    #[builder(default)]
    penulis: Option<String>,
    /// Publication year (optional)
    #[serde(default, deserialize_with = "lenient::year")]
    #[builder(default)]
    tahun: Option<i32>,
    /// Owning unit (optional)
    #[serde(default)]
    #[builder(default)]
    opd: Option<String>,
    /// Category (optional)
    #[serde(default)]
    #[builder(default)]
    kategori: Option<String>,
    /// Creation timestamp (optional)
    #[serde(default)]
    #[builder(default)]
    created_at: Option<String>,
}

impl Resource for Book {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Search by title and author; filter by year, owning unit and category.
pub fn spec(endpoints: ResourceEndpoints) -> ResourceSpec<Book> {
    ResourceSpec::new(NAME, endpoints)
        .search(Field::text("judul", |b: &Book| Some(b.judul.clone())))
        .search(Field::text("penulis", |b: &Book| b.penulis.clone()))
        .filter(Field::display("tahun", |b: &Book| b.tahun))
        .filter(Field::text("opd", |b: &Book| b.opd.clone()))
        .filter(Field::text("kategori", |b: &Book| b.kategori.clone()))
        .timestamp(|b: &Book| b.created_at.clone())
}

/// Body of a book create or update call.
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
pub struct NewBook {
    /// Title (required)
    judul: String,
    /// Author (required)
    penulis: String,
    /// Publication year, 1900 to 2100
    tahun: i32,
    /// Owning unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    opd: Option<String>,
    /// Category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    kategori: Option<String>,
}

impl Validate for NewBook {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("judul", &self.judul)?;
        require_text("penulis", &self.penulis)?;
        require_year("tahun", self.tahun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn year_filter_reads_string_years() {
        let book: Book =
            serde_json::from_value(json!({"id": 9, "judul": "Statistik Daerah", "tahun": "2022"}))
                .unwrap();
        let spec = spec(ResourceEndpoints::new("/buku"));
        assert_eq!(spec.field("tahun").unwrap().value(&book).as_deref(), Some("2022"));
        assert!(spec.timestamp_field().is_some());
    }

    #[test]
    fn payload_checks_year_range() {
        let book = NewBookBuilder::default()
            .judul("Kabupaten Dalam Angka")
            .penulis("BPS")
            .tahun(1850)
            .build()
            .unwrap();
        let err = book.validate().unwrap_err();
        assert_eq!(err.field, "tahun");
    }
}
