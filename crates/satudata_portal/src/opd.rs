//! Regional government units (Organisasi Perangkat Daerah).

use crate::lenient;
use satudata_core::{Resource, ResourceEndpoints, Validate, require_text};
use satudata_error::ValidationError;
use satudata_resource::{Field, ResourceSpec};
use serde::{Deserialize, Serialize};

/// Configuration key of the resource.
pub const NAME: &str = "opd";

/// A regional government unit.
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
pub struct Opd {
    /// Backend id
    #[serde(deserialize_with = "lenient::id")]
    #[getter(skip)]
    id: i64,
    /// Unit code
    #[serde(default)]
    #[builder(default)]
    kode_opd: String,
    /// Unit name
    #[serde(default)]
    nama_opd: String,
    /// Abbreviation (optional)
    #[serde(default)]
    #[builder(default)]
    singkatan: Option<String>,
    /// Address (optional)
    #[serde(default)]
    #[builder(default)]
    alamat: Option<String>,
    /// Status word (optional)
    #[serde(default)]
    #[builder(default)]
    status: Option<String>,
}

impl Resource for Opd {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Search by name, code and abbreviation; filter by status.
pub fn spec(endpoints: ResourceEndpoints) -> ResourceSpec<Opd> {
    ResourceSpec::new(NAME, endpoints)
        .search(Field::text("nama_opd", |o: &Opd| Some(o.nama_opd.clone())))
        .search(Field::text("kode_opd", |o: &Opd| Some(o.kode_opd.clone())))
        .search(Field::text("singkatan", |o: &Opd| o.singkatan.clone()))
        .filter(Field::text("status", |o: &Opd| o.status.clone()))
}

/// Body of an OPD create or update call.
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
pub struct NewOpd {
    /// Unit code (required)
    kode_opd: String,
    /// Unit name (required)
    nama_opd: String,
    /// Abbreviation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    singkatan: Option<String>,
    /// Address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    alamat: Option<String>,
}

impl Validate for NewOpd {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("kode_opd", &self.kode_opd)?;
        require_text("nama_opd", &self.nama_opd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_sparse_item() {
        let opd: Opd =
            serde_json::from_value(json!({"id": "3", "nama_opd": "Dinas Kesehatan"})).unwrap();
        assert_eq!(opd.id(), 3);
        assert_eq!(opd.kode_opd(), "");
        assert!(opd.singkatan().is_none());
    }

    #[test]
    fn search_covers_abbreviation() {
        let spec = spec(ResourceEndpoints::new("/opd"));
        let opd = OpdBuilder::default()
            .id(1)
            .nama_opd("Dinas Komunikasi dan Informatika")
            .singkatan(Some("Diskominfo".to_string()))
            .build()
            .unwrap();
        let names: Vec<_> = spec.search_fields().iter().map(|f| f.name().to_string()).collect();
        assert_eq!(names, ["nama_opd", "kode_opd", "singkatan"]);
        assert_eq!(spec.search_fields()[2].value(&opd).as_deref(), Some("Diskominfo"));
    }

    #[test]
    fn payload_requires_code_and_name() {
        let missing_code = NewOpdBuilder::default()
            .kode_opd(" ")
            .nama_opd("Dinas Pendidikan")
            .build()
            .unwrap();
        assert_eq!(missing_code.validate().unwrap_err().field, "kode_opd");

        let ok = NewOpdBuilder::default()
            .kode_opd("1.01")
            .nama_opd("Dinas Pendidikan")
            .build()
            .unwrap();
        assert!(ok.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({"kode_opd": "1.01", "nama_opd": "Dinas Pendidikan"})
        );
    }
}
