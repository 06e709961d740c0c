//! Sectoral statistics transactions.

use crate::{lenient, urusan};
use satudata_core::{Resource, ResourceEndpoints, Validate, require_text, require_year};
use satudata_error::ValidationError;
use satudata_resource::{Field, ResourceSpec, dotted_prefix};
use serde::{Deserialize, Serialize};

/// Configuration key of the resource.
pub const NAME: &str = "trx_sektoral";

/// One reported value of a sectoral indicator.
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
pub struct TrxSektoral {
    /// Backend id
    #[serde(deserialize_with = "lenient::id")]
    #[getter(skip)]
    id: i64,
    /// Indicator description
    #[serde(default)]
    uraian: String,
    /// Reporting year (optional)
    #[serde(default, deserialize_with = "lenient::year")]
    #[builder(default)]
    tahun: Option<i32>,
    /// Reported value (optional)
    #[serde(default, deserialize_with = "lenient::number")]
    #[builder(default)]
    nilai: Option<f64>,
    /// Unit of measure (optional)
    #[serde(default)]
    #[builder(default)]
    satuan: Option<String>,
    /// Reporting unit (optional)
    #[serde(default)]
    #[builder(default)]
    nama_opd: Option<String>,
    /// Affairs code the indicator belongs to (optional)
    #[serde(default)]
    #[builder(default)]
    kode_urusan: Option<String>,
    /// Verification status (optional)
    #[serde(default)]
    #[builder(default)]
    status: Option<String>,
}

impl TrxSektoral {
    /// Affairs category of the indicator.
    pub fn kategori_urusan(&self) -> Option<String> {
        self.kode_urusan.as_deref().and_then(dotted_prefix)
    }
}

impl Resource for TrxSektoral {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Search by description and unit; filter by year, unit, status and affairs
/// category.
pub fn spec(endpoints: ResourceEndpoints) -> ResourceSpec<TrxSektoral> {
    ResourceSpec::new(NAME, endpoints)
        .search(Field::text("uraian", |t: &TrxSektoral| Some(t.uraian.clone())))
        .search(Field::text("nama_opd", |t: &TrxSektoral| t.nama_opd.clone()))
        .filter(Field::display("tahun", |t: &TrxSektoral| t.tahun))
        .filter(Field::text("nama_opd", |t: &TrxSektoral| t.nama_opd.clone()))
        .filter(Field::text("status", |t: &TrxSektoral| t.status.clone()))
        .filter(Field::text("kategori_urusan", TrxSektoral::kategori_urusan))
}

/// Body of a transaction create or update call.
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
pub struct NewTrxSektoral {
    /// Indicator description (required)
    uraian: String,
    /// Reporting year, 1900 to 2100
    tahun: i32,
    /// Reported value
    nilai: f64,
    /// Unit of measure (required)
    satuan: String,
    /// Reporting unit (required)
    nama_opd: String,
    /// Affairs code, dotted digits
    kode_urusan: String,
}

impl Validate for NewTrxSektoral {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("uraian", &self.uraian)?;
        require_year("tahun", self.tahun)?;
        if !self.nilai.is_finite() {
            return Err(ValidationError::new("nilai", "must be a number"));
        }
        require_text("satuan", &self.satuan)?;
        require_text("nama_opd", &self.nama_opd)?;
        if !urusan::is_urusan_code(&self.kode_urusan) {
            return Err(ValidationError::new(
                "kode_urusan",
                "must be dotted digits such as 1.02",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_code_has_no_category() {
        let trx: TrxSektoral =
            serde_json::from_value(json!({"id": 4, "uraian": "Jumlah puskesmas", "nilai": "12"}))
                .unwrap();
        assert_eq!(trx.kategori_urusan(), None);
        assert_eq!(*trx.nilai(), Some(12.0));
    }

    #[test]
    fn payload_rejects_non_finite_value() {
        let trx = NewTrxSektoralBuilder::default()
            .uraian("Jumlah puskesmas")
            .tahun(2024)
            .nilai(f64::NAN)
            .satuan("unit")
            .nama_opd("Dinas Kesehatan")
            .kode_urusan("1.02")
            .build()
            .unwrap();
        assert_eq!(trx.validate().unwrap_err().field, "nilai");
    }
}
