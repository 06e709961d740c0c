//! Head-of-agency accounts (akun kepala dinas).

use crate::lenient;
use satudata_core::{Resource, ResourceEndpoints, Validate, require_email, require_text};
use satudata_error::ValidationError;
use satudata_resource::{Field, ResourceSpec};
use serde::{Deserialize, Serialize};

/// Configuration key of the resource.
pub const NAME: &str = "akun_kepala_dinas";

/// Login account of an agency head.
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
pub struct AkunKepalaDinas {
    /// Backend id
    #[serde(deserialize_with = "lenient::id")]
    #[getter(skip)]
    id: i64,
    /// Full name
    #[serde(default)]
    full_name: String,
    /// Email address
    #[serde(default)]
    email: String,
    /// Login name (optional)
    #[serde(default)]
    #[builder(default)]
    username: Option<String>,
    /// Unit the account belongs to (optional)
    #[serde(default)]
    #[builder(default)]
    nama_opd: Option<String>,
    /// Whether the account may log in
    #[serde(default, deserialize_with = "lenient::flag")]
    #[builder(default)]
    is_active: bool,
    /// Creation timestamp (optional)
    #[serde(default)]
    #[builder(default)]
    created_at: Option<String>,
}

impl AkunKepalaDinas {
    /// `active` or `inactive`.
    pub fn status(&self) -> &'static str {
        lenient::activity_label(self.is_active)
    }
}

impl Resource for AkunKepalaDinas {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Search by name, email and username; filter by derived status and unit.
///
/// Active and inactive counters come from `count_value("status", "active")`
/// on the controller, which uses the same derived field as the filter.
pub fn spec(endpoints: ResourceEndpoints) -> ResourceSpec<AkunKepalaDinas> {
    ResourceSpec::new(NAME, endpoints)
        .search(Field::text("full_name", |a: &AkunKepalaDinas| {
            Some(a.full_name.clone())
        }))
        .search(Field::text("email", |a: &AkunKepalaDinas| Some(a.email.clone())))
        .search(Field::text("username", |a: &AkunKepalaDinas| a.username.clone()))
        .filter(Field::text("status", |a: &AkunKepalaDinas| {
            Some(a.status().to_string())
        }))
        .filter(Field::text("nama_opd", |a: &AkunKepalaDinas| a.nama_opd.clone()))
        .timestamp(|a: &AkunKepalaDinas| a.created_at.clone())
}

/// Body of an account create or update call.
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
pub struct NewAkun {
    /// Full name (required)
    full_name: String,
    /// Email address (required)
    email: String,
    /// Login name (required)
    username: String,
    /// Unit the account belongs to (required)
    nama_opd: String,
    /// Initial password, omitted on updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    password: Option<String>,
}

impl Validate for NewAkun {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("full_name", &self.full_name)?;
        require_email("email", &self.email)?;
        require_text("username", &self.username)?;
        require_text("nama_opd", &self.nama_opd)?;
        if self.password.as_ref().is_some_and(|p| p.len() < 8) {
            return Err(ValidationError::new(
                "password",
                "must be at least 8 characters",
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
    fn status_is_derived_from_flag() {
        let active: AkunKepalaDinas =
            serde_json::from_value(json!({"id": 1, "full_name": "Siti", "is_active": 1})).unwrap();
        let inactive: AkunKepalaDinas =
            serde_json::from_value(json!({"id": 2, "full_name": "Budi"})).unwrap();
        assert_eq!(active.status(), "active");
        assert_eq!(inactive.status(), "inactive");

        let spec = spec(ResourceEndpoints::new("/akun"));
        assert_eq!(
            spec.field("status").unwrap().value(&inactive).as_deref(),
            Some("inactive")
        );
    }

    #[test]
    fn payload_requires_valid_email() {
        let akun = NewAkunBuilder::default()
            .full_name("Siti Rahma")
            .email("siti.example.go.id")
            .username("siti")
            .nama_opd("Dinas Kesehatan")
            .build()
            .unwrap();
        assert_eq!(akun.validate().unwrap_err().field, "email");
    }

    #[test]
    fn short_password_is_rejected() {
        let akun = NewAkunBuilder::default()
            .full_name("Siti Rahma")
            .email("siti@example.go.id")
            .username("siti")
            .nama_opd("Dinas Kesehatan")
            .password(Some("123".to_string()))
            .build()
            .unwrap();
        assert_eq!(akun.validate().unwrap_err().field, "password");
    }
}
