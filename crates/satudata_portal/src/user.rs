//! Staff users of the portal back office.

use crate::lenient;
use satudata_core::{Resource, ResourceEndpoints};
use satudata_resource::{Field, ResourceSpec};
use serde::{Deserialize, Serialize};

/// Configuration key of the resource.
pub const NAME: &str = "users";

/// A back-office user.
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
pub struct User {
    /// Backend id
    #[serde(deserialize_with = "lenient::id")]
    #[getter(skip)]
    id: i64,
    /// Display name
    #[serde(default)]
    name: String,
    /// Email address
    #[serde(default)]
    email: String,
    /// Role such as `admin` or `operator` (optional)
    #[serde(default)]
    #[builder(default)]
    role: Option<String>,
    /// Unit the user belongs to (optional)
    #[serde(default)]
    #[builder(default)]
    nama_opd: Option<String>,
    /// Whether the user may log in
    #[serde(default, deserialize_with = "lenient::flag")]
    #[builder(default)]
    is_active: bool,
    /// Creation timestamp (optional)
    #[serde(default)]
    #[builder(default)]
    created_at: Option<String>,
}

impl User {
    /// `active` or `inactive`.
    pub fn status(&self) -> &'static str {
        lenient::activity_label(self.is_active)
    }
}

impl Resource for User {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Search by name and email; filter by role and derived status.
pub fn spec(endpoints: ResourceEndpoints) -> ResourceSpec<User> {
    ResourceSpec::new(NAME, endpoints)
        .search(Field::text("name", |u: &User| Some(u.name.clone())))
        .search(Field::text("email", |u: &User| Some(u.email.clone())))
        .filter(Field::text("role", |u: &User| u.role.clone()))
        .filter(Field::text("status", |u: &User| Some(u.status().to_string())))
        .timestamp(|u: &User| u.created_at.clone())
}
