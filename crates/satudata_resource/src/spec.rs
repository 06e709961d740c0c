//! Declarative description of one resource.

use crate::{Field, TimestampField};
use satudata_core::ResourceEndpoints;
use satudata_error::{ResourceError, ResourceErrorKind, SatuDataResult};

/// Everything a controller needs to know about a resource: its endpoints,
/// which fields the search box scans, which fields can be selected in a
/// dropdown filter, and where its creation timestamp lives.
///
/// # Examples
///
/// ```
/// use satudata_core::ResourceEndpoints;
/// use satudata_resource::{Field, ResourceSpec};
///
/// struct Akun {
///     full_name: String,
///     is_active: bool,
/// }
///
/// let spec = ResourceSpec::new("akun", ResourceEndpoints::new("/akun"))
///     .search(Field::text("full_name", |a: &Akun| Some(a.full_name.clone())))
///     .filter(Field::text("status", |a: &Akun| {
///         Some(if a.is_active { "active" } else { "inactive" }.to_string())
///     }));
///
/// assert!(spec.field("status").is_ok());
/// assert!(spec.field("tahun").is_err());
/// ```
#[derive(Debug)]
pub struct ResourceSpec<T> {
    name: String,
    endpoints: ResourceEndpoints,
    search_fields: Vec<Field<T>>,
    filters: Vec<Field<T>>,
    timestamp: Option<TimestampField<T>>,
}

impl<T> ResourceSpec<T> {
    /// A resource with no search fields and no filters.
    pub fn new(name: impl Into<String>, endpoints: ResourceEndpoints) -> Self {
        Self {
            name: name.into(),
            endpoints,
            search_fields: Vec::new(),
            filters: Vec::new(),
            timestamp: None,
        }
    }

    /// Add a field scanned by the text search.
    pub fn search(mut self, field: Field<T>) -> Self {
        self.search_fields.push(field);
        self
    }

    /// Add a categorical filter. Its name is the key used in filter state.
    pub fn filter(mut self, field: Field<T>) -> Self {
        self.filters.push(field);
        self
    }

    /// Set the creation timestamp accessor used by time-windowed counts.
    pub fn timestamp<F>(mut self, extract: F) -> Self
    where
        F: Fn(&T) -> Option<String> + Send + Sync + 'static,
    {
        self.timestamp = Some(TimestampField::new(extract));
        self
    }

    /// Replace the endpoints, e.g. with values from configuration.
    pub fn with_endpoints(mut self, endpoints: ResourceEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Resource name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Endpoint templates.
    pub fn endpoints(&self) -> &ResourceEndpoints {
        &self.endpoints
    }

    /// Fields scanned by the text search.
    pub fn search_fields(&self) -> &[Field<T>] {
        &self.search_fields
    }

    /// Categorical filter fields.
    pub fn filters(&self) -> &[Field<T>] {
        &self.filters
    }

    /// Timestamp accessor, if configured.
    pub fn timestamp_field(&self) -> Option<&TimestampField<T>> {
        self.timestamp.as_ref()
    }

    /// Look up a categorical filter field by name.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceErrorKind::UnknownField`] for unregistered names.
    pub fn field(&self, name: &str) -> SatuDataResult<&Field<T>> {
        self.filters
            .iter()
            .chain(self.search_fields.iter())
            .find(|f| f.name() == name)
            .ok_or_else(|| {
                ResourceError::new(ResourceErrorKind::UnknownField {
                    resource: self.name.clone(),
                    field: name.to_string(),
                })
                .into()
            })
    }
}

impl<T> Clone for ResourceSpec<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            endpoints: self.endpoints.clone(),
            search_fields: self.search_fields.clone(),
            filters: self.filters.clone(),
            timestamp: self.timestamp.clone(),
        }
    }
}
