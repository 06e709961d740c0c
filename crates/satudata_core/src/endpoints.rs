//! Endpoint paths of a resource.

use crate::MutationKind;
use derive_getters::Getters;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use satudata_error::{ResourceError, ResourceErrorKind, SatuDataResult};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Bytes left as-is in an `{id}` segment: RFC 3986 unreserved characters.
const ID_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Path templates of one backend resource.
///
/// Templates may contain an `{id}` placeholder. A missing mutation path means
/// the backend does not support that operation for this resource.
///
/// ```toml
/// [resources.opd]
/// list = "/opd"
/// create = "/opd"
/// update = "/opd/{id}"
/// delete = "/opd/{id}"
/// ```
///
/// # Examples
///
/// ```
/// use satudata_core::{MutationKind, ResourceEndpoints};
///
/// let endpoints = ResourceEndpoints::new("/opd")
///     .with_create("/opd")
///     .with_delete("/opd/{id}");
///
/// assert_eq!(endpoints.path_for("opd", MutationKind::Delete, Some(&12)).unwrap(), "/opd/12");
/// assert!(endpoints.path_for("opd", MutationKind::Update, Some(&12)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct ResourceEndpoints {
    /// List endpoint.
    list: String,
    /// Create endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    create: Option<String>,
    /// Update endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    update: Option<String>,
    /// Delete endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    delete: Option<String>,
    /// Status change endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<String>,
}

impl ResourceEndpoints {
    /// Endpoints with only a list path.
    pub fn new(list: impl Into<String>) -> Self {
        Self {
            list: list.into(),
            ..Self::default()
        }
    }

    /// Set the create path.
    pub fn with_create(mut self, path: impl Into<String>) -> Self {
        self.create = Some(path.into());
        self
    }

    /// Set the update path.
    pub fn with_update(mut self, path: impl Into<String>) -> Self {
        self.update = Some(path.into());
        self
    }

    /// Set the delete path.
    pub fn with_delete(mut self, path: impl Into<String>) -> Self {
        self.delete = Some(path.into());
        self
    }

    /// Set the status change path.
    pub fn with_status(mut self, path: impl Into<String>) -> Self {
        self.status = Some(path.into());
        self
    }

    /// Resolve the path of a mutation, substituting `{id}`.
    ///
    /// The id is percent-encoded as a single path segment, so `"a/b c"`
    /// becomes `"a%2Fb%20c"`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceErrorKind::MissingEndpoint`] when no template is
    /// configured for the operation.
    pub fn path_for(
        &self,
        resource: &str,
        kind: MutationKind,
        id: Option<&dyn Display>,
    ) -> SatuDataResult<String> {
        let template = match kind {
            MutationKind::Create => self.create.as_ref(),
            MutationKind::Update => self.update.as_ref(),
            MutationKind::Delete => self.delete.as_ref(),
            MutationKind::SetStatus => self.status.as_ref(),
        }
        .ok_or_else(|| {
            ResourceError::new(ResourceErrorKind::MissingEndpoint {
                resource: resource.to_string(),
                operation: kind.to_string(),
            })
        })?;

        Ok(match id {
            Some(id) => {
                let segment = utf8_percent_encode(&id.to_string(), ID_SEGMENT).to_string();
                template.replace("{id}", &segment)
            }
            None => template.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> ResourceEndpoints {
        ResourceEndpoints::new("/opd").with_update("/opd/{id}")
    }

    #[test]
    fn id_is_encoded_as_one_segment() {
        let path = endpoints()
            .path_for("opd", MutationKind::Update, Some(&"a/b c"))
            .unwrap();
        assert_eq!(path, "/opd/a%2Fb%20c");
    }

    #[test]
    fn unreserved_id_characters_pass_through() {
        let path = endpoints()
            .path_for("opd", MutationKind::Update, Some(&"1.02-a_b~c"))
            .unwrap();
        assert_eq!(path, "/opd/1.02-a_b~c");
    }
}
