//! Identity contract for resource items.

use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::hash::Hash;

/// A record held by a resource controller.
///
/// The controller never interprets an item beyond its identity and the
/// fields named in its filter configuration.
///
/// # Examples
///
/// ```
/// use satudata_core::Resource;
/// use serde::Deserialize;
///
/// #[derive(Debug, Clone, PartialEq, Deserialize)]
/// struct Park {
///     id: i64,
///     name: String,
/// }
///
/// impl Resource for Park {
///     type Id = i64;
///
///     fn id(&self) -> i64 {
///         self.id
///     }
/// }
///
/// let park = Park { id: 7, name: "Taman Kota".into() };
/// assert_eq!(park.id(), 7);
/// ```
pub trait Resource: Clone + DeserializeOwned + Send + Sync + 'static {
    /// Stable identity field type (integer or string id).
    type Id: Clone + Eq + Hash + Display + Send + Sync + 'static;

    /// The identity of this item.
    fn id(&self) -> Self::Id;
}
