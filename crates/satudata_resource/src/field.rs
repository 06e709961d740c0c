//! Named field extractors shared by filters and aggregates.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fmt;
use std::sync::Arc;

type Extractor<T> = Arc<dyn Fn(&T) -> Option<String> + Send + Sync>;
type TimestampExtractor<T> = Arc<dyn Fn(&T) -> Option<String> + Send + Sync>;

/// A named, possibly derived, text value of an item.
///
/// The same `Field` drives the equality predicate and the dropdown aggregate
/// of a filter, so the two always agree on which values exist.
///
/// # Examples
///
/// ```
/// use satudata_resource::{Field, dotted_prefix};
///
/// struct Urusan {
///     kode_urusan: String,
/// }
///
/// let kategori = Field::text("kategori", |u: &Urusan| dotted_prefix(&u.kode_urusan));
/// let item = Urusan { kode_urusan: "1.02".into() };
/// assert_eq!(kategori.value(&item).as_deref(), Some("1"));
/// ```
pub struct Field<T> {
    name: String,
    extract: Extractor<T>,
}

impl<T> Field<T> {
    /// A field whose value is computed by `extract`.
    pub fn text<F>(name: impl Into<String>, extract: F) -> Self
    where
        F: Fn(&T) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            extract: Arc::new(extract),
        }
    }

    /// A field backed by a displayable value, such as a numeric year.
    pub fn display<V, F>(name: impl Into<String>, extract: F) -> Self
    where
        V: fmt::Display + 'static,
        F: Fn(&T) -> Option<V> + Send + Sync + 'static,
    {
        Self::text(name, move |item| extract(item).map(|v| v.to_string()))
    }

    /// Field name used in filter state and aggregates.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of this field for an item. Blank values count as absent.
    pub fn value(&self, item: &T) -> Option<String> {
        (self.extract)(item).filter(|v| !v.trim().is_empty())
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            extract: Arc::clone(&self.extract),
        }
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

/// Timestamp of an item, parsed from the backend's text representation.
pub struct TimestampField<T> {
    extract: TimestampExtractor<T>,
}

impl<T> TimestampField<T> {
    /// Wrap an accessor returning the raw timestamp text.
    pub fn new<F>(extract: F) -> Self
    where
        F: Fn(&T) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            extract: Arc::new(extract),
        }
    }

    /// Parsed timestamp of an item, if present and well-formed.
    pub fn value(&self, item: &T) -> Option<NaiveDateTime> {
        (self.extract)(item).as_deref().and_then(parse_timestamp)
    }
}

impl<T> Clone for TimestampField<T> {
    fn clone(&self) -> Self {
        Self {
            extract: Arc::clone(&self.extract),
        }
    }
}

impl<T> fmt::Debug for TimestampField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TimestampField")
    }
}

/// Parse the timestamp formats the portal backends emit.
///
/// Accepts RFC 3339 (`2024-03-01T08:00:00.000000Z`), SQL datetimes
/// (`2024-03-01 08:00:00`) and plain dates (`2024-03-01`).
pub(crate) fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Segment of a dotted code before the first `.`.
///
/// ```
/// use satudata_resource::dotted_prefix;
///
/// assert_eq!(dotted_prefix("2.17.01").as_deref(), Some("2"));
/// assert_eq!(dotted_prefix("3").as_deref(), Some("3"));
/// assert_eq!(dotted_prefix(" .5"), None);
/// ```
pub fn dotted_prefix(code: &str) -> Option<String> {
    let prefix = code.trim().split('.').next()?.trim();
    (!prefix.is_empty()).then(|| prefix.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn parses_backend_timestamp_formats() {
        let rfc = parse_timestamp("2024-03-01T08:00:00.000000Z").unwrap();
        assert_eq!((rfc.year(), rfc.month(), rfc.day()), (2024, 3, 1));

        let sql = parse_timestamp("2023-12-31 23:59:59").unwrap();
        assert_eq!(sql.year(), 2023);

        let date = parse_timestamp("2022-07-15").unwrap();
        assert_eq!(date.month(), 7);

        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn blank_values_are_absent() {
        let field = Field::text("nama", |s: &String| Some(s.clone()));
        assert_eq!(field.value(&"  ".to_string()), None);
        assert_eq!(field.value(&"Dinas".to_string()).as_deref(), Some("Dinas"));
    }

    #[test]
    fn display_fields_stringify() {
        let field = Field::display("tahun", |y: &i32| Some(*y));
        assert_eq!(field.value(&2024).as_deref(), Some("2024"));
    }
}
