//! Response envelope normalization.

use satudata_core::Resource;
use satudata_error::{JsonError, SatuDataError, SatuDataResult};
use serde_json::Value;

/// The shape a list response arrived in.
///
/// Backends wrap list payloads under different field names. Precedence is
/// fixed: `data`, then `hasil`, then `result`, then a bare array. A field is
/// present when it exists and is not `null`.
///
/// # Examples
///
/// ```
/// use satudata_resource::Envelope;
/// use serde_json::json;
///
/// let envelope = Envelope::classify(json!({"hasil": [1, 2]}));
/// assert!(matches!(envelope, Envelope::Hasil(_)));
/// assert_eq!(envelope.into_items(), vec![json!(1), json!(2)]);
///
/// assert_eq!(Envelope::classify(json!({"message": "ok"})), Envelope::Empty);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// `{ "data": ... }`
    Data(Value),
    /// `{ "hasil": ... }`
    Hasil(Value),
    /// `{ "result": ... }`
    Result(Value),
    /// A bare JSON array.
    Bare(Vec<Value>),
    /// Nothing recognisable.
    Empty,
}

impl Envelope {
    /// Field names probed in order.
    pub const FIELDS: [&'static str; 3] = ["data", "hasil", "result"];

    /// Classify a decoded response body.
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::Bare(items),
            Value::Object(mut map) => {
                for field in Self::FIELDS {
                    match map.remove(field) {
                        Some(Value::Null) | None => continue,
                        Some(payload) => {
                            return match field {
                                "data" => Self::Data(payload),
                                "hasil" => Self::Hasil(payload),
                                _ => Self::Result(payload),
                            };
                        }
                    }
                }
                Self::Empty
            }
            _ => Self::Empty,
        }
    }

    /// The list payload. A wrapped payload that is not an array yields nothing.
    pub fn into_items(self) -> Vec<Value> {
        match self {
            Self::Data(payload) | Self::Hasil(payload) | Self::Result(payload) => match payload {
                Value::Array(items) => items,
                _ => Vec::new(),
            },
            Self::Bare(items) => items,
            Self::Empty => Vec::new(),
        }
    }

    /// Name of the matched field, for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Data(_) => "data",
            Self::Hasil(_) => "hasil",
            Self::Result(_) => "result",
            Self::Bare(_) => "array",
            Self::Empty => "empty",
        }
    }
}

/// Extract the list payload from any response body. Never fails.
///
/// ```
/// use satudata_resource::normalize;
/// use serde_json::json;
///
/// assert_eq!(normalize(json!({"data": [{"id": 1}]})).len(), 1);
/// assert!(normalize(json!({})).is_empty());
/// ```
pub fn normalize(value: Value) -> Vec<Value> {
    Envelope::classify(value).into_items()
}

/// Normalize a body and decode every item into `T`.
///
/// # Errors
///
/// Returns a [`JsonError`] naming the offending position when an item does not
/// decode. A body without a recognised payload decodes to an empty list.
pub fn decode_items<T: Resource>(value: Value) -> SatuDataResult<Vec<T>> {
    let envelope = Envelope::classify(value);
    tracing::trace!(envelope = envelope.label(), "Classified response envelope");

    envelope
        .into_items()
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| {
                SatuDataError::from(JsonError::new(format!(
                    "Item {} does not match resource shape: {}",
                    index, e
                )))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_envelope_yields_the_same_items() {
        let items = json!([{"id": 1}, {"id": 2}]);
        for body in [
            json!({"data": items.clone()}),
            json!({"hasil": items.clone()}),
            json!({"result": items.clone()}),
            items.clone(),
        ] {
            assert_eq!(Value::Array(normalize(body)), items);
        }
    }

    #[test]
    fn empty_object_normalizes_to_nothing() {
        assert!(normalize(json!({})).is_empty());
        assert!(normalize(Value::Null).is_empty());
        assert!(normalize(json!("text")).is_empty());
    }

    #[test]
    fn data_takes_precedence_over_hasil_and_result() {
        let body = json!({"result": [3], "hasil": [2], "data": [1]});
        assert_eq!(normalize(body), vec![json!(1)]);

        let body = json!({"result": [3], "hasil": [2]});
        assert_eq!(normalize(body), vec![json!(2)]);
    }

    #[test]
    fn null_field_falls_through_to_the_next() {
        let body = json!({"data": null, "result": [7]});
        assert!(matches!(Envelope::classify(body.clone()), Envelope::Result(_)));
        assert_eq!(normalize(body), vec![json!(7)]);
    }

    #[test]
    fn non_array_payload_is_empty() {
        let body = json!({"data": {"id": 1}, "hasil": [2]});
        assert!(normalize(body).is_empty());
    }
}
