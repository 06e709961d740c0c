//! Deserializers tolerant of the value shapes different portal backends emit.
//!
//! Ids and years arrive as numbers or numeric strings; activity flags as
//! booleans, `0`/`1` or words.

use serde::{Deserialize, Deserializer, de::Error};
use serde_json::Value;

pub(crate) fn id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| D::Error::custom(format!("id out of range: {}", n))),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid id: {}", s))),
        other => Err(D::Error::custom(format!("invalid id: {}", other))),
    }
}

pub(crate) fn year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

pub(crate) fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_i64().is_some_and(|v| v != 0),
        Value::String(s) => matches!(
            s.trim().to_lowercase().as_str(),
            "1" | "true" | "active" | "aktif"
        ),
        _ => false,
    })
}

/// Activity label used by status filters.
pub(crate) fn activity_label(active: bool) -> &'static str {
    if active { "active" } else { "inactive" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "id")]
        id: i64,
        #[serde(default, deserialize_with = "year")]
        tahun: Option<i32>,
        #[serde(default, deserialize_with = "flag")]
        is_active: bool,
        #[serde(default, deserialize_with = "number")]
        nilai: Option<f64>,
    }

    #[test]
    fn accepts_numeric_strings() {
        let probe: Probe =
            serde_json::from_value(json!({"id": "42", "tahun": "2023", "nilai": "12.5"})).unwrap();
        assert_eq!(probe.id, 42);
        assert_eq!(probe.tahun, Some(2023));
        assert_eq!(probe.nilai, Some(12.5));
        assert!(!probe.is_active);
    }

    #[test]
    fn flags_accept_several_spellings() {
        for (raw, expected) in [
            (json!(true), true),
            (json!(1), true),
            (json!(0), false),
            (json!("aktif"), true),
            (json!("nonaktif"), false),
            (Value::Null, false),
        ] {
            let probe: Probe = serde_json::from_value(json!({"id": 1, "is_active": raw})).unwrap();
            assert_eq!(probe.is_active, expected);
        }
    }

    #[test]
    fn null_year_is_absent() {
        let probe: Probe = serde_json::from_value(json!({"id": 1, "tahun": null})).unwrap();
        assert_eq!(probe.tahun, None);
    }

    #[test]
    fn rejects_non_numeric_id() {
        let result: Result<Probe, _> = serde_json::from_value(json!({"id": "abc"}));
        assert!(result.is_err());
    }
}
