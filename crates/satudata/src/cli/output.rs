//! Rendering of items for the terminal.

use satudata::{JsonError, SatuDataResult};
use serde::Serialize;
use serde_json::Value;

/// Pretty JSON of any serializable value.
pub fn to_json<S: Serialize + ?Sized>(value: &S) -> SatuDataResult<String> {
    Ok(serde_json::to_string_pretty(value).map_err(|e| JsonError::new(e.to_string()))?)
}

/// One line per item: `[id] field=value ...`, skipping absent fields.
pub fn human_line<S: Serialize>(item: &S) -> SatuDataResult<String> {
    let value = serde_json::to_value(item).map_err(|e| JsonError::new(e.to_string()))?;
    let Value::Object(fields) = value else {
        return Ok(value.to_string());
    };

    let id = fields.get("id").map(scalar).unwrap_or_default();
    let rest: Vec<String> = fields
        .iter()
        .filter(|(name, v)| name.as_str() != "id" && !v.is_null())
        .map(|(name, v)| format!("{}={}", name, scalar(v)))
        .collect();

    Ok(format!("[{}] {}", id, rest.join("  ")))
}

/// Closing lines of a human listing.
///
/// `no_data` is set when the server returned an empty collection; otherwise
/// an empty view means the active filters matched nothing.
pub fn summary_lines(shown: usize, total: usize, no_data: bool) -> Vec<String> {
    let mut lines = Vec::new();
    if no_data {
        lines.push("No data".to_string());
    } else if shown == 0 {
        lines.push("No matching items".to_string());
    }
    lines.push(format!("Showing {} of {} items", shown, total));
    lines
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_fields_without_nulls() {
        let line = human_line(&json!({
            "id": 7,
            "nama_opd": "Dinas Kesehatan",
            "singkatan": null,
            "is_active": true
        }))
        .unwrap();
        assert!(line.starts_with("[7] "));
        assert!(line.contains("nama_opd=Dinas Kesehatan"));
        assert!(line.contains("is_active=true"));
        assert!(!line.contains("singkatan"));
    }

    #[test]
    fn filtered_out_view_reports_no_matches() {
        assert_eq!(summary_lines(0, 5, false), vec!["No matching items", "Showing 0 of 5 items"]);
    }

    #[test]
    fn empty_collection_reports_no_data() {
        assert_eq!(summary_lines(0, 0, true), vec!["No data", "Showing 0 of 0 items"]);
    }

    #[test]
    fn non_empty_view_has_only_the_count() {
        assert_eq!(summary_lines(2, 5, false), vec!["Showing 2 of 5 items"]);
    }
}
