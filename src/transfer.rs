//! File format for profile export and import.

use std::fmt;

use serde_json::Value;

use crate::error::DashboardError;
use crate::models::Profile;

pub const EXPORT_FILENAME: &str = "career-profiles.json";

pub fn export_json(profiles: &[Profile]) -> Result<String, DashboardError> {
    Ok(serde_json::to_string_pretty(profiles)?)
}

/// Accepts a list of profiles, a single profile object, or the backend's
/// `{ "data": [...] }` envelope.
pub fn parse_import(text: &str) -> Result<Vec<Value>, DashboardError> {
    let value: Value = serde_json::from_str(text)?;
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(map) if map.contains_key("name") => Ok(vec![Value::Object(map)]),
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(unexpected_shape()),
        },
        _ => Err(unexpected_shape()),
    }
}

fn unexpected_shape() -> DashboardError {
    DashboardError::Parse("expected a profile or a list of profiles".to_string())
}

/// Name of an entry that carries both required fields. Names made only of
/// dots cannot be addressed by URL and are not importable.
pub fn importable_name(entry: &Value) -> Option<&str> {
    let required = |key: &str| {
        entry
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    };
    required("career_field")?;
    required("name").filter(|name| !name.chars().all(|c| c == '.'))
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub updated: usize,
    pub skipped: usize,
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Imported {} profile", self.updated)?;
        if self.updated != 1 {
            f.write_str("s")?;
        }
        if self.skipped > 0 {
            write!(f, " ({} skipped)", self.skipped)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepted_shapes() {
        let list = parse_import(r#"[{"name": "a"}, {"name": "b"}]"#).unwrap();
        assert_eq!(list.len(), 2);

        let single = parse_import(r#"{"name": "a", "career_field": "Law"}"#).unwrap();
        assert_eq!(single.len(), 1);

        let envelope = parse_import(r#"{"success": true, "data": [{"name": "a"}]}"#).unwrap();
        assert_eq!(envelope.len(), 1);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_import("{not json"), Err(DashboardError::Parse(_))));
        assert!(matches!(parse_import("42"), Err(DashboardError::Parse(_))));
        assert!(matches!(parse_import(r#"{"data": 1}"#), Err(DashboardError::Parse(_))));
    }

    #[test]
    fn test_importable_requires_both_fields() {
        assert_eq!(importable_name(&json!({"name": "a", "career_field": "Law"})), Some("a"));
        assert_eq!(importable_name(&json!({"name": "a"})), None);
        assert_eq!(importable_name(&json!({"name": " ", "career_field": "Law"})), None);
        assert_eq!(importable_name(&json!("a")), None);
        assert_eq!(importable_name(&json!({"name": "..", "career_field": "Law"})), None);
    }

    #[test]
    fn test_summary_text() {
        let summary = ImportSummary { updated: 1, skipped: 0 };
        assert_eq!(summary.to_string(), "Imported 1 profile");
        let summary = ImportSummary { updated: 3, skipped: 2 };
        assert_eq!(summary.to_string(), "Imported 3 profiles (2 skipped)");
    }
}
