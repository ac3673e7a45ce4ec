use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use crate::case::{convert_value, Case};

/// Outcome of converting one input. Exactly one of `output` / `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    pub input: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchEntry {
    pub fn is_ok(&self) -> bool {
        self.output.is_some()
    }
}

/// Convert every value, keeping going past failures.
pub fn convert_all(case: Case, values: &[Value]) -> Vec<BatchEntry> {
    values
        .iter()
        .map(|value| match convert_value(case, value) {
            Ok(output) => BatchEntry {
                input: value.clone(),
                output: Some(output),
                error: None,
            },
            Err(e) => {
                tracing::warn!("Rejected {} for {} conversion: {}", value, case, e);
                BatchEntry {
                    input: value.clone(),
                    output: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect()
}

pub fn convert_strs<S: AsRef<str>>(case: Case, inputs: &[S]) -> Vec<BatchEntry> {
    let values: Vec<Value> = inputs
        .iter()
        .map(|s| Value::String(s.as_ref().to_string()))
        .collect();
    convert_all(case, &values)
}

/// Read a JSON array of arbitrary values from `path` and convert each one.
pub fn convert_file(case: Case, path: &Path) -> Result<Vec<BatchEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch input from {}", path.display()))?;
    let values: Vec<Value> = serde_json::from_str(&content)
        .with_context(|| format!("Batch input {} is not a JSON array", path.display()))?;
    tracing::info!("Converting {} value(s) from {} to {}", values.len(), path.display(), case);
    Ok(convert_all(case, &values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_file(contents: &str) -> PathBuf {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = temp_dir().join(format!("caseconv_test_{}_{}.json", std::process::id(), id));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_convert_all_keeps_going_after_errors() {
        let values = vec![json!("user_id"), Value::Null, json!(42), json!("___"), json!("first name")];
        let entries = convert_all(Case::Dot, &values);
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].output.as_deref(), Some("user.id"));
        assert!(!entries[1].is_ok());
        assert_eq!(
            entries[2].error.as_deref(),
            Some("invalid input: input must be a string, found number")
        );
        assert_eq!(entries[3].error.as_deref(), Some("input contains no valid words"));
        assert_eq!(entries[4].output.as_deref(), Some("first.name"));
    }

    #[test]
    fn test_entry_serialization_skips_missing_side() {
        let entries = convert_strs(Case::Camel, &["hello world", "foo@bar"]);
        let json = serde_json::to_value(&entries).unwrap();
        assert_eq!(json[0], json!({ "input": "hello world", "output": "helloWorld" }));
        assert!(json[1].get("output").is_none());
        assert!(json[1]["error"].as_str().unwrap().contains("'@'"));
    }

    #[test]
    fn test_convert_file() {
        let path = temp_file(r#"["SCREEN_NAME", "mobile-number", null]"#);
        let entries = convert_file(Case::Kebab, &path).unwrap();
        assert_eq!(entries[0].output.as_deref(), Some("screen-name"));
        assert_eq!(entries[1].output.as_deref(), Some("mobile-number"));
        assert_eq!(
            entries[2].error.as_deref(),
            Some("invalid input: input cannot be null or undefined")
        );
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_convert_file_rejects_non_array() {
        let path = temp_file(r#"{"not": "an array"}"#);
        let err = convert_file(Case::Dot, &path).unwrap_err();
        assert!(err.to_string().contains("is not a JSON array"));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_convert_file_missing() {
        let path = temp_dir().join("caseconv_test_does_not_exist.json");
        assert!(convert_file(Case::Dot, &path).is_err());
    }
}
