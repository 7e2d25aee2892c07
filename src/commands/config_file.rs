//! Resource configuration files

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::state::Attributes;

/// Read a resource configuration from a JSON or YAML file.
///
/// The document must be a mapping of attribute names to values.
pub fn load_config(path: &Path) -> Result<Attributes> {
    let content = fs::read_to_string(path).map_err(|e| {
        ProviderError::Config(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let document: Value = if is_json {
        serde_json::from_str(&content)?
    } else {
        serde_yml::from_str(&content)?
    };

    match document {
        Value::Object(attributes) => Ok(attributes),
        Value::Null => Ok(Attributes::new()),
        other => Err(ProviderError::Config(format!(
            "{} must contain a mapping of attributes, found {}",
            path.display(),
            kind_of(&other)
        ))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_yaml() {
        let file = write_temp(
            ".yaml",
            "team_alias: platform\nmodels:\n  - gpt-4o\nmax_budget: 100\nblocked: false\n",
        );
        let config = load_config(file.path()).unwrap();
        assert_eq!(config["team_alias"], json!("platform"));
        assert_eq!(config["models"], json!(["gpt-4o"]));
        assert_eq!(config["max_budget"], json!(100));
        assert_eq!(config["blocked"], json!(false));
    }

    #[test]
    fn test_load_json() {
        let file = write_temp(".json", r#"{"credential_name": "azure", "credential_values": {"api_key": "x"}}"#);
        let config = load_config(file.path()).unwrap();
        assert_eq!(config["credential_name"], json!("azure"));
    }

    #[test]
    fn test_rejects_non_mapping() {
        let file = write_temp(".yaml", "- a\n- b\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("found a list"));
    }

    #[test]
    fn test_invalid_json_is_error() {
        let file = write_temp(".json", "{not json");
        assert!(matches!(load_config(file.path()), Err(ProviderError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/team.yaml")).unwrap_err();
        assert!(matches!(err, ProviderError::Config(_)));
    }
}
