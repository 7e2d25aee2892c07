//! Pre-network validation of declared configuration

use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use crate::error::{ProviderError, Result};
use crate::state::Attributes;

use super::{AttrType, Attribute, Mode, Schema, Validation};

/// Validate a configuration against a schema.
///
/// Stops at the first violation and names the attribute and the constraint.
/// `null` values count as unset.
pub fn validate(schema: &Schema, config: &Attributes) -> Result<()> {
    validate_attributes(schema.resource_type, schema.attributes, config, "")
}

fn validate_attributes(
    resource_type: &str,
    attributes: &[Attribute],
    config: &Attributes,
    prefix: &str,
) -> Result<()> {
    for (key, value) in config {
        let path = format!("{}{}", prefix, key);
        let attr = attributes
            .iter()
            .find(|a| a.name == key)
            .ok_or_else(|| invalid(&path, format!("unsupported attribute for {}", resource_type)))?;

        if value.is_null() {
            continue;
        }
        if attr.mode == Mode::Computed {
            return Err(invalid(&path, "is computed by the server and cannot be set"));
        }
        check_type(resource_type, attr, value, &path)?;
        check_constraint(attr, value, &path)?;
    }

    for attr in attributes.iter().filter(|a| a.mode == Mode::Required) {
        if config.get(attr.name).map_or(true, Value::is_null) {
            return Err(invalid(
                &format!("{}{}", prefix, attr.name),
                "is required",
            ));
        }
    }

    Ok(())
}

fn check_type(resource_type: &str, attr: &Attribute, value: &Value, path: &str) -> Result<()> {
    let ok = match attr.ty {
        AttrType::String => value.is_string(),
        AttrType::Int => value.is_i64() || value.is_u64(),
        AttrType::Float => value.is_number(),
        AttrType::Bool => value.is_boolean(),
        AttrType::StringList => value
            .as_array()
            .is_some_and(|items| items.iter().all(Value::is_string)),
        AttrType::StringMap => value
            .as_object()
            .is_some_and(|map| map.values().all(Value::is_string)),
        AttrType::Block(fields) => {
            let items = value.as_array().ok_or_else(|| {
                invalid(path, "expected a list holding at most one block")
            })?;
            if items.len() > 1 {
                return Err(invalid(path, "at most one block may be declared"));
            }
            for item in items {
                let nested = item
                    .as_object()
                    .ok_or_else(|| invalid(path, "block must be an object"))?;
                validate_attributes(resource_type, fields, nested, &format!("{}.0.", path))?;
            }
            true
        }
        AttrType::BlockList(fields) => {
            let items = value
                .as_array()
                .ok_or_else(|| invalid(path, "expected a list of blocks"))?;
            for (i, item) in items.iter().enumerate() {
                let nested = item
                    .as_object()
                    .ok_or_else(|| invalid(path, "block must be an object"))?;
                validate_attributes(resource_type, fields, nested, &format!("{}.{}.", path, i))?;
            }
            true
        }
    };

    if ok {
        Ok(())
    } else {
        Err(invalid(path, format!("expected {}", attr.ty.label())))
    }
}

fn check_constraint(attr: &Attribute, value: &Value, path: &str) -> Result<()> {
    let Some(s) = value.as_str() else {
        return Ok(());
    };

    match attr.validation {
        Validation::None => Ok(()),
        Validation::Pattern { regex, hint } => {
            let re = compiled(regex)
                .map_err(|e| ProviderError::Config(format!("bad pattern for {}: {}", path, e)))?;
            if re.is_match(s) {
                Ok(())
            } else {
                Err(invalid(
                    path,
                    format!("'{}' must be {} (pattern {})", s, hint, regex),
                ))
            }
        }
        Validation::OneOf(allowed) => {
            if allowed.contains(&s) {
                Ok(())
            } else {
                Err(invalid(
                    path,
                    format!("'{}' must be one of: {}", s, allowed.join(", ")),
                ))
            }
        }
    }
}

/// Compile a schema pattern once per process
fn compiled(pattern: &'static str) -> std::result::Result<Regex, regex::Error> {
    static CACHE: OnceLock<Mutex<HashMap<&'static str, Regex>>> = OnceLock::new();
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut cache = cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(re) = cache.get(pattern) {
        return Ok(re.clone());
    }
    let re = Regex::new(pattern)?;
    cache.insert(pattern, re.clone());
    Ok(re)
}

fn invalid(attribute: &str, message: impl Into<String>) -> ProviderError {
    ProviderError::Validation {
        attribute: attribute.to_string(),
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const THINKING: &[Attribute] = &[
        Attribute::bool("enabled").required(),
        Attribute::int("budget_tokens"),
    ];

    const MEMBER: &[Attribute] = &[
        Attribute::string("user_id"),
        Attribute::string("role").required().one_of(&["admin", "user"]),
    ];

    const ATTRS: &[Attribute] = &[
        Attribute::string("alias").required(),
        Attribute::string("role").one_of(&["admin", "user"]),
        Attribute::string("budget_duration").duration(),
        Attribute::float("max_budget"),
        Attribute::int("rpm_limit"),
        Attribute::bool("blocked"),
        Attribute::string_list("models"),
        Attribute::string_map("metadata"),
        Attribute::float("spend").computed(),
        Attribute::block("thinking", THINKING),
        Attribute::block_list("members", MEMBER),
    ];

    const SCHEMA: Schema = Schema {
        resource_type: "example",
        description: "",
        attributes: ATTRS,
    };

    fn config(value: serde_json::Value) -> Attributes {
        value.as_object().cloned().unwrap()
    }

    fn violated_attribute(result: Result<()>) -> String {
        match result {
            Err(ProviderError::Validation { attribute, .. }) => attribute,
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        let cfg = config(json!({
            "alias": "team-a",
            "role": "admin",
            "budget_duration": "30d",
            "max_budget": 10,
            "rpm_limit": 100,
            "blocked": false,
            "models": ["gpt-4o"],
            "metadata": {"env": "prod"},
            "thinking": [{"enabled": true, "budget_tokens": 1024}]
        }));
        assert!(validate(&SCHEMA, &cfg).is_ok());
    }

    #[test]
    fn test_missing_required_attribute() {
        let cfg = config(json!({"role": "admin"}));
        assert_eq!(violated_attribute(validate(&SCHEMA, &cfg)), "alias");
    }

    #[test]
    fn test_null_counts_as_unset() {
        let cfg = config(json!({"alias": null}));
        assert_eq!(violated_attribute(validate(&SCHEMA, &cfg)), "alias");

        let cfg = config(json!({"alias": "a", "role": null}));
        assert!(validate(&SCHEMA, &cfg).is_ok());
    }

    #[test]
    fn test_duration_pattern_rejects_bad_value() {
        let cfg = config(json!({"alias": "a", "budget_duration": "30 days"}));
        let err = validate(&SCHEMA, &cfg).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("budget_duration"));
        assert!(msg.contains(r"^\d+[smhd]$"));
    }

    #[test]
    fn test_duration_pattern_accepts_all_units() {
        for d in ["30s", "15m", "24h", "7d"] {
            let cfg = config(json!({"alias": "a", "budget_duration": d}));
            assert!(validate(&SCHEMA, &cfg).is_ok(), "{} should be accepted", d);
        }
    }

    #[test]
    fn test_enum_fails_closed() {
        let cfg = config(json!({"alias": "a", "role": "owner"}));
        let err = validate(&SCHEMA, &cfg).unwrap_err();
        assert!(err.to_string().contains("admin, user"));
    }

    #[test]
    fn test_computed_attribute_cannot_be_set() {
        let cfg = config(json!({"alias": "a", "spend": 1.5}));
        assert_eq!(violated_attribute(validate(&SCHEMA, &cfg)), "spend");
    }

    #[test]
    fn test_unknown_attribute_rejected() {
        let cfg = config(json!({"alias": "a", "colour": "blue"}));
        let err = validate(&SCHEMA, &cfg).unwrap_err();
        assert!(err.to_string().contains("unsupported attribute for example"));
    }

    #[test]
    fn test_type_mismatches() {
        let cases = [
            json!({"alias": 1}),
            json!({"alias": "a", "rpm_limit": 1.5}),
            json!({"alias": "a", "blocked": "true"}),
            json!({"alias": "a", "models": ["a", 1]}),
            json!({"alias": "a", "metadata": {"k": 1}}),
        ];
        for case in cases {
            assert!(validate(&SCHEMA, &config(case.clone())).is_err(), "{}", case);
        }
    }

    #[test]
    fn test_int_accepted_for_float() {
        let cfg = config(json!({"alias": "a", "max_budget": 5}));
        assert!(validate(&SCHEMA, &cfg).is_ok());
    }

    #[test]
    fn test_block_rejects_more_than_one_element() {
        let cfg = config(json!({
            "alias": "a",
            "thinking": [{"enabled": true}, {"enabled": false}]
        }));
        assert_eq!(violated_attribute(validate(&SCHEMA, &cfg)), "thinking");
    }

    #[test]
    fn test_block_nested_required_path() {
        let cfg = config(json!({"alias": "a", "thinking": [{"budget_tokens": 10}]}));
        assert_eq!(
            violated_attribute(validate(&SCHEMA, &cfg)),
            "thinking.0.enabled"
        );
    }

    #[test]
    fn test_block_list_validates_each_element() {
        let cfg = config(json!({
            "alias": "a",
            "members": [
                {"user_id": "u1", "role": "admin"},
                {"user_id": "u2", "role": "owner"}
            ]
        }));
        assert_eq!(violated_attribute(validate(&SCHEMA, &cfg)), "members.1.role");
    }

    #[test]
    fn test_every_schema_pattern_compiles() {
        for kind in crate::litellm::ResourceKind::ALL {
            for attr in kind.schema().attributes {
                if let Validation::Pattern { regex, .. } = attr.validation {
                    assert!(compiled(regex).is_ok(), "{}.{} pattern", kind, attr.name);
                }
            }
        }
    }

    #[test]
    fn test_pattern_compiled_once() {
        let first = compiled(crate::schema::DURATION_PATTERN).unwrap();
        let second = compiled(crate::schema::DURATION_PATTERN).unwrap();
        assert_eq!(first.as_str(), second.as_str());
        assert!(compiled("(unclosed").is_err());
    }
}
