//! Response → state merge (preserve-on-absent)

use crate::schema::Schema;
use crate::state::Attributes;

use super::{declared, is_empty};

/// Merge an observed API response into prior state.
///
/// `observed` is keyed by schema attribute name and only holds the fields the
/// API actually returned (decoded from `Option` fields at the transport layer).
///
/// - absent or `null` → prior value kept
/// - empty string/list/map/block → prior value kept
/// - present bool/int/float (including `false` and `0`) → written
/// - sensitive attributes → never written; the prior value is re-asserted
/// - attributes outside the schema → ignored
pub fn reconcile(schema: &Schema, old: &Attributes, observed: &Attributes) -> Attributes {
    let mut next = old.clone();
    for attr in schema.attributes.iter().filter(|a| !a.sensitive) {
        let Some(value) = observed.get(attr.name) else {
            continue;
        };
        if is_empty(attr.ty, value) {
            continue;
        }
        next.insert(attr.name.to_string(), value.clone());
    }
    next
}

/// Lay declared configuration over prior state before an update is read back.
///
/// Declared settable values replace their stored counterpart (sensitive ones
/// included, since they are never read back); everything else is kept.
pub fn overlay_config(schema: &Schema, state: &Attributes, config: &Attributes) -> Attributes {
    let mut next = state.clone();
    for attr in schema.settable() {
        if let Some(value) = declared(config, attr.name, attr.ty) {
            next.insert(attr.name.to_string(), value.clone());
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Attribute;
    use serde_json::json;

    const COST: &[Attribute] = &[Attribute::float("default_cost_per_query")];

    const ATTRS: &[Attribute] = &[
        Attribute::string("alias"),
        Attribute::float("max_budget"),
        Attribute::int("rpm_limit"),
        Attribute::bool("blocked"),
        Attribute::string_list("models"),
        Attribute::string_map("metadata"),
        Attribute::string("api_key").sensitive(),
        Attribute::float("spend").computed(),
        Attribute::block("cost_info", COST),
    ];

    const SCHEMA: Schema = Schema {
        resource_type: "example",
        description: "",
        attributes: ATTRS,
    };

    fn attrs(value: serde_json::Value) -> Attributes {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_zero_value_preserves_existing() {
        let old = attrs(json!({"alias": "v", "models": ["a"], "metadata": {"k": "v"}}));
        let observed = attrs(json!({"alias": "", "models": [], "metadata": {}}));
        assert_eq!(reconcile(&SCHEMA, &old, &observed), old);
    }

    #[test]
    fn test_non_zero_value_overwrites() {
        let old = attrs(json!({"alias": "v"}));
        let observed = attrs(json!({"alias": "w"}));
        assert_eq!(reconcile(&SCHEMA, &old, &observed)["alias"], json!("w"));
    }

    #[test]
    fn test_absent_field_preserves_existing() {
        let old = attrs(json!({"alias": "v", "max_budget": 10.0}));
        let observed = attrs(json!({"rpm_limit": 5}));
        let next = reconcile(&SCHEMA, &old, &observed);
        assert_eq!(next["alias"], json!("v"));
        assert_eq!(next["max_budget"], json!(10.0));
        assert_eq!(next["rpm_limit"], json!(5));
    }

    #[test]
    fn test_boolean_false_always_written() {
        let old = attrs(json!({"blocked": true}));
        let observed = attrs(json!({"blocked": false}));
        assert_eq!(reconcile(&SCHEMA, &old, &observed)["blocked"], json!(false));
    }

    #[test]
    fn test_explicit_numeric_zero_written() {
        let old = attrs(json!({"max_budget": 50.0, "rpm_limit": 10}));
        let observed = attrs(json!({"max_budget": 0.0, "rpm_limit": 0}));
        let next = reconcile(&SCHEMA, &old, &observed);
        assert_eq!(next["max_budget"], json!(0.0));
        assert_eq!(next["rpm_limit"], json!(0));
    }

    #[test]
    fn test_null_treated_as_absent() {
        let old = attrs(json!({"max_budget": 50.0}));
        let observed = attrs(json!({"max_budget": null}));
        assert_eq!(reconcile(&SCHEMA, &old, &observed)["max_budget"], json!(50.0));
    }

    #[test]
    fn test_sensitive_never_read_back() {
        let old = attrs(json!({"api_key": "sk-local"}));
        let observed = attrs(json!({"api_key": "sk-server"}));
        assert_eq!(reconcile(&SCHEMA, &old, &observed)["api_key"], json!("sk-local"));

        let observed = attrs(json!({"api_key": "sk-server"}));
        assert!(reconcile(&SCHEMA, &Attributes::new(), &observed)
            .get("api_key")
            .is_none());
    }

    #[test]
    fn test_computed_written_and_unknown_ignored() {
        let observed = attrs(json!({"spend": 1.25, "not_in_schema": "x"}));
        let next = reconcile(&SCHEMA, &Attributes::new(), &observed);
        assert_eq!(next["spend"], json!(1.25));
        assert!(next.get("not_in_schema").is_none());
    }

    #[test]
    fn test_block_written_only_when_present() {
        let old = attrs(json!({"cost_info": [{"default_cost_per_query": 0.5}]}));
        let next = reconcile(&SCHEMA, &old, &attrs(json!({"cost_info": []})));
        assert_eq!(next, old);

        let observed = attrs(json!({"cost_info": [{"default_cost_per_query": 0.7}]}));
        let next = reconcile(&SCHEMA, &old, &observed);
        assert_eq!(next["cost_info"][0]["default_cost_per_query"], json!(0.7));
    }

    #[test]
    fn test_overlay_config_keeps_undeclared_and_replaces_declared() {
        let state = attrs(json!({"alias": "old", "spend": 3.0, "api_key": "sk-old"}));
        let config = attrs(json!({"alias": "new", "api_key": "sk-new", "models": []}));
        let next = overlay_config(&SCHEMA, &state, &config);
        assert_eq!(next["alias"], json!("new"));
        assert_eq!(next["api_key"], json!("sk-new"));
        assert_eq!(next["spend"], json!(3.0));
        assert!(next.get("models").is_none());
    }
}
