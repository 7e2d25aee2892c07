//! Schema attributes → `/model/new` and `/model/update` request bodies

use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

use crate::reconcile::{merge_extension_params, per_million_to_per_token};
use crate::state::Attributes;

#[derive(Clone, Copy)]
enum Section {
    Params,
    Info,
}

/// Attributes copied verbatim: (attribute, section, wire key)
const PASSTHROUGH: &[(&str, Section, &str)] = &[
    ("model_api_key", Section::Params, "api_key"),
    ("model_api_base", Section::Params, "api_base"),
    ("api_version", Section::Params, "api_version"),
    ("aws_access_key_id", Section::Params, "aws_access_key_id"),
    ("aws_secret_access_key", Section::Params, "aws_secret_access_key"),
    ("aws_region_name", Section::Params, "aws_region_name"),
    ("vertex_project", Section::Params, "vertex_project"),
    ("vertex_location", Section::Params, "vertex_location"),
    ("vertex_credentials", Section::Params, "vertex_credentials"),
    ("litellm_credential_name", Section::Params, "litellm_credential_name"),
    ("tpm", Section::Params, "tpm"),
    ("rpm", Section::Params, "rpm"),
    ("reasoning_effort", Section::Params, "reasoning_effort"),
    (
        "merge_reasoning_content_in_choices",
        Section::Params,
        "merge_reasoning_content_in_choices",
    ),
    ("mode", Section::Info, "mode"),
    ("access_groups", Section::Info, "access_groups"),
    ("team_id", Section::Info, "team_id"),
];

/// Declared per-million costs and their per-token wire key
const COSTS: &[(&str, &str)] = &[
    ("input_cost_per_million_tokens", "input_cost_per_token"),
    ("output_cost_per_million_tokens", "output_cost_per_token"),
];

/// Build a deployment body.
///
/// `attrs` holds the attributes to send (everything on create, the changed
/// projection on update). `config` is the full declared configuration; it
/// supplies `model_name` and the `provider/base_model` pair every request
/// carries. `model_id` addresses an existing deployment.
pub fn deployment_body(attrs: &Attributes, config: &Attributes, model_id: Option<&str>) -> Value {
    let mut params = Attributes::new();
    let mut info = Attributes::new();

    if let (Some(provider), Some(base)) = (
        str_attr(config, "custom_llm_provider"),
        str_attr(config, "base_model"),
    ) {
        params.insert("model".to_string(), Value::String(qualified_model(provider, base)));
        params.insert(
            "custom_llm_provider".to_string(),
            Value::String(provider.to_string()),
        );
    }

    for (attribute, section, wire_key) in PASSTHROUGH {
        if let Some(value) = attrs.get(*attribute).filter(|v| !v.is_null()) {
            let target = match section {
                Section::Params => &mut params,
                Section::Info => &mut info,
            };
            target.insert(wire_key.to_string(), value.clone());
        }
    }

    for (attribute, wire_key) in COSTS {
        if let Some(cost) = attrs.get(*attribute).and_then(Value::as_f64) {
            params.insert(wire_key.to_string(), json!(per_million_to_per_token(cost)));
        }
    }

    if let Some(thinking) = thinking_params(attrs) {
        params.insert("thinking".to_string(), thinking);
    }

    // A declared extension param keeps overriding its structured key even
    // when only the structured value changed
    let mut extensions = extension_params(attrs);
    for (key, raw) in extension_params(config) {
        if params.contains_key(&key) {
            extensions.entry(key).or_insert(raw);
        }
    }
    merge_extension_params(&mut params, &extensions);

    if let Some(id) = model_id {
        info.insert("id".to_string(), Value::String(id.to_string()));
    }

    let mut body = Map::new();
    if let Some(name) = str_attr(config, "model_name") {
        body.insert("model_name".to_string(), Value::String(name.to_string()));
    }
    body.insert("litellm_params".to_string(), Value::Object(params));
    if !info.is_empty() {
        body.insert("model_info".to_string(), Value::Object(info));
    }
    Value::Object(body)
}

/// `provider/model` unless the model already carries the provider prefix
fn qualified_model(provider: &str, base: &str) -> String {
    match base.strip_prefix(provider) {
        Some(rest) if rest.starts_with('/') => base.to_string(),
        _ => format!("{}/{}", provider, base),
    }
}

fn str_attr<'a>(attrs: &'a Attributes, name: &str) -> Option<&'a str> {
    attrs
        .get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn extension_params(attrs: &Attributes) -> BTreeMap<String, String> {
    attrs
        .get("additional_litellm_params")
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect()
        })
        .unwrap_or_default()
}

fn thinking_params(attrs: &Attributes) -> Option<Value> {
    let block = attrs
        .get("thinking")
        .and_then(Value::as_array)
        .and_then(|items| items.first())
        .and_then(Value::as_object)?;
    let enabled = block.get("enabled").and_then(Value::as_bool)?;
    if !enabled {
        return Some(json!({"type": "disabled"}));
    }
    let mut thinking = json!({"type": "enabled"});
    if let Some(budget) = block.get("budget_tokens").and_then(Value::as_i64) {
        thinking["budget_tokens"] = json!(budget);
    }
    Some(thinking)
}
