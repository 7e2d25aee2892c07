//! Request body shape for MCP servers
//!
//! Declared as a flat attribute map, sent with the cost block nested under
//! `mcp_info.mcp_server_cost_info`.

use serde_json::{json, Map, Value};

use crate::reconcile::coerce_param;
use crate::state::Attributes;

/// Move the `cost_info` block of a payload into its wire position
pub(crate) fn server_body(mut payload: Attributes) -> Attributes {
    let Some(block) = payload.remove("cost_info") else {
        return payload;
    };

    let Some(cost) = block
        .as_array()
        .and_then(|items| items.first())
        .and_then(Value::as_object)
    else {
        return payload;
    };

    let mut cost_info = Map::new();
    if let Some(default) = cost.get("default_cost_per_query").filter(|v| !v.is_null()) {
        cost_info.insert("default_cost_per_query".to_string(), default.clone());
    }
    if let Some(tools) = cost
        .get("tool_name_to_cost_per_query")
        .and_then(Value::as_object)
    {
        let coerced: Map<String, Value> = tools
            .iter()
            .map(|(tool, raw)| {
                let value = match raw {
                    Value::String(s) => coerce_param(s),
                    other => other.clone(),
                };
                (tool.clone(), value)
            })
            .collect();
        cost_info.insert(
            "tool_name_to_cost_per_query".to_string(),
            Value::Object(coerced),
        );
    }

    if !cost_info.is_empty() {
        payload.insert(
            "mcp_info".to_string(),
            json!({ "mcp_server_cost_info": cost_info }),
        );
    }
    payload
}
