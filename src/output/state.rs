//! State and plan output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::{display_value, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::litellm::ResourceKind;
use crate::reconcile::Plan;
use crate::schema::Schema;
use crate::state::{Attributes, ResourceData};

/// Shown in place of write-only values
pub const SENSITIVE_PLACEHOLDER: &str = "(sensitive)";

/// Attributes with every sensitive value replaced by a placeholder
pub fn masked(schema: &Schema, attributes: &Attributes) -> Attributes {
    let mut shown = attributes.clone();
    for attr in schema.sensitive() {
        if let Some(value) = shown.get_mut(attr.name) {
            if !value.is_null() {
                *value = SENSITIVE_PLACEHOLDER.into();
            }
        }
    }
    shown
}

/// Print resource state; sensitive values never reach the terminal
pub fn output_state(data: &ResourceData, format: OutputFormat) {
    let schema = match data.resource_type.parse::<ResourceKind>() {
        Ok(kind) => kind.schema(),
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };
    let shown = ResourceData {
        attributes: masked(schema, &data.attributes),
        ..data.clone()
    };

    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            table.set_header(vec!["ATTRIBUTE", "VALUE"]);
            table.add_row(vec!["id", shown.id()]);
            for attr in schema.attributes {
                if let Some(value) = shown.get(attr.name) {
                    table.add_row(vec![attr.name.to_string(), display_value(value)]);
                }
            }
            if let Some(synced) = &shown.last_synced {
                table.add_row(vec!["last_synced", synced.as_str()]);
            }
            println!("{table}");
        }
        OutputFormat::Json => print_json(&shown),
        OutputFormat::Yaml => print_yaml(&shown),
    }
}

/// Print the planned action for a resource
pub fn output_plan(kind: ResourceKind, state: Option<&ResourceData>, plan: &Plan) {
    match state.filter(|s| s.is_present()) {
        Some(current) => println!("{} '{}': {}", kind, current.id(), plan),
        None => println!("{}: {}", kind, plan),
    }
}
