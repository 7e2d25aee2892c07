//! Schema output formatter

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::{print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::litellm::ResourceKind;
use crate::schema::{AttrType, Attribute, Schema, Validation};

/// Flattened attribute declaration; nested block fields are dotted
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AttributeRow {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub mode: String,
    pub sensitive: bool,
    pub force_new: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Serialize)]
struct SerializableType {
    #[serde(rename = "type")]
    resource_type: &'static str,
    description: &'static str,
}

fn constraint(attr: &Attribute) -> Option<String> {
    match attr.validation {
        Validation::None => None,
        Validation::Pattern { regex, .. } => Some(format!("matches {}", regex)),
        Validation::OneOf(values) => Some(format!("one of {}", values.join("|"))),
    }
}

fn collect_rows(attributes: &[Attribute], prefix: &str, rows: &mut Vec<AttributeRow>) {
    for attr in attributes {
        let name = format!("{}{}", prefix, attr.name);
        rows.push(AttributeRow {
            name: name.clone(),
            ty: attr.ty.label().to_string(),
            mode: attr.mode.label().to_string(),
            sensitive: attr.sensitive,
            force_new: attr.force_new,
            constraint: constraint(attr),
            description: attr.description.to_string(),
        });
        if let AttrType::Block(fields) | AttrType::BlockList(fields) = attr.ty {
            collect_rows(fields, &format!("{}.", name), rows);
        }
    }
}

/// Attribute table of a schema, nested fields following their block
pub fn attribute_rows(schema: &Schema) -> Vec<AttributeRow> {
    let mut rows = Vec::new();
    collect_rows(schema.attributes, "", &mut rows);
    rows
}

/// List every resource type
pub fn output_resource_types(format: OutputFormat) {
    let types: Vec<SerializableType> = ResourceKind::ALL
        .iter()
        .map(|kind| SerializableType {
            resource_type: kind.type_name(),
            description: kind.schema().description,
        })
        .collect();

    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            table.set_header(vec!["TYPE", "DESCRIPTION"]);
            for t in &types {
                table.add_row(vec![t.resource_type, t.description]);
            }
            println!("{table}");
        }
        OutputFormat::Json => print_json(&types),
        OutputFormat::Yaml => print_yaml(&types),
    }
}

/// Print the attribute table of one resource type
pub fn output_schema(schema: &Schema, format: OutputFormat) {
    let rows = attribute_rows(schema);
    match format {
        OutputFormat::Table => {
            println!("{}: {}\n", schema.resource_type, schema.description);
            let mut table = Table::new();
            table.load_preset(NOTHING);
            table.set_header(vec![
                "ATTRIBUTE",
                "TYPE",
                "MODE",
                "SENSITIVE",
                "FORCE NEW",
                "CONSTRAINT",
                "DESCRIPTION",
            ]);
            for row in &rows {
                table.add_row(vec![
                    row.name.as_str(),
                    row.ty.as_str(),
                    row.mode.as_str(),
                    if row.sensitive { "yes" } else { "" },
                    if row.force_new { "yes" } else { "" },
                    row.constraint.as_deref().unwrap_or(""),
                    row.description.as_str(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Yaml => print_yaml(&rows),
    }
}
