//! Output formatting module
//!
//! Handles table, JSON and YAML output for schemas, plans and state

mod common;
mod schema;
mod state;

pub use common::{display_value, print_json, print_yaml};
pub use schema::{attribute_rows, output_resource_types, output_schema, AttributeRow};
pub use state::{masked, output_plan, output_state, SENSITIVE_PLACEHOLDER};
