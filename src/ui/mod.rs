//! UI utilities for terminal output
//!
//! Progress spinners for API calls and the destroy confirmation prompt.

mod confirm;
mod spinner;

pub use confirm::confirm_action;
pub use spinner::{create_spinner, finish_spinner};
