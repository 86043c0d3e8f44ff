//! CLI command implementations

pub mod create;
pub mod labels;
pub mod organizations;
pub mod point;
pub mod routes;
pub mod shipments;

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a section banner
pub fn banner(title: &str) {
    println!();
    println!("{}", "━".repeat(50).dimmed());
    println!("  {}", title.bold());
    println!("{}", "━".repeat(50).dimmed());
    println!();
}

/// Render a JSON scalar for text output
pub fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}
