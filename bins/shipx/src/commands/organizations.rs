//! Organizations command

use super::{banner, display_value, print_json};
use crate::config::build_client;
use crate::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

pub async fn run(config: Option<&Path>, format: OutputFormat) -> Result<()> {
    let client = build_client(config)?;
    let organizations = client.organizations().list().await?;

    if format == OutputFormat::Json {
        return print_json(&organizations);
    }

    banner("ShipX Organizations");

    if organizations.is_empty() {
        println!("  {}", "No organizations visible to this token".yellow());
        return Ok(());
    }

    for organization in &organizations.items {
        let id = organization.get("id").map(display_value).unwrap_or_default();
        let name = organization.get("name").map(display_value).unwrap_or_default();
        println!("  {:<10} {}", id.cyan(), name);
    }

    println!();
    println!("  {} {}", "Total:".dimmed(), organizations.count.unwrap_or(organizations.len() as u64));

    Ok(())
}
