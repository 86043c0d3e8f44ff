//! Point command - pickup point lookup

use super::{banner, display_value, print_json};
use crate::config::build_client;
use crate::OutputFormat;
use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use shipx_api_client::endpoints::PointLookup;
use std::path::Path;

pub async fn run(config: Option<&Path>, name: &str, strict: bool, format: OutputFormat) -> Result<()> {
    let client = build_client(config)?;

    let point = if strict {
        match client.points().lookup(name).await {
            PointLookup::Found(point) => point,
            PointLookup::NotFound { attempts } => {
                bail!("Point {name} does not exist (after {attempts} attempts)")
            }
            PointLookup::Unavailable { attempts, last_error } => {
                bail!("Point service unavailable after {attempts} attempts: {last_error}")
            }
        }
    } else {
        match client.points().find_by_name(name).await {
            Some(point) => point,
            None => bail!("Point {name} not found"),
        }
    };

    if format == OutputFormat::Json {
        return print_json(&point);
    }

    banner(&format!("Point {}", point.name));
    let status = point.status.as_deref().unwrap_or("unknown");
    println!("  {:<24} {}", "status".dimmed(), status.green());
    for (key, value) in &point.details {
        if value.is_object() || value.is_array() {
            continue;
        }
        println!("  {:<24} {}", key.dimmed(), display_value(value));
    }
    println!();

    Ok(())
}
