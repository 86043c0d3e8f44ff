//! Labels command - download PDF labels

use super::print_json;
use crate::config::build_client;
use crate::OutputFormat;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::Path;

pub async fn run(config: Option<&Path>, ids: &[u64], output: &Path, format: OutputFormat) -> Result<()> {
    let client = build_client(config)?;
    let pdf = client.labels().fetch(ids).await?;

    std::fs::write(output, &pdf).with_context(|| format!("Failed to write {}", output.display()))?;

    if format == OutputFormat::Json {
        return print_json(&json!({
            "shipment_ids": ids,
            "output": output.display().to_string(),
            "bytes": pdf.len(),
        }));
    }

    println!(
        "{} Wrote {} label(s) to {} ({} bytes)",
        "✓".green(),
        ids.len(),
        output.display().to_string().cyan(),
        pdf.len()
    );

    Ok(())
}
