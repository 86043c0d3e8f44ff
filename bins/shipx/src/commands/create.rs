//! Create command - create a shipment from a shop shipment export

use super::{banner, display_value, print_json};
use crate::config::build_client;
use crate::OutputFormat;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use shipx_core::model::{Shipment, ShippingExport};
use std::path::Path;

pub async fn run(
    config: Option<&Path>,
    shipment_path: &Path,
    template: Option<String>,
    dry_run: bool,
    format: OutputFormat,
) -> Result<()> {
    let source = std::fs::read_to_string(shipment_path)
        .with_context(|| format!("Failed to read shipment file {}", shipment_path.display()))?;
    let shipment: Shipment = serde_json::from_str(&source)
        .with_context(|| format!("Invalid shipment file {}", shipment_path.display()))?;

    let export = template.map(ShippingExport::with_parcel_template).unwrap_or_default();

    let client = build_client(config)?;

    if dry_run {
        let request = client.shipments().build_request(&shipment, &export)?;
        return print_json(&request);
    }

    let created = client.shipments().create(&shipment, &export).await?;

    if format == OutputFormat::Json {
        return print_json(&created);
    }

    banner("Shipment Created");
    for key in ["id", "status", "tracking_number", "reference"] {
        if let Some(value) = created.get(key) {
            println!("  {:<18} {}", key.dimmed(), display_value(value));
        }
    }
    println!();
    println!("{} Order {} shipped", "✓".green(), shipment.order.number.as_deref().unwrap_or("-").cyan());

    Ok(())
}
