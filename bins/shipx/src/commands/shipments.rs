//! Shipments command - list shipments or show one

use super::{banner, display_value, print_json};
use crate::config::build_client;
use crate::OutputFormat;
use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use std::path::Path;

pub async fn run(config: Option<&Path>, id: Option<u64>, format: OutputFormat) -> Result<()> {
    let client = build_client(config)?;

    let Some(id) = id else {
        let shipments = client.shipments().list().await?.unwrap_or_default();

        if format == OutputFormat::Json {
            return print_json(&shipments);
        }

        banner("ShipX Shipments");
        for shipment in &shipments.items {
            let id = shipment.get("id").map(display_value).unwrap_or_default();
            let status = shipment.get("status").map(display_value).unwrap_or_default();
            let tracking = shipment.get("tracking_number").map(display_value).unwrap_or_default();
            println!("  {:<12} {:<24} {}", id.cyan(), status, tracking.dimmed());
        }
        println!();
        println!("  {} {}", "Shown:".dimmed(), shipments.len());
        return Ok(());
    };

    let Some(shipment) = client.shipments().get(id).await? else {
        bail!("Shipment {id} returned no data");
    };

    if format == OutputFormat::Json {
        return print_json(&shipment);
    }

    banner(&format!("Shipment {id}"));
    for (key, value) in &shipment {
        if value.is_object() || value.is_array() {
            continue;
        }
        println!("  {:<24} {}", key.dimmed(), display_value(value));
    }
    println!();

    Ok(())
}
