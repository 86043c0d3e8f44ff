//! Routes command - show the endpoints derived from the configuration

use super::{banner, print_json};
use crate::config::load_gateway;
use crate::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use shipx_api_client::routes::ApiRoutes;
use std::path::Path;

#[derive(Serialize)]
struct RoutesReport {
    environment: String,
    organization_id: String,
    base_url: String,
    organizations: String,
    shipments: String,
    labels: String,
    points: String,
}

pub fn run(config: Option<&Path>, format: OutputFormat) -> Result<()> {
    let gateway = load_gateway(config)?;
    let routes = ApiRoutes::new(gateway.environment, gateway.organization_id.as_str());

    let report = RoutesReport {
        environment: gateway.environment.to_string(),
        organization_id: gateway.organization_id.clone(),
        base_url: routes.base_url().to_string(),
        organizations: routes.organizations(),
        shipments: routes.shipments(),
        labels: routes.labels(),
        points: format!("{}/points/{{name}}", routes.base_url()),
    };

    if format == OutputFormat::Json {
        return print_json(&report);
    }

    banner("ShipX Routes");
    println!("  {} {}", "Environment:".dimmed(), report.environment.cyan());
    println!("  {} {}", "Organization:".dimmed(), report.organization_id);
    println!();
    println!("  {:<15} {}", "organizations", report.organizations);
    println!("  {:<15} {}", "shipments", report.shipments);
    println!("  {:<15} {}", "labels", report.labels);
    println!("  {:<15} {}", "points", report.points);
    println!();

    Ok(())
}
