//! ShipX CLI - carrier operations from the terminal
//!
//! Inspect organizations, shipments and pickup points, download labels and
//! create shipments from exported shop data.

use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod config;

use commands::{create, labels, organizations, point, routes, shipments};

/// Command-line access to the ShipX parcel carrier API
#[derive(Parser)]
#[command(name = "shipx")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Gateway configuration file (TOML); falls back to SHIPX_* variables
    #[arg(short, long, global = true, env = "SHIPX_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the endpoint URLs derived from the gateway configuration
    Routes,

    /// List organizations visible to the access token
    Organizations,

    /// List shipments, or show one shipment
    Shipments {
        /// Shipment ID to fetch
        #[arg(long)]
        id: Option<u64>,
    },

    /// Look up a pickup point by name
    Point {
        /// Point name, e.g. KRA01M
        name: String,

        /// Report why the lookup failed instead of just "not found"
        #[arg(long)]
        strict: bool,
    },

    /// Download PDF labels for shipments
    Labels {
        /// Carrier shipment IDs
        #[arg(required = true)]
        ids: Vec<u64>,

        /// File to write the PDF to
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Create a shipment from a shop shipment export (JSON)
    Create {
        /// Path to the shipment JSON file
        #[arg(short, long)]
        shipment: PathBuf,

        /// Parcel template overriding the configured default
        #[arg(short, long)]
        template: Option<String>,

        /// Print the payload instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("shipx=debug,shipx_api_client=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::Routes => routes::run(config, cli.format),
        Commands::Organizations => organizations::run(config, cli.format).await,
        Commands::Shipments { id } => shipments::run(config, id, cli.format).await,
        Commands::Point { name, strict } => point::run(config, &name, strict, cli.format).await,
        Commands::Labels { ids, output } => labels::run(config, &ids, &output, cli.format).await,
        Commands::Create { shipment, template, dry_run } => {
            create::run(config, &shipment, template, dry_run, cli.format).await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
