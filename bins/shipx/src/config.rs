//! Gateway and client configuration loading

use anyhow::{Context, Result};
use shipx_api_client::{ClientConfig, GatewayConfig, ShipxClient};
use std::path::Path;
use tracing::debug;

/// Load the gateway configuration
///
/// With a config file, the TOML document is read and `SHIPX_ACCESS_TOKEN`,
/// `SHIPX_ORGANIZATION_ID` and `SHIPX_ENVIRONMENT` still override it. Without
/// one, everything comes from `SHIPX_*` variables.
pub fn load_gateway(path: Option<&Path>) -> Result<GatewayConfig> {
    let gateway = match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading gateway config");
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            GatewayConfig::from_toml_str(&source)?.with_env_overrides()?
        }
        None => GatewayConfig::from_env()?,
    };

    gateway.validate()?;
    Ok(gateway)
}

/// Build a client from the gateway configuration and `SHIPX_*` client settings
pub fn build_client(path: Option<&Path>) -> Result<ShipxClient> {
    let gateway = load_gateway(path)?;
    let config = ClientConfig::from_env()?;
    Ok(ShipxClient::new(gateway, config)?)
}
