//! Endpoint URLs of the ShipX API
//!
//! Callers never assemble URLs themselves: every route is derived from the
//! gateway environment and organization.

use crate::config::Environment;
use crate::error::{ApiError, ApiResult};
use reqwest::Url;

/// Sandbox API host
pub const SANDBOX_API_ENDPOINT: &str = "https://sandbox-api-shipx-pl.easypack24.net";

/// Production API host
pub const PRODUCTION_API_ENDPOINT: &str = "https://api-shipx-pl.easypack24.net";

/// API version segment appended to the host
pub const API_VERSION: &str = "v1";

/// Route builder bound to one environment and organization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRoutes {
    base_url: String,
    organization_id: String,
}

impl ApiRoutes {
    /// Create routes for an environment and organization
    pub fn new(environment: Environment, organization_id: impl Into<String>) -> Self {
        let host = match environment {
            Environment::Sandbox => SANDBOX_API_ENDPOINT,
            Environment::Production => PRODUCTION_API_ENDPOINT,
        };

        Self {
            base_url: format!("{host}/{API_VERSION}"),
            organization_id: organization_id.into(),
        }
    }

    /// Versioned API base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /organizations`
    #[must_use]
    pub fn organizations(&self) -> String {
        format!("{}/organizations", self.base_url)
    }

    /// `GET|POST /organizations/{org}/shipments`
    #[must_use]
    pub fn shipments(&self) -> String {
        format!("{}/organizations/{}/shipments", self.base_url, self.organization_id)
    }

    /// `POST /organizations/{org}/shipments/labels`
    #[must_use]
    pub fn labels(&self) -> String {
        format!("{}/labels", self.shipments())
    }

    /// `GET /shipments/{id}`
    #[must_use]
    pub fn shipment(&self, id: u64) -> String {
        format!("{}/shipments/{id}", self.base_url)
    }

    /// `GET /points/{name}`, with the name encoded as a single path segment
    pub fn point(&self, name: &str) -> ApiResult<String> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", self.base_url)))?;

        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(self.base_url.clone()))?
            .push("points")
            .push(name);

        Ok(url.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_per_environment() {
        let sandbox = ApiRoutes::new(Environment::Sandbox, "12");
        let production = ApiRoutes::new(Environment::Production, "12");

        assert_eq!(
            sandbox.base_url(),
            "https://sandbox-api-shipx-pl.easypack24.net/v1"
        );
        assert_eq!(production.base_url(), "https://api-shipx-pl.easypack24.net/v1");
        assert!(sandbox.base_url().ends_with("/v1"));
        assert!(production.base_url().ends_with("/v1"));
    }

    #[test]
    fn test_organization_scoped_routes() {
        let routes = ApiRoutes::new(Environment::Production, "4567");

        assert_eq!(
            routes.organizations(),
            "https://api-shipx-pl.easypack24.net/v1/organizations"
        );
        assert_eq!(
            routes.shipments(),
            "https://api-shipx-pl.easypack24.net/v1/organizations/4567/shipments"
        );
        assert_eq!(
            routes.labels(),
            "https://api-shipx-pl.easypack24.net/v1/organizations/4567/shipments/labels"
        );
        assert_eq!(
            routes.shipment(99),
            "https://api-shipx-pl.easypack24.net/v1/shipments/99"
        );
    }

    #[test]
    fn test_point_route() {
        let routes = ApiRoutes::new(Environment::Sandbox, "1");

        assert_eq!(
            routes.point("KRA01M").unwrap(),
            "https://sandbox-api-shipx-pl.easypack24.net/v1/points/KRA01M"
        );
    }

    #[test]
    fn test_point_route_encodes_name() {
        let routes = ApiRoutes::new(Environment::Sandbox, "1");
        let url = routes.point("POP/WAW 1").unwrap();

        assert!(url.ends_with("/points/POP%2FWAW%201"));
    }
}
