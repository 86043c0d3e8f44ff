//! Main API client implementation

use crate::config::{ClientConfig, GatewayConfig};
use crate::endpoints::{LabelsApi, OrganizationsApi, PointsApi, ShipmentsApi};
use crate::error::{ApiError, ApiResult};
use crate::routes::ApiRoutes;
use crate::transport::{HttpRequest, HttpTransport, Transport};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "x-request-id";

/// ShipX API client
///
/// Built once from a validated [`GatewayConfig`] and [`ClientConfig`]; immutable
/// afterwards and cheap to clone. Operations are grouped by endpoint:
///
/// - [`organizations`](Self::organizations): organizations visible to the token
/// - [`shipments`](Self::shipments): create, list and fetch shipments
/// - [`labels`](Self::labels): PDF labels for created shipments
/// - [`points`](Self::points): pickup point lookup with retry
pub struct ShipxClient<T: Transport = HttpTransport> {
    transport: Arc<T>,
    gateway: Arc<GatewayConfig>,
    config: Arc<ClientConfig>,
    routes: Arc<ApiRoutes>,
    authorization: HeaderValue,
}

impl<T: Transport> Clone for ShipxClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            gateway: Arc::clone(&self.gateway),
            config: Arc::clone(&self.config),
            routes: Arc::clone(&self.routes),
            authorization: self.authorization.clone(),
        }
    }
}

impl ShipxClient<HttpTransport> {
    /// Create a client sending requests over HTTP
    pub fn new(gateway: GatewayConfig, config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(gateway, config, transport)
    }

    /// Create a client with gateway and client configuration from environment
    pub fn from_env() -> ApiResult<Self> {
        Self::new(GatewayConfig::from_env()?, ClientConfig::from_env()?)
    }
}

impl<T: Transport> ShipxClient<T> {
    /// Create a client on top of a custom transport
    pub fn with_transport(gateway: GatewayConfig, config: ClientConfig, transport: T) -> ApiResult<Self> {
        gateway.validate()?;
        config.validate()?;

        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", gateway.access_token))
            .map_err(|_| ApiError::config("access_token contains characters not allowed in a header"))?;
        authorization.set_sensitive(true);

        let routes = ApiRoutes::new(gateway.environment, gateway.organization_id.clone());

        Ok(Self {
            transport: Arc::new(transport),
            gateway: Arc::new(gateway),
            config: Arc::new(config),
            routes: Arc::new(routes),
            authorization,
        })
    }

    /// Gateway configuration the client was built with
    #[must_use]
    pub fn gateway(&self) -> &GatewayConfig {
        &self.gateway
    }

    /// Client configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Endpoint routes for the configured environment
    #[must_use]
    pub fn routes(&self) -> &ApiRoutes {
        &self.routes
    }

    /// Underlying transport
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access organization endpoints
    #[must_use]
    pub fn organizations(&self) -> OrganizationsApi<T> {
        OrganizationsApi::new(self.clone())
    }

    /// Access shipment endpoints
    #[must_use]
    pub fn shipments(&self) -> ShipmentsApi<T> {
        ShipmentsApi::new(self.clone())
    }

    /// Access label endpoints
    #[must_use]
    pub fn labels(&self) -> LabelsApi<T> {
        LabelsApi::new(self.clone())
    }

    /// Access pickup point endpoints
    #[must_use]
    pub fn points(&self) -> PointsApi<T> {
        PointsApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP methods
    // -------------------------------------------------------------------------

    /// Perform a GET request and decode the JSON response
    pub async fn get<R: DeserializeOwned>(&self, url: &str) -> ApiResult<R> {
        let body = self.execute(Method::GET, url, None).await?;
        decode(&body)
    }

    /// Perform a POST request and decode the JSON response
    pub async fn post<R: DeserializeOwned, B: Serialize + Sync>(&self, url: &str, body: &B) -> ApiResult<R> {
        let body = serde_json::to_vec(body)?;
        let response = self.execute(Method::POST, url, Some(body)).await?;
        decode(&response)
    }

    /// Perform a POST request and return the raw response body
    pub async fn post_raw<B: Serialize + Sync>(&self, url: &str, body: &B) -> ApiResult<Vec<u8>> {
        let body = serde_json::to_vec(body)?;
        self.execute(Method::POST, url, Some(body)).await
    }

    /// Headers attached to every request
    fn headers(&self, request_id: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, self.authorization.clone());
        if let Ok(value) = HeaderValue::from_str(request_id) {
            headers.insert(HeaderName::from_static(X_REQUEST_ID), value);
        }
        headers
    }

    /// Send a single request; only 200 and 201 count as success
    async fn execute(&self, method: Method, url: &str, body: Option<Vec<u8>>) -> ApiResult<Vec<u8>> {
        let request_id = Uuid::new_v4().to_string();
        let request = HttpRequest {
            method: method.clone(),
            url: url.to_string(),
            headers: self.headers(&request_id),
            body,
        };

        let start = Instant::now();
        let response = self.transport.send(request).await.inspect_err(|e| {
            warn!(
                request_id = %request_id,
                method = %method,
                url = %url,
                error = %e,
                "Request failed"
            );
        })?;
        let elapsed = start.elapsed();

        debug!(
            request_id = %request_id,
            method = %method,
            url = %url,
            status = response.status,
            elapsed_ms = elapsed.as_millis(),
            "Carrier responded"
        );

        if matches!(response.status, 200 | 201) {
            Ok(response.body)
        } else {
            Err(ApiError::invalid_response(response.status, response.text()))
        }
    }
}

fn decode<R: DeserializeOwned>(body: &[u8]) -> ApiResult<R> {
    serde_json::from_slice(body).map_err(ApiError::Json)
}
