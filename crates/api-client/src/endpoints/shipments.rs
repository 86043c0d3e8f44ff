//! Shipment endpoints
//!
//! - Create a shipment from a shop order
//! - List shipments of the organization
//! - Get a single shipment by ID

use super::{ApiObject, Collection};
use crate::client::ShipxClient;
use crate::error::ApiResult;
use crate::payload::ShipmentRequest;
use crate::transport::{HttpTransport, Transport};
use shipx_core::model::{Shipment, ShippingExport};
use tracing::{debug, instrument};

/// Shipments API interface
pub struct ShipmentsApi<T: Transport = HttpTransport> {
    client: ShipxClient<T>,
}

impl<T: Transport> ShipmentsApi<T> {
    /// Create a new shipments API interface
    pub(crate) fn new(client: ShipxClient<T>) -> Self {
        Self { client }
    }

    /// Create a shipment for a shop shipment
    ///
    /// POST /organizations/{org}/shipments
    ///
    /// The payload is validated before anything is sent; a street without a
    /// house number fails with a validation error and no request is made.
    #[instrument(skip_all, fields(shipment_id = shipment.id))]
    pub async fn create(&self, shipment: &Shipment, export: &ShippingExport) -> ApiResult<ApiObject> {
        let request = self.build_request(shipment, export)?;
        debug!(
            service = %request.service,
            cod = request.cod.is_some(),
            insured = request.insurance.is_some(),
            "Creating shipment"
        );
        self.client.post(&self.client.routes().shipments(), &request).await
    }

    /// Build the create-shipment payload without sending it
    pub fn build_request(&self, shipment: &Shipment, export: &ShippingExport) -> ApiResult<ShipmentRequest> {
        ShipmentRequest::build(shipment, export, self.client.gateway(), self.client.config())
    }

    /// List shipments of the organization
    ///
    /// GET /organizations/{org}/shipments
    #[instrument(skip(self))]
    pub async fn list(&self) -> ApiResult<Option<Collection>> {
        self.client.get(&self.client.routes().shipments()).await
    }

    /// Get a single shipment by ID
    ///
    /// GET /shipments/{id}
    #[instrument(skip(self))]
    pub async fn get(&self, id: u64) -> ApiResult<Option<ApiObject>> {
        self.client.get(&self.client.routes().shipment(id)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::ShipxClient;
    use crate::config::ClientConfig;
    use crate::error::ApiError;
    use crate::payload::fixtures::{gateway, shipment};
    use crate::transport::testing::MockTransport;
    use reqwest::Method;
    use serde_json::Value;
    use shipx_core::model::ShippingExport;

    fn client(transport: MockTransport) -> ShipxClient<MockTransport> {
        ShipxClient::with_transport(gateway(), ClientConfig::default(), transport).unwrap()
    }

    #[tokio::test]
    async fn test_create_shipment() {
        let client = client(MockTransport::new().respond(201, r#"{"id": 321, "status": "created"}"#));

        let created = client
            .shipments()
            .create(&shipment(), &ShippingExport::default())
            .await
            .unwrap();
        assert_eq!(created["id"], 321);

        let requests = client.transport().requests();
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(
            requests[0].url,
            "https://sandbox-api-shipx-pl.easypack24.net/v1/organizations/4567/shipments"
        );

        let body: Value = serde_json::from_slice(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["parcels"].as_array().unwrap().len(), 1);
        assert_eq!(body["reference"], "Order: 000123");
        assert_eq!(body["receiver"]["address"]["building_number"], "15A");
    }

    #[tokio::test]
    async fn test_create_shipment_rejected() {
        let client = client(MockTransport::new().respond(400, r#"{"error":"validation_failed"}"#));

        let error = client
            .shipments()
            .create(&shipment(), &ShippingExport::default())
            .await
            .unwrap_err();
        assert!(error.is_invalid_response());
    }

    #[tokio::test]
    async fn test_create_shipment_invalid_street_sends_nothing() {
        let client = client(MockTransport::new());
        let mut shipment = shipment();
        shipment.order.shipping_address.street = String::new();

        let error = client
            .shipments()
            .create(&shipment, &ShippingExport::default())
            .await
            .unwrap_err();

        assert!(matches!(error, ApiError::Validation(_)));
        assert_eq!(client.transport().request_count(), 0);
    }

    #[tokio::test]
    async fn test_list_shipments() {
        let client = client(MockTransport::new().respond(200, r#"{"count": 0, "items": []}"#));

        let shipments = client.shipments().list().await.unwrap().unwrap();
        assert!(shipments.is_empty());
    }

    #[tokio::test]
    async fn test_list_shipments_server_error() {
        let client = client(MockTransport::new().respond(500, "oops"));

        let error = client.shipments().list().await.unwrap_err();
        assert!(error.is_server_error());
    }

    #[tokio::test]
    async fn test_get_shipment() {
        let client = client(MockTransport::new().respond(200, r#"{"id": 42, "tracking_number": "6800"}"#));

        let shipment = client.shipments().get(42).await.unwrap().unwrap();
        assert_eq!(shipment["tracking_number"], "6800");
        assert_eq!(
            client.transport().requests()[0].url,
            "https://sandbox-api-shipx-pl.easypack24.net/v1/shipments/42"
        );
    }

    #[tokio::test]
    async fn test_get_shipment_null_body() {
        let client = client(MockTransport::new().respond(200, "null"));

        assert!(client.shipments().get(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_shipment_not_found() {
        let client = client(MockTransport::new().respond(404, ""));

        let error = client.shipments().get(1).await.unwrap_err();
        assert!(error.is_not_found());
    }
}
