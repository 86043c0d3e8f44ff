//! Label endpoints

use crate::client::ShipxClient;
use crate::error::ApiResult;
use crate::transport::{HttpTransport, Transport};
use serde::Serialize;
use tracing::instrument;

/// Label file format requested from the carrier
const LABEL_FORMAT: &str = "pdf";

/// Labels API interface
pub struct LabelsApi<T: Transport = HttpTransport> {
    client: ShipxClient<T>,
}

impl<T: Transport> LabelsApi<T> {
    /// Create a new labels API interface
    pub(crate) fn new(client: ShipxClient<T>) -> Self {
        Self { client }
    }

    /// Fetch PDF labels for created shipments
    ///
    /// POST /organizations/{org}/shipments/labels
    ///
    /// Returns the raw PDF bytes; the body is never JSON-decoded.
    #[instrument(skip(self))]
    pub async fn fetch(&self, shipment_ids: &[u64]) -> ApiResult<Vec<u8>> {
        let request = LabelRequest {
            format: LABEL_FORMAT,
            label_type: &self.client.config().label_type,
            shipment_ids,
        };

        self.client.post_raw(&self.client.routes().labels(), &request).await
    }
}

/// Body of a label request
#[derive(Debug, Serialize)]
struct LabelRequest<'a> {
    format: &'static str,
    #[serde(rename = "type")]
    label_type: &'a str,
    shipment_ids: &'a [u64],
}
