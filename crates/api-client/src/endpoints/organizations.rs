//! Organization endpoints

use super::Collection;
use crate::client::ShipxClient;
use crate::error::ApiResult;
use crate::transport::{HttpTransport, Transport};
use tracing::instrument;

/// Organizations API interface
pub struct OrganizationsApi<T: Transport = HttpTransport> {
    client: ShipxClient<T>,
}

impl<T: Transport> OrganizationsApi<T> {
    /// Create a new organizations API interface
    pub(crate) fn new(client: ShipxClient<T>) -> Self {
        Self { client }
    }

    /// List organizations visible to the access token
    ///
    /// GET /organizations
    #[instrument(skip(self))]
    pub async fn list(&self) -> ApiResult<Collection> {
        self.client.get(&self.client.routes().organizations()).await
    }
}
