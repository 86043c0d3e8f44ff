//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for a specific set of carrier endpoints.
//!
//! | Module | Route | Description |
//! |--------|-------|-------------|
//! | `organizations` | `/organizations` | Organizations visible to the token |
//! | `shipments` | `/organizations/{org}/shipments`, `/shipments/{id}` | Create, list and fetch shipments |
//! | `labels` | `/organizations/{org}/shipments/labels` | PDF labels |
//! | `points` | `/points/{name}` | Pickup point lookup |

pub mod labels;
pub mod organizations;
pub mod points;
pub mod shipments;

pub use labels::LabelsApi;
pub use organizations::OrganizationsApi;
pub use points::{Point, PointLookup, PointsApi};
pub use shipments::ShipmentsApi;

use serde::{Deserialize, Serialize};

/// Decoded JSON object as returned by the carrier
pub type ApiObject = serde_json::Map<String, serde_json::Value>;

/// Paginated collection returned by list endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collection {
    /// Link to this page
    pub href: Option<String>,
    /// Total number of items across pages
    pub count: Option<u64>,
    /// Current page
    pub page: Option<u64>,
    /// Page size
    pub per_page: Option<u64>,
    /// Items on this page
    pub items: Vec<ApiObject>,
}

impl Collection {
    /// Number of items on this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the page is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
