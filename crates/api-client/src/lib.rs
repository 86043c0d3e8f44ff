//! API client for the ShipX parcel carrier
//!
//! This crate turns shop orders into carrier calls: shipment creation, label
//! download, organization and shipment queries, and pickup point lookup.
//!
//! # Features
//!
//! - **Environment-based routing**: sandbox or production, chosen by the gateway config
//! - **Validated construction**: a client cannot exist without credentials
//! - **Carrier payload rules**: COD detection, notification filtering, house number and comment handling
//! - **Point lookup retry**: fixed-delay retry for the flaky point service
//! - **Request correlation**: every request carries a unique `X-Request-ID`
//!
//! # Example
//!
//! ```rust,no_run
//! use shipx_api_client::{ClientConfig, Environment, GatewayConfig, ServiceCode, ShipxClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = GatewayConfig::new("token", "1234", Environment::Sandbox, ServiceCode::LockerStandard);
//!     let client = ShipxClient::new(gateway, ClientConfig::default())?;
//!
//!     let organizations = client.organizations().list().await?;
//!     println!("Visible organizations: {}", organizations.len());
//!
//!     if let Some(point) = client.points().find_by_name("KRA01M").await {
//!         println!("Point {} is {:?}", point.name, point.status);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod payload;
pub mod routes;
pub mod transport;

pub use client::ShipxClient;
pub use config::{AdditionalService, ClientConfig, Environment, GatewayConfig, ServiceCode};
pub use error::{ApiError, ApiResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::ShipxClient;
    pub use crate::config::{AdditionalService, ClientConfig, Environment, GatewayConfig, ServiceCode};
    pub use crate::endpoints::{
        ApiObject, Collection, LabelsApi, OrganizationsApi, Point, PointLookup, PointsApi,
        ShipmentsApi,
    };
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::payload::ShipmentRequest;
    pub use shipx_core::model::{
        Address, Customer, Order, Payment, PaymentMethod, PickupPoint, Shipment, ShippingExport,
    };
}
