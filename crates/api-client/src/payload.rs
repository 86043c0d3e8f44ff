//! Shipment payload construction
//!
//! Turns a shop [`Shipment`] into the body of `POST /organizations/{org}/shipments`,
//! applying the carrier rules along the way:
//!
//! - SMS and e-mail notifications are dropped for locker-standard delivery
//! - cash on delivery is decided by the first payment that has a method
//! - the building number is split off the street line
//! - the comment is capped at 100 characters
//!
//! Everything here is synchronous and fails before any request is sent.

use crate::config::{AdditionalService, ClientConfig, GatewayConfig, ServiceCode};
use crate::error::ApiResult;
use serde::Serialize;
use shipx_core::model::{Order, Shipment, ShippingExport};
use shipx_core::rules::{house_number, resolve_comment};

/// Weight unit understood by the carrier
const WEIGHT_UNIT: &str = "kg";

/// Body of a create-shipment request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipmentRequest {
    /// Shop customer ID, as a string
    pub external_customer_id: String,
    /// Who receives the parcel
    pub receiver: Receiver,
    /// Carrier custom attributes
    pub custom_attributes: CustomAttributes,
    /// Always exactly one parcel
    pub parcels: [Parcel; 1],
    /// Selected carrier service
    pub service: ServiceCode,
    /// Additional services after notification filtering
    pub additional_services: Vec<AdditionalService>,
    /// `Order: <number>`
    pub reference: String,
    /// Order notes, at most 100 characters
    pub comments: String,
    /// Whether the shipment is a return
    pub is_return: bool,
    /// Insurance, when configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance: Option<MoneyBlock>,
    /// Cash on delivery, when the order is paid on delivery
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod: Option<MoneyBlock>,
}

/// Shipment receiver
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receiver {
    /// Company name
    pub company_name: Option<String>,
    /// First name
    pub first_name: Option<String>,
    /// Last name
    pub last_name: Option<String>,
    /// Customer e-mail
    pub email: Option<String>,
    /// Phone number
    pub phone: Option<String>,
    /// Delivery address
    pub address: ReceiverAddress,
}

/// Receiver address with the building number split out
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiverAddress {
    /// Street line as entered, house number included
    pub street: String,
    /// Last token of the street line
    pub building_number: String,
    /// City
    pub city: Option<String>,
    /// Postal code
    pub post_code: Option<String>,
    /// ISO country code
    pub country_code: Option<String>,
}

/// Carrier custom attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomAttributes {
    /// Pickup point the parcel is delivered to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_point: Option<String>,
}

/// The single parcel of a shipment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parcel {
    /// Shop shipment ID
    pub id: u64,
    /// Shipping weight
    pub weight: Weight,
    /// Always empty
    pub dimensions: Dimensions,
    /// Parcel template, e.g. `small`
    pub template: String,
    /// Always `null` on creation
    pub tracking_number: Option<String>,
    /// Always `false`
    pub is_non_standard: bool,
}

/// Parcel weight
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Weight {
    /// Weight value
    pub amount: f64,
    /// Always `kg`
    pub unit: &'static str,
}

/// Parcel dimensions; left empty so the template decides
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dimensions {}

/// Amount with currency, used for insurance and cash on delivery
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyBlock {
    /// Amount in major currency units
    pub amount: f64,
    /// ISO 4217 currency code
    pub currency: String,
}

impl ShipmentRequest {
    /// Build the request for a shipment
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`](crate::error::ApiError::Validation) when the
    /// shipping street has no house number.
    pub fn build(
        shipment: &Shipment,
        export: &ShippingExport,
        gateway: &GatewayConfig,
        config: &ClientConfig,
    ) -> ApiResult<Self> {
        let order = &shipment.order;

        let insurance = gateway.insurance_amount.map(|amount| MoneyBlock {
            amount,
            currency: order.currency_code.clone(),
        });

        let cod = is_cash_on_delivery(order, &gateway.cod_payment_method_code).then(|| MoneyBlock {
            amount: order.total_in_major_units(),
            currency: order.currency_code.clone(),
        });

        Ok(Self {
            external_customer_id: order.customer.id.to_string(),
            receiver: receiver(order)?,
            custom_attributes: CustomAttributes {
                target_point: order.point.as_ref().map(|point| point.name.clone()),
            },
            parcels: [parcel(shipment, export, config)],
            service: gateway.service,
            additional_services: additional_services(gateway.service, &gateway.additional_services),
            reference: format!("Order: {}", order.number.as_deref().unwrap_or_default()),
            comments: resolve_comment(order.notes.as_deref()),
            is_return: gateway.is_return,
            insurance,
            cod,
        })
    }
}

/// Filter the configured additional services for the selected service
///
/// Locker-standard delivery drops SMS and e-mail notifications; every other
/// service gets the list unchanged.
#[must_use]
pub fn additional_services(
    service: ServiceCode,
    configured: &[AdditionalService],
) -> Vec<AdditionalService> {
    if service.allows_notifications() {
        return configured.to_vec();
    }

    configured
        .iter()
        .filter(|additional| !additional.is_notification())
        .cloned()
        .collect()
}

/// Whether the order is paid on delivery
///
/// The first payment that has a method decides. Orders without payments, or whose
/// payments carry no method, are never cash on delivery.
#[must_use]
pub fn is_cash_on_delivery(order: &Order, cod_payment_method_code: &str) -> bool {
    order
        .first_payment_method()
        .is_some_and(|method| method.code == cod_payment_method_code)
}

fn receiver(order: &Order) -> ApiResult<Receiver> {
    let address = &order.shipping_address;
    let building_number = house_number(&address.street)?.to_string();

    Ok(Receiver {
        company_name: address.company.clone(),
        first_name: address.first_name.clone(),
        last_name: address.last_name.clone(),
        email: order.customer.email.clone(),
        phone: address.phone_number.clone(),
        address: ReceiverAddress {
            street: address.street.clone(),
            building_number,
            city: address.city.clone(),
            post_code: address.postcode.clone(),
            country_code: address.country_code.clone(),
        },
    })
}

fn parcel(shipment: &Shipment, export: &ShippingExport, config: &ClientConfig) -> Parcel {
    Parcel {
        id: shipment.id,
        weight: Weight {
            amount: shipment.shipping_weight,
            unit: WEIGHT_UNIT,
        },
        dimensions: Dimensions::default(),
        template: export
            .parcel_template
            .clone()
            .unwrap_or_else(|| config.parcel_template.clone()),
        tracking_number: None,
        is_non_standard: false,
    }
}
