//! Order and shipment data contracts
//!
//! The host shop owns these records. The client only reads them while building
//! carrier payloads, so they are plain values with no behaviour beyond a few
//! lookups.

use serde::{Deserialize, Serialize};

/// Customer placing the order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Shop-side customer identifier
    pub id: u64,
    /// Contact e-mail
    #[serde(default)]
    pub email: Option<String>,
}

/// Shipping address of an order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    /// First name
    pub first_name: Option<String>,
    /// Last name
    pub last_name: Option<String>,
    /// Company name
    pub company: Option<String>,
    /// Contact phone
    pub phone_number: Option<String>,
    /// Street including the house number, e.g. "Opolska 45"
    pub street: String,
    /// City
    pub city: Option<String>,
    /// Postal code
    pub postcode: Option<String>,
    /// ISO country code
    pub country_code: Option<String>,
}

/// Payment method attached to a payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Shop-side method code, compared against the COD code
    pub code: String,
}

/// A single payment of an order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Method used, if the shop recorded one
    #[serde(default)]
    pub method: Option<PaymentMethod>,
}

impl Payment {
    /// Payment with the given method code
    #[must_use]
    pub fn with_method(code: impl Into<String>) -> Self {
        Self {
            method: Some(PaymentMethod { code: code.into() }),
        }
    }
}

/// Pickup point chosen by the customer at checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupPoint {
    /// Carrier point name, e.g. `KRA01M`
    pub name: String,
}

/// Order being shipped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Human-facing order number
    #[serde(default)]
    pub number: Option<String>,
    /// Free-text notes left by the customer
    #[serde(default)]
    pub notes: Option<String>,
    /// ISO 4217 currency code
    pub currency_code: String,
    /// Order total in minor currency units
    pub total: i64,
    /// Customer placing the order
    pub customer: Customer,
    /// Where the parcel goes
    pub shipping_address: Address,
    /// Payments in the order they were made
    #[serde(default)]
    pub payments: Vec<Payment>,
    /// Pickup point chosen at checkout
    #[serde(default)]
    pub point: Option<PickupPoint>,
}

impl Order {
    /// Method of the first payment that has one
    ///
    /// Payments without a method are skipped; `None` when no payment carries one.
    #[must_use]
    pub fn first_payment_method(&self) -> Option<&PaymentMethod> {
        self.payments.iter().find_map(|payment| payment.method.as_ref())
    }

    /// Order total converted to major currency units
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total_in_major_units(&self) -> f64 {
        self.total as f64 / 100.0
    }
}

/// Shipment of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    /// Shop-side shipment identifier
    pub id: u64,
    /// Shipping weight in kilograms
    pub shipping_weight: f64,
    /// Order being shipped
    pub order: Order,
}

/// Export record created when a shipment is handed to the carrier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingExport {
    /// Parcel template overriding the configured default
    #[serde(default)]
    pub parcel_template: Option<String>,
}

impl ShippingExport {
    /// Export overriding the parcel template
    #[must_use]
    pub fn with_parcel_template(template: impl Into<String>) -> Self {
        Self {
            parcel_template: Some(template.into()),
        }
    }
}
