//! Core building blocks for the ShipX tools
//!
//! This crate holds everything that does not talk to the network:
//!
//! - **Domain contracts**: plain order, shipment and address records handed to the client
//! - **Text rules**: house number extraction and comment truncation
//! - **Validation errors**: raised while a payload is being built
//! - **Retry policy**: attempt budget and delay schedule for flaky lookups
//!
//! # Example
//!
//! ```rust
//! use shipx_core::rules::{house_number, resolve_comment};
//!
//! assert_eq!(house_number("Opolska 45").unwrap(), "45");
//! assert_eq!(resolve_comment(None), "");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod model;
pub mod retry;
pub mod rules;
pub mod validation;

pub use validation::{ValidationError, ValidationResult};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::model::{
        Address, Customer, Order, Payment, PaymentMethod, PickupPoint, Shipment, ShippingExport,
    };
    pub use crate::retry::RetryConfig;
    pub use crate::rules::{house_number, resolve_comment};
    pub use crate::validation::{ValidationError, ValidationResult};
}
