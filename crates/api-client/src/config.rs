//! Configuration for the ShipX API client
//!
//! Two value objects drive the client:
//!
//! - [`GatewayConfig`]: credentials and per-gateway shipping options
//! - [`ClientConfig`]: plugin-level defaults such as label type and parcel template
//!
//! Both are validated when the client is built, so a client never exists in a
//! half-configured state.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use shipx_core::retry::RetryConfig;
use shipx_core::{ValidationError, ValidationResult};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default label type requested from the carrier
pub const DEFAULT_LABEL_TYPE: &str = "normal";

/// Default parcel template when the shipping export does not override it
pub const DEFAULT_PARCEL_TEMPLATE: &str = "small";

/// Carrier environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Carrier test environment
    #[default]
    Sandbox,
    /// Live environment
    Production,
}

impl Environment {
    /// Parse from the `SHIPX_ENVIRONMENT` variable, falling back to sandbox
    pub fn from_env() -> ApiResult<Self> {
        match env::var("SHIPX_ENVIRONMENT") {
            Ok(value) if !value.trim().is_empty() => value.parse(),
            _ => Ok(Self::default()),
        }
    }

    /// Configuration value of this environment
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sandbox" => Ok(Self::Sandbox),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ApiError::config(format!(
                "unknown environment '{other}', expected 'sandbox' or 'production'"
            ))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Carrier service codes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceCode {
    /// Parcel locker, standard delivery
    #[default]
    #[serde(rename = "inpost_locker_standard")]
    LockerStandard,
    /// Parcel locker, marketplace delivery
    #[serde(rename = "inpost_locker_allegro")]
    LockerAllegro,
    /// Parcel locker, pass-through
    #[serde(rename = "inpost_locker_pass_thru")]
    LockerPassThru,
    /// Courier, standard delivery
    #[serde(rename = "inpost_courier_standard")]
    CourierStandard,
    /// Courier, express by 10:00
    #[serde(rename = "inpost_courier_express_1000")]
    CourierExpress1000,
    /// Courier, express by 12:00
    #[serde(rename = "inpost_courier_express_1200")]
    CourierExpress1200,
    /// Courier, express by 17:00
    #[serde(rename = "inpost_courier_express_1700")]
    CourierExpress1700,
    /// Courier, pallet
    #[serde(rename = "inpost_courier_palette")]
    CourierPalette,
    /// Local courier, standard
    #[serde(rename = "inpost_courier_local_standard")]
    CourierLocalStandard,
    /// Local courier, express
    #[serde(rename = "inpost_courier_local_express")]
    CourierLocalExpress,
    /// Local courier, super express
    #[serde(rename = "inpost_courier_local_super_express")]
    CourierLocalSuperExpress,
    /// Courier, customer to customer
    #[serde(rename = "inpost_courier_c2c")]
    CourierC2c,
}

impl ServiceCode {
    /// Every known service code
    pub const ALL: [Self; 12] = [
        Self::LockerStandard,
        Self::LockerAllegro,
        Self::LockerPassThru,
        Self::CourierStandard,
        Self::CourierExpress1000,
        Self::CourierExpress1200,
        Self::CourierExpress1700,
        Self::CourierPalette,
        Self::CourierLocalStandard,
        Self::CourierLocalExpress,
        Self::CourierLocalSuperExpress,
        Self::CourierC2c,
    ];

    /// Wire code of this service
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LockerStandard => "inpost_locker_standard",
            Self::LockerAllegro => "inpost_locker_allegro",
            Self::LockerPassThru => "inpost_locker_pass_thru",
            Self::CourierStandard => "inpost_courier_standard",
            Self::CourierExpress1000 => "inpost_courier_express_1000",
            Self::CourierExpress1200 => "inpost_courier_express_1200",
            Self::CourierExpress1700 => "inpost_courier_express_1700",
            Self::CourierPalette => "inpost_courier_palette",
            Self::CourierLocalStandard => "inpost_courier_local_standard",
            Self::CourierLocalExpress => "inpost_courier_local_express",
            Self::CourierLocalSuperExpress => "inpost_courier_local_super_express",
            Self::CourierC2c => "inpost_courier_c2c",
        }
    }

    /// Locker-standard delivery does not accept SMS or e-mail notifications
    #[must_use]
    pub fn allows_notifications(self) -> bool {
        self != Self::LockerStandard
    }
}

impl FromStr for ServiceCode {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|service| service.as_str() == s.trim())
            .ok_or_else(|| ApiError::config(format!("unknown service code '{s}'")))
    }
}

impl fmt::Display for ServiceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Additional service code (notifications, delivery windows, ...)
///
/// Kept open-ended: the carrier adds codes more often than this crate is released.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdditionalService(Cow<'static, str>);

impl AdditionalService {
    /// SMS notification
    pub const SMS: Self = Self(Cow::Borrowed("sms"));
    /// E-mail notification
    pub const EMAIL: Self = Self(Cow::Borrowed("email"));
    /// Saturday delivery
    pub const SATURDAY: Self = Self(Cow::Borrowed("saturday"));

    /// Create from a wire code
    pub fn new(code: impl Into<String>) -> Self {
        Self(Cow::Owned(code.into()))
    }

    /// Wire code
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is an SMS or e-mail notification
    #[must_use]
    pub fn is_notification(&self) -> bool {
        *self == Self::SMS || *self == Self::EMAIL
    }
}

impl fmt::Display for AdditionalService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shipping gateway configuration
///
/// Holds the carrier credentials and the options applied to every shipment
/// created through the gateway. Keys the client does not know about are kept
/// in `extra` and remain readable through [`GatewayConfig::value`].
#[derive(Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Bearer token issued by the carrier
    pub access_token: String,
    /// Carrier organization the shipments belong to
    pub organization_id: String,
    /// Sandbox or production
    pub environment: Environment,
    /// Selected carrier service
    pub service: ServiceCode,
    /// Additional services, in the order they were configured
    #[serde(default)]
    pub additional_services: Vec<AdditionalService>,
    /// Whether shipments are returns
    #[serde(default)]
    pub is_return: bool,
    /// Payment method code that marks an order as cash on delivery
    #[serde(default)]
    pub cod_payment_method_code: String,
    /// Insurance amount; no insurance block is sent when unset
    #[serde(default)]
    pub insurance_amount: Option<f64>,
    /// Carrier-specific keys
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("access_token", &"<redacted>")
            .field("organization_id", &self.organization_id)
            .field("environment", &self.environment)
            .field("service", &self.service)
            .field("additional_services", &self.additional_services)
            .field("is_return", &self.is_return)
            .field("cod_payment_method_code", &self.cod_payment_method_code)
            .field("insurance_amount", &self.insurance_amount)
            .field("extra", &self.extra.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl GatewayConfig {
    /// Create a gateway configuration with default shipping options
    pub fn new(
        access_token: impl Into<String>,
        organization_id: impl Into<String>,
        environment: Environment,
        service: ServiceCode,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            organization_id: organization_id.into(),
            environment,
            service,
            additional_services: Vec::new(),
            is_return: false,
            cod_payment_method_code: String::new(),
            insurance_amount: None,
            extra: BTreeMap::new(),
        }
    }

    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `SHIPX_ACCESS_TOKEN` (required)
    /// - `SHIPX_ORGANIZATION_ID` (required)
    /// - `SHIPX_ENVIRONMENT`: sandbox/production, defaults to sandbox
    /// - `SHIPX_SERVICE`: service code, defaults to `inpost_locker_standard`
    /// - `SHIPX_ADDITIONAL_SERVICES`: comma-separated additional service codes
    /// - `SHIPX_IS_RETURN`: `true`/`1` for return shipments
    /// - `SHIPX_COD_PAYMENT_METHOD_CODE`: payment method code meaning cash on delivery
    /// - `SHIPX_INSURANCE_AMOUNT`: insurance amount
    pub fn from_env() -> ApiResult<Self> {
        let access_token =
            env::var("SHIPX_ACCESS_TOKEN").map_err(|_| ApiError::missing_env("SHIPX_ACCESS_TOKEN"))?;
        let organization_id = env::var("SHIPX_ORGANIZATION_ID")
            .map_err(|_| ApiError::missing_env("SHIPX_ORGANIZATION_ID"))?;
        let environment = Environment::from_env()?;
        let service = env::var("SHIPX_SERVICE")
            .ok()
            .map(|s| s.parse())
            .transpose()?
            .unwrap_or_default();

        let additional_services = env::var("SHIPX_ADDITIONAL_SERVICES")
            .map(|list| parse_service_list(&list))
            .unwrap_or_default();

        let is_return = env::var("SHIPX_IS_RETURN")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let insurance_amount = env::var("SHIPX_INSURANCE_AMOUNT")
            .ok()
            .map(|v| {
                v.trim()
                    .parse::<f64>()
                    .map_err(|e| ApiError::config(format!("SHIPX_INSURANCE_AMOUNT: {e}")))
            })
            .transpose()?;

        Ok(Self {
            additional_services,
            is_return,
            cod_payment_method_code: env::var("SHIPX_COD_PAYMENT_METHOD_CODE").unwrap_or_default(),
            insurance_amount,
            ..Self::new(access_token, organization_id, environment, service)
        })
    }

    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> ApiResult<Self> {
        toml::from_str(source).map_err(|e| ApiError::config(format!("invalid gateway config: {e}")))
    }

    /// Override credentials and environment from `SHIPX_*` variables when set
    pub fn with_env_overrides(mut self) -> ApiResult<Self> {
        if let Ok(token) = env::var("SHIPX_ACCESS_TOKEN") {
            self.access_token = token;
        }
        if let Ok(organization_id) = env::var("SHIPX_ORGANIZATION_ID") {
            self.organization_id = organization_id;
        }
        if let Ok(environment) = env::var("SHIPX_ENVIRONMENT") {
            self.environment = environment.parse()?;
        }
        Ok(self)
    }

    /// Builder-style method to set additional services
    #[must_use]
    pub fn with_additional_services(
        mut self,
        services: impl IntoIterator<Item = AdditionalService>,
    ) -> Self {
        self.additional_services = services.into_iter().collect();
        self
    }

    /// Builder-style method to mark shipments as returns
    #[must_use]
    pub fn with_return(mut self, is_return: bool) -> Self {
        self.is_return = is_return;
        self
    }

    /// Builder-style method to set the cash-on-delivery payment method code
    #[must_use]
    pub fn with_cod_payment_method_code(mut self, code: impl Into<String>) -> Self {
        self.cod_payment_method_code = code.into();
        self
    }

    /// Builder-style method to set the insurance amount
    #[must_use]
    pub fn with_insurance_amount(mut self, amount: f64) -> Self {
        self.insurance_amount = Some(amount);
        self
    }

    /// Builder-style method to set a carrier-specific key
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Look up a configuration value by name
    ///
    /// Known keys are returned in their wire representation; anything else is
    /// read from the carrier-specific extras.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<serde_json::Value> {
        use serde_json::Value;

        match key {
            "access_token" => Some(Value::from(self.access_token.as_str())),
            "organization_id" => Some(Value::from(self.organization_id.as_str())),
            "environment" => Some(Value::from(self.environment.as_str())),
            "service" => Some(Value::from(self.service.as_str())),
            "additional_services" => Some(Value::from(
                self.additional_services
                    .iter()
                    .map(AdditionalService::as_str)
                    .collect::<Vec<_>>(),
            )),
            "is_return" => Some(Value::from(self.is_return)),
            "cod_payment_method_code" => Some(Value::from(self.cod_payment_method_code.as_str())),
            "insurance_amount" => self.insurance_amount.map(Value::from),
            other => self.extra.get(other).cloned(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        let mut result = ValidationResult::new()
            .required("access_token", &self.access_token)
            .required("organization_id", &self.organization_id);

        if let Some(amount) = self.insurance_amount {
            if !amount.is_finite() || amount < 0.0 {
                result.add_error(
                    ValidationError::new(
                        "insurance_amount",
                        "INVALID_VALUE",
                        "Must be a non-negative number",
                    )
                    .with_actual(amount.to_string()),
                );
            }
        }

        if result.is_valid() {
            Ok(())
        } else {
            Err(ApiError::config(result.summary()))
        }
    }
}

fn parse_service_list(list: &str) -> Vec<AdditionalService> {
    list.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(AdditionalService::new)
        .collect()
}

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Label type requested when fetching labels
    pub label_type: String,
    /// Parcel template used unless the shipping export overrides it
    pub parcel_template: String,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    /// Attempt budget for pickup point lookups
    pub point_lookup_retry: RetryConfig,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            label_type: DEFAULT_LABEL_TYPE.to_string(),
            parcel_template: DEFAULT_PARCEL_TEMPLATE.to_string(),
            timeout: Duration::from_secs(30),
            point_lookup_retry: RetryConfig::point_lookup(),
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `SHIPX_LABEL_TYPE`: label type, defaults to `normal`
    /// - `SHIPX_PARCEL_TEMPLATE`: default parcel template, defaults to `small`
    /// - `SHIPX_TIMEOUT_SECS`: request timeout in seconds
    pub fn from_env() -> ApiResult<Self> {
        let defaults = Self::default();

        let timeout = match env::var("SHIPX_TIMEOUT_SECS") {
            Ok(value) => value
                .trim()
                .parse()
                .map(Duration::from_secs)
                .map_err(|e| ApiError::config(format!("SHIPX_TIMEOUT_SECS: {e}")))?,
            Err(_) => defaults.timeout,
        };

        Ok(Self {
            label_type: env::var("SHIPX_LABEL_TYPE").unwrap_or(defaults.label_type),
            parcel_template: env::var("SHIPX_PARCEL_TEMPLATE").unwrap_or(defaults.parcel_template),
            timeout,
            point_lookup_retry: defaults.point_lookup_retry,
        })
    }

    /// Builder-style method to set the label type
    #[must_use]
    pub fn with_label_type(mut self, label_type: impl Into<String>) -> Self {
        self.label_type = label_type.into();
        self
    }

    /// Builder-style method to set the default parcel template
    #[must_use]
    pub fn with_parcel_template(mut self, template: impl Into<String>) -> Self {
        self.parcel_template = template.into();
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder-style method to set the point lookup retry policy
    #[must_use]
    pub fn with_point_lookup_retry(mut self, retry: RetryConfig) -> Self {
        self.point_lookup_retry = retry;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        let mut result = ValidationResult::new()
            .required("label_type", &self.label_type)
            .required("parcel_template", &self.parcel_template);

        if self.timeout.is_zero() {
            result.add_error(ValidationError::new(
                "timeout",
                "INVALID_VALUE",
                "timeout cannot be zero",
            ));
        }

        for error in self.point_lookup_retry.validate().errors() {
            result.add_error(error.clone());
        }

        if result.is_valid() {
            Ok(())
        } else {
            Err(ApiError::config(result.summary()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GATEWAY_TOML: &str = r#"
access_token = "token-123"
organization_id = "4567"
environment = "production"
service = "inpost_courier_standard"
additional_services = ["sms", "email", "saturday"]
is_return = false
cod_payment_method_code = "cash_on_delivery"
insurance_amount = 150.0
dispatch_point = "KRA01M"
"#;

    #[test]
    fn test_gateway_from_toml() {
        let config = GatewayConfig::from_toml_str(GATEWAY_TOML).unwrap();

        assert_eq!(config.access_token, "token-123");
        assert_eq!(config.organization_id, "4567");
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.service, ServiceCode::CourierStandard);
        assert_eq!(
            config.additional_services,
            vec![
                AdditionalService::SMS,
                AdditionalService::EMAIL,
                AdditionalService::SATURDAY
            ]
        );
        assert_eq!(config.insurance_amount, Some(150.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_gateway_value_lookup() {
        let config = GatewayConfig::from_toml_str(GATEWAY_TOML).unwrap();

        assert_eq!(config.value("dispatch_point"), Some("KRA01M".into()));
        assert_eq!(config.value("service"), Some("inpost_courier_standard".into()));
        assert_eq!(config.value("is_return"), Some(false.into()));
        assert_eq!(config.value("missing"), None);

        let config = config.with_value("sending_method", "parcel_locker");
        assert_eq!(config.value("sending_method"), Some("parcel_locker".into()));
        assert_eq!(config.value("dispatch_point"), Some("KRA01M".into()));
    }

    #[test]
    fn test_gateway_requires_credentials() {
        let config = GatewayConfig::new("", " ", Environment::Sandbox, ServiceCode::default());
        let error = config.validate().unwrap_err();

        let message = error.to_string();
        assert!(message.contains("access_token"));
        assert!(message.contains("organization_id"));
    }

    #[test]
    fn test_gateway_rejects_negative_insurance() {
        let config = GatewayConfig::new("t", "1", Environment::Sandbox, ServiceCode::default())
            .with_insurance_amount(-5.0);

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_gateway_debug_redacts_token() {
        let config = GatewayConfig::new("secret-token", "1", Environment::Sandbox, ServiceCode::default());
        let debug = format!("{config:?}");

        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_service_code_round_trip() {
        for service in ServiceCode::ALL {
            assert_eq!(service.as_str().parse::<ServiceCode>().unwrap(), service);
            let json = serde_json::to_string(&service).unwrap();
            assert_eq!(json, format!("\"{}\"", service.as_str()));
        }
        assert!("dhl_express".parse::<ServiceCode>().is_err());
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!("Sandbox".parse::<Environment>().unwrap(), Environment::Sandbox);
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_locker_standard_disallows_notifications() {
        assert!(!ServiceCode::LockerStandard.allows_notifications());
        assert!(ServiceCode::CourierStandard.allows_notifications());
        assert!(AdditionalService::new("sms").is_notification());
        assert!(!AdditionalService::SATURDAY.is_notification());
    }

    #[test]
    fn test_parse_service_list() {
        assert_eq!(
            parse_service_list("sms, email,,saturday "),
            vec![
                AdditionalService::SMS,
                AdditionalService::EMAIL,
                AdditionalService::SATURDAY
            ]
        );
    }

    #[test]
    fn test_default_client_config() {
        let config = ClientConfig::default();

        assert_eq!(config.label_type, "normal");
        assert_eq!(config.parcel_template, "small");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.point_lookup_retry, RetryConfig::point_lookup());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_client_config_validation() {
        let invalid = ClientConfig::default()
            .with_timeout(Duration::ZERO)
            .with_point_lookup_retry(RetryConfig::fixed(0, Duration::ZERO));

        let message = invalid.validate().unwrap_err().to_string();
        assert!(message.contains("timeout"));
        assert!(message.contains("max_attempts"));
    }
}
