//! Pickup point endpoints
//!
//! The point lookup is the only call the client retries: the carrier's point
//! service is known to fail intermittently, so a lookup is attempted up to the
//! configured budget (4 attempts, 1 second apart by default) before giving up.

use super::ApiObject;
use crate::client::ShipxClient;
use crate::error::{ApiError, ApiResult};
use crate::transport::{HttpTransport, Transport};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Pickup point (parcel locker or partner counter)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Point name, e.g. `KRA01M`; empty when the carrier omits it
    #[serde(default)]
    pub name: String,
    /// Operating status reported by the carrier
    #[serde(default)]
    pub status: Option<String>,
    /// Every other attribute as returned by the carrier
    #[serde(flatten)]
    pub details: ApiObject,
}

/// Outcome of a pickup point lookup
#[derive(Debug)]
pub enum PointLookup {
    /// The carrier returned the point
    Found(Point),
    /// Every attempt failed and the last one was a 404
    NotFound {
        /// Attempts made
        attempts: u32,
    },
    /// Every attempt failed for another reason
    Unavailable {
        /// Attempts made
        attempts: u32,
        /// Error of the last attempt
        last_error: ApiError,
    },
}

impl PointLookup {
    fn exhausted(attempts: u32, last_error: ApiError) -> Self {
        if last_error.is_not_found() {
            Self::NotFound { attempts }
        } else {
            Self::Unavailable { attempts, last_error }
        }
    }

    /// The point, if it was found
    #[must_use]
    pub fn into_point(self) -> Option<Point> {
        match self {
            Self::Found(point) => Some(point),
            Self::NotFound { .. } | Self::Unavailable { .. } => None,
        }
    }

    /// Whether the point was found
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Points API interface
pub struct PointsApi<T: Transport = HttpTransport> {
    client: ShipxClient<T>,
}

impl<T: Transport> PointsApi<T> {
    /// Create a new points API interface
    pub(crate) fn new(client: ShipxClient<T>) -> Self {
        Self { client }
    }

    /// Find a pickup point by name
    ///
    /// GET /points/{name}
    ///
    /// Failures are retried and then swallowed: `None` means the point was not
    /// returned, whether the carrier does not know it or could not be reached.
    /// Use [`lookup`](Self::lookup) to tell the two apart.
    pub async fn find_by_name(&self, name: &str) -> Option<Point> {
        self.lookup(name).await.into_point()
    }

    /// Look up a pickup point, retrying failed attempts
    #[instrument(skip(self))]
    pub async fn lookup(&self, name: &str) -> PointLookup {
        let retry = &self.client.config().point_lookup_retry;
        let max_attempts = retry.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match self.fetch(name).await {
                Ok(point) => {
                    debug!(attempt, "Point found");
                    return PointLookup::Found(point);
                }
                Err(e) if attempt < max_attempts => {
                    let delay = retry.delay_for_attempt(attempt);
                    warn!(
                        attempt,
                        error = %e,
                        delay_ms = delay.as_millis(),
                        "Point lookup failed, will retry"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    warn!(attempts = attempt, error = %e, "Point lookup gave up");
                    return PointLookup::exhausted(attempt, e);
                }
            }
        }
    }

    async fn fetch(&self, name: &str) -> ApiResult<Point> {
        let url = self.client.routes().point(name)?;
        self.client.get(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::payload::fixtures::gateway;
    use crate::transport::testing::MockTransport;
    use shipx_core::retry::RetryConfig;
    use std::time::Duration;
    use tokio::time::Instant;

    const POINT_JSON: &str = r#"{"name": "KRA01M", "status": "Operating", "location_type": "Outdoor"}"#;

    fn client(transport: MockTransport) -> ShipxClient<MockTransport> {
        ShipxClient::with_transport(gateway(), ClientConfig::default(), transport).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_found_first_attempt() {
        let client = client(MockTransport::new().respond(200, POINT_JSON));
        let start = Instant::now();

        let point = client.points().find_by_name("KRA01M").await.unwrap();

        assert_eq!(point.name, "KRA01M");
        assert_eq!(point.status.as_deref(), Some("Operating"));
        assert_eq!(point.details["location_type"], "Outdoor");
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(
            client.transport().requests()[0].url,
            "https://sandbox-api-shipx-pl.easypack24.net/v1/points/KRA01M"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_succeeds_on_fourth_attempt() {
        let transport = MockTransport::new()
            .fail("timeout")
            .respond(503, "unavailable")
            .fail("connection reset")
            .respond(200, POINT_JSON);
        let client = client(transport);
        let start = Instant::now();

        let point = client.points().find_by_name("KRA01M").await;

        assert_eq!(point.map(|p| p.name), Some("KRA01M".to_string()));
        assert_eq!(client.transport().request_count(), 4);
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_gives_up_after_four_attempts() {
        let transport = MockTransport::new()
            .fail("timeout")
            .fail("timeout")
            .fail("timeout")
            .fail("timeout")
            .respond(200, POINT_JSON);
        let client = client(transport);
        let start = Instant::now();

        let point = client.points().find_by_name("KRA01M").await;

        assert!(point.is_none());
        assert_eq!(client.transport().request_count(), 4);
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookup_reports_unavailable() {
        let transport = MockTransport::new()
            .respond(500, "")
            .respond(500, "")
            .respond(500, "")
            .fail("connection refused");
        let client = client(transport);

        match client.points().lookup("KRA01M").await {
            PointLookup::Unavailable { attempts, last_error } => {
                assert_eq!(attempts, 4);
                assert!(matches!(last_error, ApiError::Transport(_)));
            }
            other => panic!("expected unavailable, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookup_reports_not_found() {
        let transport = MockTransport::new()
            .respond(404, "")
            .respond(404, "")
            .respond(404, "")
            .respond(404, r#"{"error":"resource_not_found"}"#);
        let client = client(transport);

        let lookup = client.points().lookup("NOPE01").await;
        assert!(matches!(lookup, PointLookup::NotFound { attempts: 4 }));
        assert!(!lookup.is_found());
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_retry_budget() {
        let config = ClientConfig::default().with_point_lookup_retry(RetryConfig::no_retry());
        let transport = MockTransport::new().fail("timeout").respond(200, POINT_JSON);
        let client = ShipxClient::with_transport(gateway(), config, transport).unwrap();

        assert!(client.points().find_by_name("KRA01M").await.is_none());
        assert_eq!(client.transport().request_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fixed_delay_from_custom_policy() {
        let retry = RetryConfig::fixed(4, Duration::from_millis(500));
        let config = ClientConfig::default().with_point_lookup_retry(retry);
        let transport = MockTransport::new()
            .fail("timeout")
            .fail("timeout")
            .fail("timeout")
            .fail("timeout");
        let client = ShipxClient::with_transport(gateway(), config, transport).unwrap();
        let start = Instant::now();

        assert!(client.points().find_by_name("KRA01M").await.is_none());
        assert_eq!(client.transport().request_count(), 4);
        assert_eq!(start.elapsed(), Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_point_without_name_is_returned() {
        let client = client(MockTransport::new().respond(200, r#"{"href": "x", "status": "Operating"}"#));

        let point = client.points().find_by_name("KRA01M").await.unwrap();

        assert_eq!(point.name, "");
        assert_eq!(point.status.as_deref(), Some("Operating"));
        assert_eq!(point.details["href"], "x");
        assert_eq!(client.transport().request_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_object_point_counts_as_failure() {
        let transport = MockTransport::new().respond(200, r#""not a point""#).respond(200, POINT_JSON);
        let client = client(transport);

        assert!(client.points().find_by_name("KRA01M").await.is_some());
        assert_eq!(client.transport().request_count(), 2);
    }
}
