//! Retry policy for flaky carrier lookups
//!
//! Only the attempt budget and the delay schedule live here; the async loop
//! that sleeps between attempts belongs to the API client.
//!
//! # Example
//!
//! ```rust
//! use shipx_core::retry::RetryConfig;
//! use std::time::Duration;
//!
//! let policy = RetryConfig::point_lookup();
//! assert_eq!(policy.max_attempts, 4);
//! assert_eq!(policy.delay_for_attempt(1), Duration::from_secs(1));
//! ```

use crate::validation::ValidationResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retry configuration
///
/// Attempts are spaced by the same delay every time; the wait never grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total number of attempts, the first one included
    pub max_attempts: u32,
    /// Wait between two consecutive attempts
    pub delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::point_lookup()
    }
}

impl RetryConfig {
    /// Fixed delay between a bounded number of attempts
    #[must_use]
    pub fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self { max_attempts, delay }
    }

    /// Policy used for pickup point lookups: 4 attempts, 1 second apart
    #[must_use]
    pub fn point_lookup() -> Self {
        Self::fixed(4, Duration::from_secs(1))
    }

    /// Create a config with no retries
    #[must_use]
    pub fn no_retry() -> Self {
        Self::fixed(1, Duration::ZERO)
    }

    /// Wait before the next attempt, given how many attempts were already made
    ///
    /// Nothing has failed yet at 0, so there is no wait.
    #[must_use]
    pub fn delay_for_attempt(&self, attempts_made: u32) -> Duration {
        if attempts_made == 0 {
            Duration::ZERO
        } else {
            self.delay
        }
    }

    /// Number of waits performed when every attempt fails
    #[must_use]
    pub fn waits_when_exhausted(&self) -> u32 {
        self.max_attempts.saturating_sub(1)
    }

    /// Check the policy is usable
    #[must_use]
    pub fn validate(&self) -> ValidationResult {
        ValidationResult::new().at_least("max_attempts", u64::from(self.max_attempts), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_lookup_policy() {
        let config = RetryConfig::point_lookup();

        assert_eq!(config.max_attempts, 4);
        assert_eq!(config.waits_when_exhausted(), 3);
        assert_eq!(config.delay_for_attempt(0), Duration::ZERO);
        for attempt in 1..4 {
            assert_eq!(config.delay_for_attempt(attempt), Duration::from_secs(1));
        }
    }

    #[test]
    fn test_delay_never_grows() {
        let config = RetryConfig::fixed(10, Duration::from_millis(250));

        assert_eq!(config.delay_for_attempt(0), Duration::ZERO);
        for attempts_made in [1, 2, 5, 9, u32::MAX] {
            assert_eq!(config.delay_for_attempt(attempts_made), Duration::from_millis(250));
        }
    }

    #[test]
    fn test_deserialized_policy_is_fixed() {
        let config: RetryConfig = serde_json::from_str(
            r#"{"max_attempts": 3, "delay": {"secs": 2, "nanos": 0}}"#,
        )
        .unwrap();

        assert_eq!(config, RetryConfig::fixed(3, Duration::from_secs(2)));
        assert_eq!(config.delay_for_attempt(2), Duration::from_secs(2));
    }

    #[test]
    fn test_no_retry() {
        let config = RetryConfig::no_retry();
        assert_eq!(config.max_attempts, 1);
        assert_eq!(config.waits_when_exhausted(), 0);
        assert!(config.validate().is_valid());
    }

    #[test]
    fn test_zero_attempts_invalid() {
        let config = RetryConfig::fixed(0, Duration::from_secs(1));
        assert!(!config.validate().is_valid());
    }
}
