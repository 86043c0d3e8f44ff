//! Validation errors for payload and configuration checks
//!
//! Payload builders fail fast with a single [`ValidationError`] before any
//! request leaves the process. Configuration checks collect every problem in a
//! [`ValidationResult`] so they can be reported together.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation error
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Field that failed validation
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
    /// Expected value (if applicable)
    pub expected: Option<String>,
    /// Actual value (if applicable)
    pub actual: Option<String>,
}

impl ValidationError {
    /// Create a validation error for a field
    pub fn new(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
            expected: None,
            actual: None,
        }
    }

    /// Attach the expected value
    #[must_use]
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Attach the actual value
    #[must_use]
    pub fn with_actual(mut self, actual: impl Into<String>) -> Self {
        self.actual = Some(actual.into());
        self
    }
}

/// Validation result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a new empty result
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get all errors
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Add an error
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Validate that a field is not blank
    #[must_use]
    pub fn required(mut self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.add_error(
                ValidationError::new(field, "REQUIRED", "Field is required")
                    .with_expected("non-empty value")
                    .with_actual("empty"),
            );
        }
        self
    }

    /// Validate that a number is at least `min`
    #[must_use]
    pub fn at_least(mut self, field: &str, value: u64, min: u64) -> Self {
        if value < min {
            self.add_error(
                ValidationError::new(field, "MIN_VALUE", format!("Must be at least {min}"))
                    .with_expected(format!(">= {min}"))
                    .with_actual(value.to_string()),
            );
        }
        self
    }

    /// Join all error messages into one line
    #[must_use]
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}
