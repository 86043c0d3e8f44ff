//! Error types for the API client

use shipx_core::ValidationError;
use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Carrier answered with a status other than 200 or 201
    #[error("Invalid carrier response ({status}): {message}")]
    InvalidResponse {
        /// HTTP status code
        status: u16,
        /// Response body, as far as it could be read
        message: String,
    },

    /// Request never got a response (connection, timeout, TLS)
    #[error("Request failed: {0}")]
    Transport(String),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload could not be built from the shipment
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing environment variable
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.to_string())
    }
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a missing env var error
    pub fn missing_env(var: impl Into<String>) -> Self {
        Self::MissingEnvVar(var.into())
    }

    /// Create an invalid response error
    pub fn invalid_response(status: u16, message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            status,
            message: message.into(),
        }
    }

    /// Whether the carrier could not be reached or answered with a failure status
    #[must_use]
    pub fn is_invalid_response(&self) -> bool {
        matches!(self, Self::InvalidResponse { .. } | Self::Transport(_))
    }

    /// HTTP status of a failed response, if there was one
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidResponse { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the carrier reported the resource as missing
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(status) if (400..500).contains(&status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }
}
