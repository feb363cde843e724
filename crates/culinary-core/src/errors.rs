// ABOUTME: Unified error type and error codes shared across the workspace
// ABOUTME: Provider and configuration failures are converted into AppError at crate boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! `AppError` carries a stable `ErrorCode`, a human-readable message and an
//! optional source error for chaining. Configuration problems surface as
//! `ConfigInvalid` at startup. Fetch failures are classified into a code for
//! the log, then degrade to the empty state without reaching the screen.

use std::error::Error as StdError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // External Services (5000-5999)
    /// The recipe backend returned an error status
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    /// The recipe backend could not be reached
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,

    // Configuration (6000-6999)
    /// Configuration value failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Payload could not be deserialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ExternalServiceError => "The recipe service encountered an error",
            Self::ExternalServiceUnavailable => "The recipe service is currently unavailable",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {message}", .code.description())]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Configuration value is present but unusable
    #[must_use]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::config_invalid("HTTP_TIMEOUT_SECS must be greater than zero");
        assert_eq!(
            error.to_string(),
            "Configuration is invalid: HTTP_TIMEOUT_SECS must be greater than zero"
        );
    }

    #[test]
    fn test_source_is_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad value");
        let error = AppError::config_invalid("bad value").with_source(io);
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
        assert!(StdError::source(&error).is_some());
    }

    #[test]
    fn test_codes_serialize_to_stable_names() {
        assert_eq!(
            serde_json::to_string(&ErrorCode::ExternalServiceUnavailable).unwrap(),
            "\"EXTERNAL_SERVICE_UNAVAILABLE\""
        );
    }
}
