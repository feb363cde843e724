// ABOUTME: Structured error types for recipe source operations
// ABOUTME: Distinguishes transport, HTTP status and payload failures with AppError conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use culinary_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised while fetching the recipe collection
///
/// The browser treats every variant the same way (log and show the empty
/// state); the variants exist so the log says what actually went wrong.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Request never produced a response (DNS, connect, timeout)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Backend answered with a non-success status
    #[error("{provider} API error ({status_code}): {message}")]
    ApiError {
        /// Source name
        provider: String,
        /// HTTP status code
        status_code: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// Response body was not the expected JSON shape
    #[error("{provider} returned malformed {field}: {source}")]
    ParseError {
        /// Source name
        provider: String,
        /// Which payload failed to parse
        field: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Configured base URL cannot be turned into an endpoint
    #[error("Invalid endpoint URL {url}: {reason}")]
    InvalidUrl {
        /// Offending URL
        url: String,
        /// Why it was rejected
        reason: String,
    },
}

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        let code = match &error {
            ProviderError::NetworkError(_) => ErrorCode::ExternalServiceUnavailable,
            ProviderError::ApiError { .. } => ErrorCode::ExternalServiceError,
            ProviderError::ParseError { .. } => ErrorCode::SerializationError,
            ProviderError::InvalidUrl { .. } => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

/// Result alias for recipe source operations
pub type ProviderResult<T> = Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_to_app_error() {
        let error: AppError = ProviderError::NetworkError("refused".to_owned()).into();
        assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);

        let error: AppError = ProviderError::ApiError {
            provider: "recipes".to_owned(),
            status_code: 404,
            message: "not found".to_owned(),
        }
        .into();
        assert_eq!(error.code, ErrorCode::ExternalServiceError);
        assert!(error.message.contains("404"));
    }

    #[test]
    fn test_parse_error_keeps_json_source() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: AppError = ProviderError::ParseError {
            provider: "recipes".to_owned(),
            field: "recipe_list_response",
            source: json_error,
        }
        .into();
        assert_eq!(error.code, ErrorCode::SerializationError);
        assert!(std::error::Error::source(&error).is_some());
    }
}
