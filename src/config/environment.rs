// ABOUTME: Environment configuration for the recipe browser client
// ABOUTME: Reads backend URL, HTTP timeouts and logging targets from env vars with CLI overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;
use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use crate::constants::{defaults, env_config, service_names};
use crate::errors::{AppError, AppResult};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Normal operational events
    #[default]
    Info,
    /// Debugging detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }

    /// One step more verbose, saturating at `Trace`
    #[must_use]
    pub const fn more_verbose(self) -> Self {
        match self {
            Self::Error => Self::Warn,
            Self::Warn => Self::Info,
            Self::Info => Self::Debug,
            Self::Debug | Self::Trace => Self::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Timeouts applied by the shared HTTP client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// TCP connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: defaults::HTTP_TIMEOUT_SECS,
            connect_timeout_secs: defaults::HTTP_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL; the list endpoint is `<server_url>/recipe/`
    pub server_url: Url,
    /// HTTP client timeouts
    pub http: HttpClientConfig,
    /// Where log output is written
    pub log_file: PathBuf,
    /// Base log level when `RUST_LOG` is not set
    pub log_level: LogLevel,
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be parsed,
    /// or if the resulting configuration fails validation.
    pub fn from_env() -> Result<Self> {
        let server_url = env_var_or(env_config::SERVER_URL, defaults::SERVER_URL);

        let config = Self {
            server_url: parse_server_url(&server_url)
                .with_context(|| format!("Invalid {} value", env_config::SERVER_URL))?,
            http: HttpClientConfig {
                timeout_secs: env_var_or(
                    env_config::HTTP_TIMEOUT_SECS,
                    &defaults::HTTP_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .with_context(|| format!("Invalid {} value", env_config::HTTP_TIMEOUT_SECS))?,
                connect_timeout_secs: env_var_or(
                    env_config::HTTP_CONNECT_TIMEOUT_SECS,
                    &defaults::HTTP_CONNECT_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .with_context(|| {
                    format!("Invalid {} value", env_config::HTTP_CONNECT_TIMEOUT_SECS)
                })?,
            },
            log_file: env::var(env_config::LOG_FILE)
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map_or_else(default_log_file, PathBuf::from),
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
        };

        config.validate()?;
        Ok(config)
    }

    /// Apply command line overrides on top of the environment values
    ///
    /// # Errors
    ///
    /// Returns an error if the overriding server URL is invalid.
    pub fn with_overrides(
        mut self,
        server_url: Option<&str>,
        log_file: Option<PathBuf>,
        verbose: bool,
    ) -> Result<Self> {
        if let Some(url) = server_url {
            self.server_url = parse_server_url(url).context("Invalid --server-url value")?;
        }
        if let Some(path) = log_file {
            self.log_file = path;
        }
        if verbose {
            self.log_level = self.log_level.more_verbose();
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error when a timeout is zero or the connect
    /// timeout exceeds the request timeout.
    pub fn validate(&self) -> AppResult<()> {
        if self.http.timeout_secs == 0 {
            return Err(AppError::config_invalid(format!(
                "{} must be greater than zero",
                env_config::HTTP_TIMEOUT_SECS
            )));
        }
        if self.http.connect_timeout_secs == 0 {
            return Err(AppError::config_invalid(format!(
                "{} must be greater than zero",
                env_config::HTTP_CONNECT_TIMEOUT_SECS
            )));
        }
        if self.http.connect_timeout_secs > self.http.timeout_secs {
            return Err(AppError::config_invalid(format!(
                "{} cannot exceed {}",
                env_config::HTTP_CONNECT_TIMEOUT_SECS,
                env_config::HTTP_TIMEOUT_SECS
            )));
        }
        Ok(())
    }

    /// Log a one-line summary of the effective configuration
    pub fn log_summary(&self) {
        info!(
            server_url = %self.server_url,
            http.timeout_secs = self.http.timeout_secs,
            http.connect_timeout_secs = self.http.connect_timeout_secs,
            log.file = %self.log_file.display(),
            "Configuration loaded"
        );
    }
}

/// Parse and check a backend base URL
///
/// # Errors
///
/// Returns a `ConfigInvalid` error for unparseable URLs and for schemes other
/// than http(s).
pub fn parse_server_url(raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| {
        AppError::config_invalid(format!("'{raw}' is not a valid URL")).with_source(e)
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::config_invalid(format!(
            "unsupported scheme '{other}' in '{raw}', expected http or https"
        ))),
    }
}

/// Default log file under the user cache directory
#[must_use]
pub fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join(service_names::CULINARY_EXPLORER)
        .join(defaults::LOG_FILE_NAME)
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
