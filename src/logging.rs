// ABOUTME: Logging configuration and structured logging setup for the terminal client
// ABOUTME: Routes tracing output to a log file since the terminal is owned by the UI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging to a file
//!
//! The alternate screen owns stdout and stderr while the browser runs, so every
//! event goes to a log file instead. Format and level follow `LOG_FORMAT` and
//! `RUST_LOG` the same way a server deployment would.

use std::env;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::environment::{default_log_file, LogLevel};
use crate::constants::service_names;

/// Crates whose events are kept at the configured application level
const APP_TARGETS: [&str; 3] = ["culinary_explorer", "culinary_providers", "culinary_core"];

/// HTTP stack crates held at `warn` unless `RUST_LOG` names them
const NOISY_TARGETS: [&str; 4] = ["hyper", "hyper_util", "reqwest", "rustls"];

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: LogLevel,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Destination file, appended to
    pub log_file: PathBuf,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `JSON` lines
    Json,
    /// Multi-line human readable output
    #[default]
    Pretty,
    /// Single-line human readable output
    Compact,
}

impl LogFormat {
    /// Parse from string with fallback to `Pretty`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            service_name: service_names::CULINARY_EXPLORER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            log_file: default_log_file(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG")
            .map(|v| LogLevel::from_str_or_default(&v))
            .unwrap_or_default();
        let format = env::var("LOG_FORMAT")
            .map(|v| LogFormat::from_str_or_default(&v))
            .unwrap_or_default();

        Self {
            level,
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: env::var("LOG_INCLUDE_THREAD").is_ok(),
            ..Self::default()
        }
    }

    /// Override the destination file
    #[must_use]
    pub fn with_log_file(mut self, log_file: impl Into<PathBuf>) -> Self {
        self.log_file = log_file.into();
        self
    }

    /// Override the application log level
    #[must_use]
    pub const fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Build the filter: `RUST_LOG` or the configured level, plus noise reduction
    ///
    /// A set `RUST_LOG` is authoritative: the per-crate application levels
    /// are only added when it is absent, and noise directives skip any
    /// target it names explicitly.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let rust_log = env::var("RUST_LOG")
            .ok()
            .filter(|spec| !spec.trim().is_empty());
        let base = rust_log
            .as_deref()
            .map_or_else(|| EnvFilter::new(self.level.to_string()), EnvFilter::new);

        let filter = NOISY_TARGETS
            .iter()
            .filter(|target| {
                !rust_log
                    .as_deref()
                    .is_some_and(|spec| names_target(spec, target))
            })
            .fold(base, |filter, target| {
                filter.add_directive(
                    format!("{target}=warn")
                        .parse()
                        .unwrap_or_else(|_| tracing::Level::WARN.into()),
                )
            });

        if rust_log.is_some() {
            return filter;
        }

        APP_TARGETS.iter().fold(filter, |filter, target| {
            filter.add_directive(
                format!("{target}={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| self.level.to_tracing_level().into()),
            )
        })
    }

    /// Initialize the global tracing subscriber writing to `log_file`
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened or a global
    /// subscriber is already installed.
    pub fn init(&self) -> Result<()> {
        let writer = Mutex::new(open_log_file(&self.log_file)?);
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(writer)
                    .with_span_events(FmtSpan::NONE)
                    .json();

                registry
                    .with(json_layer)
                    .try_init()
                    .context("Failed to install tracing subscriber")?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(writer)
                    .with_span_events(FmtSpan::NONE);

                registry
                    .with(pretty_layer)
                    .try_init()
                    .context("Failed to install tracing subscriber")?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(writer)
                    .with_span_events(FmtSpan::NONE);

                registry
                    .with(compact_layer)
                    .try_init()
                    .context("Failed to install tracing subscriber")?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = ?self.format,
            log.file = %self.log_file.display(),
            "Culinary Explorer starting up"
        );
    }
}

/// Open `path` for appending, creating parent directories as needed
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Whether a `RUST_LOG` spec has a directive for exactly `target`
fn names_target(spec: &str, target: &str) -> bool {
    spec.split(',')
        .any(|directive| directive.trim().split(['=', '[']).next() == Some(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_or_default("COMPACT"), LogFormat::Compact);
        assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
    }

    #[test]
    fn test_open_log_file_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("explorer.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_builder_overrides() {
        let config = LoggingConfig::default()
            .with_log_file("/tmp/explorer.log")
            .with_level(LogLevel::Debug);
        assert_eq!(config.log_file, PathBuf::from("/tmp/explorer.log"));
        assert_eq!(config.level, LogLevel::Debug);
    }

    #[test]
    #[serial]
    fn test_rust_log_target_levels_are_kept() {
        env::set_var("RUST_LOG", "culinary_explorer=trace,reqwest=debug");
        let filter = LoggingConfig::default().env_filter().to_string().to_lowercase();
        env::remove_var("RUST_LOG");

        assert!(filter.contains("culinary_explorer=trace"));
        assert!(!filter.contains("culinary_explorer=info"));
        assert!(filter.contains("reqwest=debug"));
        assert!(!filter.contains("reqwest=warn"));
        assert!(filter.contains("hyper=warn"));
    }

    #[test]
    #[serial]
    fn test_configured_level_applies_without_rust_log() {
        env::remove_var("RUST_LOG");
        let filter = LoggingConfig::default()
            .with_level(LogLevel::Debug)
            .env_filter()
            .to_string()
            .to_lowercase();

        assert!(filter.contains("culinary_explorer=debug"));
        assert!(filter.contains("culinary_core=debug"));
        assert!(filter.contains("reqwest=warn"));
    }

    #[test]
    fn test_names_target_matches_whole_target() {
        assert!(names_target("info,reqwest=debug", "reqwest"));
        assert!(names_target("hyper[span]=trace", "hyper"));
        assert!(!names_target("hyper_util=debug", "hyper"));
        assert!(!names_target("debug", "reqwest"));
    }
}
