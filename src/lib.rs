// ABOUTME: Main library entry point for the Culinary Explorer terminal recipe browser
// ABOUTME: Wires configuration, logging, the page controller, views and the terminal runtime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Culinary Explorer
//!
//! A single-screen recipe browser for the terminal. The full recipe collection
//! is fetched once from the backend; searching by name, filtering by cuisine
//! and paging all happen locally.
//!
//! ## Architecture
//!
//! - **config**: Environment and command line configuration
//! - **logging**: `tracing` subscriber writing to a log file
//! - **controller**: `PageController`, the single owner of browser state
//! - **views**: Stateless ratatui rendering of the controller state
//! - **tui**: Event loop, key bindings and the background fetch task
//!
//! Models, filtering and pagination live in `culinary-core`; the HTTP fetch
//! lives in `culinary-providers`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use culinary_explorer::config::ClientConfig;
//! use culinary_providers::HttpRecipeSource;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::from_env()?;
//!     let source = Arc::new(HttpRecipeSource::new(config.server_url.as_str())?);
//!     tokio::task::spawn_blocking(move || culinary_explorer::tui::run(source)).await?
//! }
//! ```

/// Configuration management
pub mod config;

/// Browser state and message handling
pub mod controller;

/// Structured logging setup
pub mod logging;

/// Terminal runtime and key bindings
pub mod tui;

/// Screen rendering
pub mod views;

pub use culinary_core::{constants, errors, models};
