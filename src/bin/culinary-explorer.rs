// ABOUTME: Terminal entry point for the Culinary Explorer recipe browser
// ABOUTME: Parses flags, loads configuration, starts file logging and runs the browser
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Culinary Explorer Binary
//!
//! Fetches the recipe collection from the configured backend once and opens
//! the full-screen browser.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use culinary_explorer::{config::ClientConfig, logging::LoggingConfig, tui};
use culinary_providers::{initialize_shared_client, HttpRecipeSource};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "culinary-explorer")]
#[command(about = "Culinary Explorer - browse, search and filter recipes in the terminal")]
struct Args {
    /// Backend base URL (overrides `CULINARY_SERVER_URL`)
    #[arg(long)]
    server_url: Option<String>,

    /// Log file path (overrides `CULINARY_LOG_FILE`)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable more verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = ClientConfig::from_env()?.with_overrides(
        args.server_url.as_deref(),
        args.log_file,
        args.verbose,
    )?;

    LoggingConfig::from_env()
        .with_log_file(config.log_file.clone())
        .with_level(config.log_level)
        .init()?;
    config.log_summary();

    initialize_shared_client(config.http.timeout_secs, config.http.connect_timeout_secs);
    let source = HttpRecipeSource::new(config.server_url.as_str())
        .context("Failed to build recipe source")?;

    // The event loop blocks on terminal polling, so it gets a blocking thread
    // while the fetch task runs on the async workers.
    let source = Arc::new(source);
    let result = tokio::task::spawn_blocking(move || tui::run(source))
        .await
        .context("Terminal task panicked")
        .and_then(|outcome| outcome);
    match &result {
        Ok(()) => info!("Culinary Explorer exited"),
        Err(e) => error!(error = %e, "Culinary Explorer terminated with an error"),
    }
    result
}
