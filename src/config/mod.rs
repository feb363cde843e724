// ABOUTME: Configuration module for the Culinary Explorer client
// ABOUTME: Exposes the environment-driven client configuration and its parsed value types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for Culinary Explorer
//!
//! Everything is read once at startup from environment variables, then
//! optionally overridden by command line flags.

/// Environment variable parsing and validation
pub mod environment;

pub use environment::{ClientConfig, HttpClientConfig, LogLevel};
