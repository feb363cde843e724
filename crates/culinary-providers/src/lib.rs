// ABOUTME: Recipe data source implementations for the Culinary Explorer browser
// ABOUTME: RecipeSource trait, HTTP list endpoint client, in-memory source and shared HTTP client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe data sources.
//!
//! The browser fetches its recipe collection exactly once per session. This
//! crate provides the seam for that fetch (`RecipeSource`), the production
//! implementation that talks to the backend list endpoint, and an in-memory
//! implementation used by tests and offline runs.

// Re-export culinary-core modules so provider code can use `crate::models::*`
pub use culinary_core::constants;
pub use culinary_core::models;

/// Structured errors for recipe fetches
pub mod errors;
/// Shared HTTP client for backend calls
pub mod http_client;
/// Backend list endpoint implementation
pub mod http_source;
/// `RecipeSource` trait and in-memory implementation
pub mod source;

pub use errors::{ProviderError, ProviderResult};
pub use http_client::{initialize_shared_client, shared_client};
pub use http_source::HttpRecipeSource;
pub use source::{RecipeSource, StaticRecipeSource};
