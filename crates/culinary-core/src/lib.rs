// ABOUTME: Core types and constants for the Culinary Explorer recipe browser
// ABOUTME: Foundation crate with error handling, recipe models, filtering and pagination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Culinary Core
//!
//! Foundation crate providing shared types for Culinary Explorer. Nothing in
//! here performs I/O: the models describe what the backend returns, and the
//! filter and pagination modules are pure functions over those models.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Endpoint paths, environment variable names and UI limits
//! - **models**: `Recipe`, `Cuisine`, `CuisineSet` and the list response envelope
//! - **filter**: Search and cuisine filtering over the full recipe list
//! - **pagination**: Breakpoint-driven page sizing and page slicing

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Recipe data models as delivered by the list endpoint
pub mod models;

/// Name search and cuisine filtering
pub mod filter;

/// Page-number pagination and viewport breakpoints
pub mod pagination;

pub use errors::{AppError, AppResult, ErrorCode};
pub use filter::filter_recipes;
pub use models::{Cuisine, CuisineSet, Recipe, RecipeListResponse};
pub use pagination::{page_count, page_slice, Breakpoint, Page, PageRequest};
