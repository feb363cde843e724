// ABOUTME: Core data models for the Culinary Explorer recipe browser
// ABOUTME: Re-exports Recipe, Cuisine, CuisineSet and the list endpoint envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Recipes are opaque records supplied by the backend. The models here only
//! describe their wire shape; nothing mutates a `Recipe` after it has been
//! deserialized.

mod cuisine;
mod recipe;

pub use cuisine::{Cuisine, CuisineSet};
pub use recipe::{Recipe, RecipeListResponse};
