// ABOUTME: RecipeSource trait abstracting where the recipe collection comes from
// ABOUTME: Includes an in-memory implementation for tests and offline sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;

use crate::errors::{ProviderError, ProviderResult};
use crate::models::Recipe;

/// A place the full recipe collection can be read from
///
/// Implementations return the whole collection in backend order. There is no
/// paging, retry or partial result: a call either yields every recipe or fails.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Read the complete recipe collection
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] when the collection cannot be read or parsed.
    async fn fetch_recipes(&self) -> ProviderResult<Vec<Recipe>>;
}

/// Recipe source backed by a fixed list, or a fixed failure
#[derive(Debug, Clone)]
pub struct StaticRecipeSource {
    outcome: Result<Vec<Recipe>, String>,
}

impl StaticRecipeSource {
    /// Source that always returns `recipes`
    #[must_use]
    pub const fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            outcome: Ok(recipes),
        }
    }

    /// Source that always fails with a network error carrying `message`
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
        }
    }
}

#[async_trait]
impl RecipeSource for StaticRecipeSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_recipes(&self) -> ProviderResult<Vec<Recipe>> {
        match &self.outcome {
            Ok(recipes) => Ok(recipes.clone()),
            Err(message) => Err(ProviderError::NetworkError(message.clone())),
        }
    }
}
