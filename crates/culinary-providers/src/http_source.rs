// ABOUTME: HTTP recipe source reading the backend list endpoint
// ABOUTME: Issues a single GET <base-url>/recipe/ and decodes the { recipes } envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Backend list endpoint client
//!
//! The backend exposes one read endpoint, `GET <base-url>/recipe/`, answering
//! `{ "recipes": Recipe[] }`. No query parameters are sent: searching,
//! filtering and paging all happen client-side.

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, info, warn};

use crate::constants::endpoints;
use crate::errors::{ProviderError, ProviderResult};
use crate::http_client::shared_client;
use crate::models::{Recipe, RecipeListResponse};
use crate::source::RecipeSource;

/// Provider name reported in errors
const PROVIDER_NAME: &str = "recipe-api";

/// Recipe source backed by the backend list endpoint
#[derive(Debug, Clone)]
pub struct HttpRecipeSource {
    endpoint: Url,
    client: Client,
}

impl HttpRecipeSource {
    /// Create a source for `base_url` using the shared HTTP client
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidUrl`] when `base_url` is not an absolute
    /// http(s) URL.
    pub fn new(base_url: &str) -> ProviderResult<Self> {
        Self::with_client(base_url, shared_client().clone())
    }

    /// Create a source with an explicit client
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidUrl`] when `base_url` is not an absolute
    /// http(s) URL.
    pub fn with_client(base_url: &str, client: Client) -> ProviderResult<Self> {
        Ok(Self {
            endpoint: list_endpoint(base_url)?,
            client,
        })
    }

    /// Full URL of the list endpoint
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Join the base URL and the list path, tolerating a trailing slash on the base
///
/// # Errors
///
/// Returns [`ProviderError::InvalidUrl`] for unparseable or non-http(s) URLs.
pub fn list_endpoint(base_url: &str) -> ProviderResult<Url> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let joined = format!("{trimmed}{}", endpoints::LIST_RECIPES);

    let url = Url::parse(&joined).map_err(|e| ProviderError::InvalidUrl {
        url: base_url.to_owned(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ProviderError::InvalidUrl {
            url: base_url.to_owned(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

#[async_trait]
impl RecipeSource for HttpRecipeSource {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn fetch_recipes(&self) -> ProviderResult<Vec<Recipe>> {
        debug!(url = %self.endpoint, "Requesting recipe list");

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            return Err(ProviderError::ApiError {
                provider: PROVIDER_NAME.to_owned(),
                status_code: status.as_u16(),
                message: text,
            });
        }

        let envelope: RecipeListResponse =
            serde_json::from_str(&text).map_err(|e| ProviderError::ParseError {
                provider: PROVIDER_NAME.to_owned(),
                field: "recipe_list_response",
                source: e,
            })?;

        if envelope.recipes.is_none() {
            warn!("Recipe list response has no 'recipes' field, treating as empty");
        }

        let recipes = envelope.into_recipes();
        info!(count = recipes.len(), "Fetched recipe list");
        Ok(recipes)
    }
}
