// ABOUTME: Spoonacular API client for recipe search, detail, and random retrieval
// ABOUTME: Single-attempt requests with a fixed timeout that degrade to empty results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Spoonacular API Client
//!
//! Wraps the three provider endpoints the application uses:
//! - `GET /recipes/complexSearch` (search envelope under `results`)
//! - `GET /recipes/{id}/information` (full recipe object)
//! - `GET /recipes/random` (random envelope under `recipes`)
//!
//! Requests are made once with no retry. Internally every call returns an
//! `AppResult`; the public methods log the error and hand back an empty list
//! or `None`.
//!
//! # API Reference
//! Spoonacular food API: <https://spoonacular.com/food-api/docs>
//!
//! # Example
//! ```rust,no_run
//! use recipe_book::external::{RecipeFilters, RecipeProvider, SpoonacularClient, SpoonacularClientConfig};
//!
//! # async fn example() -> recipe_book::errors::AppResult<()> {
//! let client = SpoonacularClient::new(SpoonacularClientConfig {
//!     api_key: "your_api_key".to_owned(),
//!     ..SpoonacularClientConfig::default()
//! })?;
//! let recipes = client.search("pasta", &RecipeFilters::default()).await;
//! # Ok(())
//! # }
//! ```

use super::{RecipeFilters, RecipeProvider};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::utils::http_client::create_client_with_timeout;
use async_trait::async_trait;
use recipe_core::constants::{diets, service_names, spoonacular};
use recipe_core::models::{
    RandomEnvelope, Recipe, RecipeDetails, RecipeEnvelope, SearchEnvelope,
};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Spoonacular client configuration
#[derive(Clone)]
pub struct SpoonacularClientConfig {
    /// API key sent as the `apiKey` query parameter
    pub api_key: String,
    /// Base URL (default: <https://api.spoonacular.com>)
    pub base_url: String,
    /// Per-request timeout (default: 10 seconds)
    pub timeout: Duration,
}

impl Default for SpoonacularClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: spoonacular::DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(spoonacular::REQUEST_TIMEOUT_SECS),
        }
    }
}

impl std::fmt::Debug for SpoonacularClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpoonacularClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Spoonacular recipe API client
pub struct SpoonacularClient {
    config: SpoonacularClientConfig,
    http_client: reqwest::Client,
}

impl SpoonacularClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: SpoonacularClientConfig) -> AppResult<Self> {
        let http_client = create_client_with_timeout(config.timeout)?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Query parameters for a complex search
    ///
    /// The diet is only forwarded when it is "vegetarian"; the provider has no
    /// matching filter for "non-vegetarian".
    #[must_use]
    pub fn search_params(query: &str, filters: &RecipeFilters) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("query", query.to_owned()),
            ("number", spoonacular::SEARCH_PAGE_SIZE.to_string()),
            ("addRecipeInformation", "true".to_owned()),
        ];
        if filters
            .diet
            .as_deref()
            .is_some_and(|diet| diet.eq_ignore_ascii_case(diets::VEGETARIAN))
        {
            params.push(("diet", diets::VEGETARIAN.to_owned()));
        }
        if let Some(cuisine) = &filters.cuisine {
            params.push(("cuisine", cuisine.clone()));
        }
        if let Some(meal_type) = &filters.meal_type {
            params.push(("type", meal_type.clone()));
        }
        params
    }

    /// Query parameters for a random pick
    #[must_use]
    pub fn random_params(filters: &RecipeFilters) -> Vec<(&'static str, String)> {
        let mut params = vec![("number", spoonacular::RANDOM_PAGE_SIZE.to_string())];
        let tags = filters.present().collect::<Vec<_>>().join(",");
        if !tags.is_empty() {
            params.push(("tags", tags));
        }
        params
    }

    /// Query parameters for a detail lookup
    #[must_use]
    pub fn details_params() -> Vec<(&'static str, String)> {
        vec![
            ("includeNutrition", "false".to_owned()),
            ("analyzedInstructions", "true".to_owned()),
        ]
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// Perform one GET and decode the JSON body
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> AppResult<T> {
        let response = self
            .http_client
            .get(self.url(path))
            .query(params)
            .query(&[(spoonacular::API_KEY_PARAM, &self.config.api_key)])
            .send()
            .await
            .map_err(|e| {
                let code = if e.is_timeout() || e.is_connect() {
                    ErrorCode::ExternalServiceUnavailable
                } else {
                    ErrorCode::ExternalServiceError
                };
                AppError::new(code, format!("{}: {}", service_names::SPOONACULAR, e.without_url()))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(
                service_names::SPOONACULAR,
                format!("HTTP {status}"),
            ));
        }

        let body = response.bytes().await.map_err(|e| {
            AppError::external_service(service_names::SPOONACULAR, e.without_url().to_string())
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            AppError::external_service(
                service_names::SPOONACULAR,
                format!("JSON parse error: {e}"),
            )
        })
    }
}

#[async_trait]
impl RecipeProvider for SpoonacularClient {
    async fn search(&self, query: &str, filters: &RecipeFilters) -> Vec<Recipe> {
        let params = Self::search_params(query, filters);
        match self
            .fetch_json::<Option<SearchEnvelope>>(spoonacular::SEARCH_PATH, &params)
            .await
        {
            Ok(envelope) => {
                let recipes = envelope.into_recipes();
                debug!(count = recipes.len(), "Provider search returned recipes");
                recipes
            }
            Err(e) => {
                warn!(provider.operation = "search", error = %e, "Provider search failed");
                Vec::new()
            }
        }
    }

    async fn details(&self, id: i64) -> Option<RecipeDetails> {
        match self
            .fetch_json::<RecipeDetails>(
                &spoonacular::information_path(id),
                &Self::details_params(),
            )
            .await
        {
            Ok(details) => Some(details),
            Err(e) => {
                warn!(provider.operation = "details", recipe.id = id, error = %e, "Provider detail fetch failed");
                None
            }
        }
    }

    async fn random(&self, filters: &RecipeFilters) -> Vec<Recipe> {
        let params = Self::random_params(filters);
        match self
            .fetch_json::<Option<RandomEnvelope>>(spoonacular::RANDOM_PATH, &params)
            .await
        {
            Ok(envelope) => envelope.into_recipes(),
            Err(e) => {
                warn!(provider.operation = "random", error = %e, "Provider random fetch failed");
                Vec::new()
            }
        }
    }
}
