// ABOUTME: External API client modules (Spoonacular recipe provider)
// ABOUTME: Defines the RecipeProvider seam used by route handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients
//!
//! Route handlers depend on the [`RecipeProvider`] trait rather than on the
//! concrete HTTP client, so tests can substitute an in-process provider.
//! Every provider method degrades to an empty or absent result instead of
//! returning an error.

pub mod spoonacular_client;

pub use spoonacular_client::{SpoonacularClient, SpoonacularClientConfig};

use async_trait::async_trait;
use recipe_core::models::{Recipe, RecipeDetails};

/// Optional filters shared by search and random queries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilters {
    /// Diet name, e.g. "vegetarian"
    pub diet: Option<String>,
    /// Cuisine name, e.g. "italian"
    pub cuisine: Option<String>,
    /// Meal type, e.g. "dessert"
    pub meal_type: Option<String>,
}

impl RecipeFilters {
    /// Build filters, dropping blank values
    #[must_use]
    pub fn new(diet: Option<&str>, cuisine: Option<&str>, meal_type: Option<&str>) -> Self {
        Self {
            diet: non_blank(diet),
            cuisine: non_blank(cuisine),
            meal_type: non_blank(meal_type),
        }
    }

    /// Filters with only a diet set
    #[must_use]
    pub fn diet(diet: Option<&str>) -> Self {
        Self::new(diet, None, None)
    }

    /// Present filter values in diet, cuisine, type order
    pub fn present(&self) -> impl Iterator<Item = &str> {
        [&self.diet, &self.cuisine, &self.meal_type]
            .into_iter()
            .filter_map(Option::as_deref)
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToOwned::to_owned)
}

/// Source of recipe data
///
/// Implementations never fail: transport, status, and parse problems are
/// logged and reported as an empty list or `None`.
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Search recipes by free text
    async fn search(&self, query: &str, filters: &RecipeFilters) -> Vec<Recipe>;

    /// Fetch full information for one recipe
    async fn details(&self, id: i64) -> Option<RecipeDetails>;

    /// Fetch random recipes matching the filters as tags
    async fn random(&self, filters: &RecipeFilters) -> Vec<Recipe>;
}
