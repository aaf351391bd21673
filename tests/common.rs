// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory resources, a canned recipe provider, and session bootstrap helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `recipe_book`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use anyhow::Result;
use async_trait::async_trait;
use axum::Router;
use recipe_book::{
    config::{DatabaseUrl, ServerConfig},
    database::Database,
    external::{RecipeFilters, RecipeProvider},
    resources::ServerResources,
    routes::build_router,
    session::SessionContext,
};
use recipe_core::models::{Recipe, RecipeDetails};
use std::path::Path;
use std::sync::{Arc, Mutex, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Configuration with a dummy API key and an in-memory database
pub fn test_config() -> ServerConfig {
    ServerConfig::from_lookup(|key| match key {
        "SPOONACULAR_API_KEY" => Some("test-api-key".to_owned()),
        "DATABASE_URL" => Some("sqlite::memory:".to_owned()),
        "ENVIRONMENT" => Some("testing".to_owned()),
        _ => None,
    })
    .expect("test configuration should load")
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new(&DatabaseUrl::Memory).await?)
}

/// File-backed database under `dir`, for tests that need a second connection
pub async fn create_file_database(dir: &Path) -> Result<Database> {
    init_test_logging();
    Ok(Database::new(&DatabaseUrl::SQLite {
        path: dir.join("recipes.db"),
    })
    .await?)
}

/// Drop a table behind the application's back through a separate connection
pub async fn drop_table(dir: &Path, table: &str) -> Result<()> {
    let url = format!("sqlite:{}", dir.join("recipes.db").display());
    let pool = sqlx::SqlitePool::connect(&url).await?;
    sqlx::query(&format!("DROP TABLE {table}"))
        .execute(&pool)
        .await?;
    pool.close().await;
    Ok(())
}

/// Build a recipe summary for canned provider responses
pub fn sample_recipe(id: i64, title: &str, vegetarian: bool) -> Recipe {
    Recipe {
        id,
        title: title.to_owned(),
        image: Some(format!("https://img.example.com/{id}.jpg")),
        vegetarian,
        analyzed_instructions: Vec::new(),
        source_url: Some(format!("https://recipes.example.com/{id}")),
    }
}

/// Build recipe details for canned provider responses
pub fn sample_details(id: i64, title: &str) -> RecipeDetails {
    RecipeDetails {
        recipe: sample_recipe(id, title, true),
        summary: Some("<b>Quick</b> and easy".to_owned()),
        extended_ingredients: Vec::new(),
    }
}

/// Recipe provider returning canned data and recording what it was asked
#[derive(Default)]
pub struct StubProvider {
    pub recipes: Vec<Recipe>,
    pub details: Vec<RecipeDetails>,
    pub searches: Mutex<Vec<(String, RecipeFilters)>>,
    pub random_calls: Mutex<Vec<RecipeFilters>>,
}

impl StubProvider {
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            ..Self::default()
        }
    }

    pub fn with_details(details: Vec<RecipeDetails>) -> Self {
        Self {
            details,
            ..Self::default()
        }
    }

    pub fn last_search(&self) -> Option<(String, RecipeFilters)> {
        self.searches.lock().unwrap().last().cloned()
    }

    pub fn last_random(&self) -> Option<RecipeFilters> {
        self.random_calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl RecipeProvider for StubProvider {
    async fn search(&self, query: &str, filters: &RecipeFilters) -> Vec<Recipe> {
        self.searches
            .lock()
            .unwrap()
            .push((query.to_owned(), filters.clone()));
        self.recipes.clone()
    }

    async fn details(&self, id: i64) -> Option<RecipeDetails> {
        self.details.iter().find(|d| d.recipe.id == id).cloned()
    }

    async fn random(&self, filters: &RecipeFilters) -> Vec<Recipe> {
        self.random_calls.lock().unwrap().push(filters.clone());
        self.recipes.clone()
    }
}

/// A router wired to in-memory resources
pub struct TestApp {
    pub resources: Arc<ServerResources>,
    pub provider: Arc<StubProvider>,
}

impl TestApp {
    pub async fn new() -> Result<Self> {
        Self::with_provider(StubProvider::default()).await
    }

    pub async fn with_provider(provider: StubProvider) -> Result<Self> {
        Ok(Self::with_database(create_test_database().await?, provider))
    }

    /// Resources over a caller-provided database (e.g. a file under a temp dir)
    pub fn with_database(database: Database, provider: StubProvider) -> Self {
        init_test_logging();
        let provider = Arc::new(provider);
        let resources = Arc::new(ServerResources::new(
            database,
            provider.clone(),
            Arc::new(test_config()),
        ));
        Self {
            resources,
            provider,
        }
    }

    /// A fresh router over the shared resources
    pub fn router(&self) -> Router {
        build_router(self.resources.clone())
    }

    /// Start a session directly in the store, as a prior page visit would
    pub async fn start_session(&self) -> SessionContext {
        self.resources.sessions.load_or_create(None).await
    }

    /// Name of the session cookie
    pub fn cookie_name(&self) -> &str {
        &self.resources.config.session.cookie_name
    }
}
