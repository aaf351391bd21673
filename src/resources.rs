// ABOUTME: Shared server resources handed to every route and middleware as axum state
// ABOUTME: Bundles the database, recipe provider, session store, health checker, and config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use crate::database::Database;
use crate::errors::AppResult;
use crate::external::{RecipeProvider, SpoonacularClient};
use crate::health::HealthChecker;
use crate::session::SessionStore;
use std::sync::Arc;

/// Long-lived server state, shared as `Arc<ServerResources>`
pub struct ServerResources {
    /// Liked recipes and contact messages
    pub database: Database,
    /// Recipe data source
    pub provider: Arc<dyn RecipeProvider>,
    /// Anonymous sessions
    pub sessions: SessionStore,
    /// Health reporting
    pub health: HealthChecker,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Assemble resources around an explicit provider
    #[must_use]
    pub fn new(
        database: Database,
        provider: Arc<dyn RecipeProvider>,
        config: Arc<ServerConfig>,
    ) -> Self {
        Self {
            database,
            provider,
            sessions: SessionStore::from_config(&config.session),
            health: HealthChecker::new(config.environment),
            config,
        }
    }

    /// Assemble resources backed by the Spoonacular client
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the provider's HTTP client cannot be built.
    pub fn with_spoonacular(database: Database, config: Arc<ServerConfig>) -> AppResult<Self> {
        let provider = Arc::new(SpoonacularClient::new(config.spoonacular.clone())?);
        Ok(Self::new(database, provider, config))
    }
}
