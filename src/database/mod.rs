// ABOUTME: Database management for liked recipes and contact messages
// ABOUTME: Owns the SQLite pool, runs schema migrations, and hands out table managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! The database is the single source of truth for liked recipes; nothing is
//! cached in process. Each table has a manager struct that borrows a clone of
//! the pool, following the pattern `Database::liked_recipes().like(...)`.

mod contact_messages;
mod liked_recipes;

pub use contact_messages::{ContactMessage, ContactMessageForm, ContactMessagesManager, FieldError};
pub use liked_recipes::LikedRecipesManager;

use crate::config::DatabaseUrl;
use crate::errors::{AppError, AppResult};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;
use tracing::{debug, info};

/// Database handle shared by every request
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if needed) the database and run migrations
    ///
    /// # Errors
    ///
    /// Returns a database error if the parent directory cannot be created,
    /// the connection fails, or a migration fails.
    pub async fn new(database_url: &DatabaseUrl) -> AppResult<Self> {
        let pool = match database_url {
            // Every connection to `:memory:` is a separate database, so pin the pool to one
            DatabaseUrl::Memory => SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect(&database_url.to_connection_string())
                .await
                .map_err(|e| {
                    AppError::database(format!("Failed to open in-memory database: {e}")).with_source(e)
                })?,
            DatabaseUrl::SQLite { path } => {
                ensure_parent_dir(path).await?;
                // Ensure SQLite creates the database file if it doesn't exist
                let connection_options = format!("{}?mode=rwc", database_url.to_connection_string());
                SqlitePool::connect(&connection_options)
                    .await
                    .map_err(|e| {
                        AppError::database(format!(
                            "Failed to open database {}: {e}",
                            path.display()
                        ))
                        .with_source(e)
                    })?
            }
        };

        let db = Self { pool };
        db.migrate().await?;
        info!(database = %database_url, "Database ready");
        Ok(db)
    }

    /// Manager for the `liked_recipes` table
    #[must_use]
    pub fn liked_recipes(&self) -> LikedRecipesManager {
        LikedRecipesManager::new(self.pool.clone())
    }

    /// Manager for the `contact_messages` table
    #[must_use]
    pub fn contact_messages(&self) -> ContactMessagesManager {
        ContactMessagesManager::new(self.pool.clone())
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns a database error if any DDL statement fails.
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_liked_recipes().await?;
        self.migrate_contact_messages().await?;
        debug!("Database migrations applied");
        Ok(())
    }

    /// Cheap round trip used by the health endpoint
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Database ping failed: {e}")).with_source(e))?;
        Ok(())
    }

    async fn migrate_liked_recipes(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS liked_recipes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                recipe_id INTEGER NOT NULL CHECK (recipe_id > 0),
                recipe_title TEXT NOT NULL,
                recipe_image_uri TEXT,
                is_vegetarian INTEGER NOT NULL DEFAULT 0,
                date_liked TEXT NOT NULL,
                UNIQUE (user_id, recipe_id)
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::database(format!("Failed to create liked_recipes table: {e}")).with_source(e)
        })?;

        sqlx::query(
            r"
            CREATE INDEX IF NOT EXISTS idx_liked_recipes_user_date
            ON liked_recipes (user_id, date_liked DESC)
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::database(format!("Failed to create liked_recipes index: {e}")).with_source(e)
        })?;

        Ok(())
    }

    async fn migrate_contact_messages(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS contact_messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                subject TEXT,
                message TEXT NOT NULL,
                date_sent TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::database(format!("Failed to create contact_messages table: {e}"))
                .with_source(e)
        })?;

        Ok(())
    }
}

async fn ensure_parent_dir(path: &Path) -> AppResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::database(format!(
                    "Failed to create database directory {}: {e}",
                    parent.display()
                ))
                .with_source(e)
            })
        }
        _ => Ok(()),
    }
}
