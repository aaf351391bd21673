// ABOUTME: Liked-recipe persistence with per-user uniqueness and newest-first listing
// ABOUTME: Like, unlike, and list operations over the liked_recipes table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult, LikeError, UnlikeError};
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use recipe_core::models::{DietFilter, LikedRecipe, NewLikedRecipe};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};

/// Liked-recipe database operations manager
#[derive(Clone)]
pub struct LikedRecipesManager {
    pool: SqlitePool,
}

impl LikedRecipesManager {
    /// Create a new liked-recipe manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Record that `user_id` likes a recipe
    ///
    /// The insert and the duplicate check are a single statement: the
    /// `UNIQUE (user_id, recipe_id)` constraint turns a concurrent duplicate
    /// into zero affected rows instead of a second row.
    ///
    /// # Errors
    ///
    /// - [`LikeError::InvalidRecipeId`] for ids <= 0 (no query is made)
    /// - [`LikeError::AlreadyLiked`] when the pair already exists
    /// - [`LikeError::Storage`] with the database cause otherwise
    pub async fn like(
        &self,
        user_id: &str,
        recipe: &NewLikedRecipe,
    ) -> Result<LikedRecipe, LikeError> {
        if recipe.recipe_id <= 0 {
            return Err(LikeError::InvalidRecipeId {
                recipe_id: recipe.recipe_id,
            });
        }

        // Stored with microsecond precision; truncate so the returned row matches
        let date_liked = Utc::now().trunc_subsecs(6);
        let result = sqlx::query(
            r"
            INSERT INTO liked_recipes
                (user_id, recipe_id, recipe_title, recipe_image_uri, is_vegetarian, date_liked)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id, recipe_id) DO NOTHING
            ",
        )
        .bind(user_id)
        .bind(recipe.recipe_id)
        .bind(&recipe.recipe_title)
        .bind(&recipe.recipe_image_uri)
        .bind(recipe.is_vegetarian)
        .bind(format_timestamp(date_liked))
        .execute(&self.pool)
        .await
        .map_err(|e| LikeError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            debug!(user.id = %user_id, recipe.id = recipe.recipe_id, "Duplicate like ignored");
            return Err(LikeError::AlreadyLiked {
                recipe_id: recipe.recipe_id,
            });
        }

        let liked = LikedRecipe {
            id: result.last_insert_rowid(),
            user_id: user_id.to_owned(),
            recipe_id: recipe.recipe_id,
            recipe_title: recipe.recipe_title.clone(),
            recipe_image_uri: recipe.recipe_image_uri.clone(),
            is_vegetarian: recipe.is_vegetarian,
            date_liked,
        };
        info!(user.id = %user_id, recipe.id = liked.recipe_id, liked.id = liked.id, "Recipe liked");
        Ok(liked)
    }

    /// Remove one of `user_id`'s likes by its internal id
    ///
    /// # Errors
    ///
    /// - [`UnlikeError::InvalidId`] for ids <= 0 (no query is made)
    /// - [`UnlikeError::NotFound`] when no row with that id belongs to `user_id`
    /// - [`UnlikeError::Storage`] with the database cause otherwise
    pub async fn unlike(&self, user_id: &str, id: i64) -> Result<(), UnlikeError> {
        if id <= 0 {
            return Err(UnlikeError::InvalidId { id });
        }

        let result = sqlx::query("DELETE FROM liked_recipes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| UnlikeError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UnlikeError::NotFound { id });
        }

        info!(user.id = %user_id, liked.id = id, "Recipe unliked");
        Ok(())
    }

    /// List `user_id`'s likes, newest first, optionally filtered by diet
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails or a row cannot be decoded.
    pub async fn list_for(&self, user_id: &str, diet: DietFilter) -> AppResult<Vec<LikedRecipe>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, recipe_id, recipe_title, recipe_image_uri, is_vegetarian, date_liked
            FROM liked_recipes
            WHERE user_id = $1 AND ($2 IS NULL OR is_vegetarian = $2)
            ORDER BY date_liked DESC, id DESC
            ",
        )
        .bind(user_id)
        .bind(diet.vegetarian_flag())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::database(format!("Failed to list liked recipes: {e}")).with_source(e)
        })?;

        rows.iter().map(row_to_liked_recipe).collect()
    }

    /// Count likes owned by `user_id`
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn count_for(&self, user_id: &str) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM liked_recipes WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::database(format!("Failed to count liked recipes: {e}")).with_source(e)
            })
    }
}

/// Fixed-width UTC timestamps so lexical order equals chronological order
fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Convert a database row to a `LikedRecipe`
fn row_to_liked_recipe(row: &SqliteRow) -> AppResult<LikedRecipe> {
    let date_liked_str: String = row.get("date_liked");
    let date_liked = DateTime::parse_from_rfc3339(&date_liked_str)
        .map_err(|e| {
            AppError::database(format!("Invalid date_liked '{date_liked_str}': {e}")).with_source(e)
        })?
        .with_timezone(&Utc);

    Ok(LikedRecipe {
        id: row.get("id"),
        user_id: row.get("user_id"),
        recipe_id: row.get("recipe_id"),
        recipe_title: row.get("recipe_title"),
        recipe_image_uri: row.get("recipe_image_uri"),
        is_vegetarian: row.get("is_vegetarian"),
        date_liked,
    })
}
