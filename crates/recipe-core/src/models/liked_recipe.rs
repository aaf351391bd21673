// ABOUTME: Persisted liked-recipe model with snapshot of recipe display fields
// ABOUTME: Separates the like request (NewLikedRecipe) from the stored row (LikedRecipe)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recipe liked by a session user
///
/// Title, image and vegetarian flag are copied at like time and never
/// refreshed from the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikedRecipe {
    /// Store-assigned id
    pub id: i64,
    /// Session user id that owns this like
    pub user_id: String,
    /// Provider recipe id
    pub recipe_id: i64,
    /// Recipe title at like time
    pub recipe_title: String,
    /// Recipe image at like time
    pub recipe_image_uri: Option<String>,
    /// Vegetarian flag at like time
    pub is_vegetarian: bool,
    /// When the like was recorded
    pub date_liked: DateTime<Utc>,
}

/// Recipe fields submitted with a like request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLikedRecipe {
    /// Provider recipe id
    pub recipe_id: i64,
    /// Recipe title
    pub recipe_title: String,
    /// Recipe image
    pub recipe_image_uri: Option<String>,
    /// Vegetarian flag
    pub is_vegetarian: bool,
}
