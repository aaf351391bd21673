// ABOUTME: Like/unlike error types for the liked-recipe store
// ABOUTME: Provides structured errors that integrate with the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Liked-Recipe Error Types
//!
//! Expected failures of the like and unlike operations. Route handlers turn
//! these into `{ success: false, message }` bodies instead of HTTP errors, so
//! each variant carries the message shown to the user via [`LikeError::user_message`].

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors returned when liking a recipe
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LikeError {
    /// Recipe id was zero or negative
    #[error("invalid recipe id {recipe_id}")]
    InvalidRecipeId {
        /// Rejected recipe id
        recipe_id: i64,
    },
    /// The user already liked this recipe
    #[error("recipe {recipe_id} already liked by this user")]
    AlreadyLiked {
        /// Recipe id that is already liked
        recipe_id: i64,
    },
    /// The storage layer failed
    #[error("storage error: {0}")]
    Storage(String),
}

impl LikeError {
    /// Message shown to the user in the JSON response
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidRecipeId { .. } => "Invalid Recipe ID.".to_owned(),
            Self::AlreadyLiked { .. } => "You already liked this recipe.".to_owned(),
            Self::Storage(cause) => format!("Error saving like: {cause}"),
        }
    }
}

/// Errors returned when removing a liked recipe
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnlikeError {
    /// Internal id was zero or negative
    #[error("invalid liked recipe id {id}")]
    InvalidId {
        /// Rejected internal id
        id: i64,
    },
    /// No row with this id belongs to the user
    #[error("liked recipe {id} not found for this user")]
    NotFound {
        /// Internal id that was not found
        id: i64,
    },
    /// The storage layer failed
    #[error("storage error: {0}")]
    Storage(String),
}

impl UnlikeError {
    /// Message shown to the user in the JSON response
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidId { .. } => "Invalid recipe ID.".to_owned(),
            Self::NotFound { .. } => "Recipe not found.".to_owned(),
            Self::Storage(cause) => format!("Error removing recipe: {cause}"),
        }
    }
}

impl From<LikeError> for AppError {
    fn from(error: LikeError) -> Self {
        let code = match &error {
            LikeError::InvalidRecipeId { .. } => ErrorCode::InvalidInput,
            LikeError::AlreadyLiked { .. } => ErrorCode::ResourceAlreadyExists,
            LikeError::Storage(_) => ErrorCode::DatabaseError,
        };
        Self::new(code, error.to_string())
    }
}

impl From<UnlikeError> for AppError {
    fn from(error: UnlikeError) -> Self {
        let code = match &error {
            UnlikeError::InvalidId { .. } => ErrorCode::InvalidInput,
            UnlikeError::NotFound { .. } => ErrorCode::ResourceNotFound,
            UnlikeError::Storage(_) => ErrorCode::DatabaseError,
        };
        Self::new(code, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_error_messages() {
        assert_eq!(
            LikeError::AlreadyLiked { recipe_id: 7 }.user_message(),
            "You already liked this recipe."
        );
        assert_eq!(
            LikeError::Storage("disk full".to_owned()).user_message(),
            "Error saving like: disk full"
        );
    }

    #[test]
    fn test_unlike_error_maps_to_not_found_code() {
        let error: AppError = UnlikeError::NotFound { id: 3 }.into();
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
    }
}
