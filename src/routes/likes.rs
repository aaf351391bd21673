// ABOUTME: Like and unlike action routes returning JSON success flags
// ABOUTME: CSRF-protected form posts that write to the liked-recipe store for the session user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Like/unlike actions
//!
//! Expected failures (bad id, duplicate, not found, storage trouble) are
//! answered with HTTP 200 and `success: false`. Only a CSRF failure produces
//! an error status (403).

use crate::errors::AppError;
use crate::middleware::validate_csrf;
use crate::resources::ServerResources;
use crate::session::SessionContext;
use axum::extract::State;
use axum::http::{HeaderMap, Method};
use axum::routing::post;
use axum::{Extension, Form, Json, Router};
use recipe_core::models::NewLikedRecipe;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// JSON body returned by like and unlike
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    /// Whether the action took effect
    pub success: bool,
    /// Message shown to the user
    pub message: String,
}

impl ActionResponse {
    fn ok(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.into(),
        })
    }

    fn failed(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: false,
            message: message.into(),
        })
    }
}

/// Like form fields
///
/// Everything is optional text so a malformed id still reaches the handler
/// and is reported as an invalid id rather than a rejected request.
#[derive(Debug, Default, Deserialize)]
pub struct LikeForm {
    /// Provider recipe id
    pub recipe_id: Option<String>,
    /// Recipe title
    pub recipe_title: Option<String>,
    /// Recipe image
    pub recipe_image_uri: Option<String>,
    /// Vegetarian flag ("true", "on", "1")
    pub is_vegetarian: Option<String>,
    /// CSRF token when not sent as a header
    pub csrf_token: Option<String>,
}

impl LikeForm {
    fn has_recipe_data(&self) -> bool {
        self.recipe_id.is_some()
            || self.recipe_title.is_some()
            || self.recipe_image_uri.is_some()
            || self.is_vegetarian.is_some()
    }

    fn to_new_like(&self) -> NewLikedRecipe {
        NewLikedRecipe {
            recipe_id: parse_id(self.recipe_id.as_deref()),
            recipe_title: self
                .recipe_title
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_owned(),
            recipe_image_uri: self
                .recipe_image_uri
                .as_deref()
                .map(str::trim)
                .filter(|uri| !uri.is_empty())
                .map(ToOwned::to_owned),
            is_vegetarian: parse_flag(self.is_vegetarian.as_deref()),
        }
    }
}

/// Unlike form fields
#[derive(Debug, Default, Deserialize)]
pub struct UnlikeForm {
    /// Internal liked-recipe id
    pub id: Option<String>,
    /// CSRF token when not sent as a header
    pub csrf_token: Option<String>,
}

/// Missing or unparsable ids become 0 so the store rejects them as invalid
fn parse_id(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(0)
}

fn parse_flag(raw: Option<&str>) -> bool {
    raw.map(str::trim).is_some_and(|value| {
        ["true", "on", "1", "yes"]
            .iter()
            .any(|truthy| value.eq_ignore_ascii_case(truthy))
    })
}

/// Like routes implementation
pub struct LikeRoutes;

impl LikeRoutes {
    /// Create like/unlike routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/like", post(Self::handle_like))
            .route("/unlike", post(Self::handle_unlike))
            .with_state(resources)
    }

    /// Handle POST /like
    async fn handle_like(
        State(resources): State<Arc<ServerResources>>,
        Extension(session): Extension<SessionContext>,
        method: Method,
        headers: HeaderMap,
        form: Option<Form<LikeForm>>,
    ) -> Result<Json<ActionResponse>, AppError> {
        let form = form.map(|Form(form)| form).unwrap_or_default();
        validate_csrf(&session, &method, &headers, form.csrf_token.as_deref())?;

        if !form.has_recipe_data() {
            return Ok(ActionResponse::failed("No recipe data received."));
        }

        let user_id = session.resolve_user_id().await;
        let new_like = form.to_new_like();

        match resources
            .database
            .liked_recipes()
            .like(&user_id, &new_like)
            .await
        {
            Ok(_) => Ok(ActionResponse::ok("Recipe liked successfully!")),
            Err(e) => {
                debug!(user.id = %user_id, recipe.id = new_like.recipe_id, error = %e, "Like rejected");
                Ok(ActionResponse::failed(e.user_message()))
            }
        }
    }

    /// Handle POST /unlike
    async fn handle_unlike(
        State(resources): State<Arc<ServerResources>>,
        Extension(session): Extension<SessionContext>,
        method: Method,
        headers: HeaderMap,
        form: Option<Form<UnlikeForm>>,
    ) -> Result<Json<ActionResponse>, AppError> {
        let form = form.map(|Form(form)| form).unwrap_or_default();
        validate_csrf(&session, &method, &headers, form.csrf_token.as_deref())?;

        let user_id = session.resolve_user_id().await;
        let id = parse_id(form.id.as_deref());

        match resources.database.liked_recipes().unlike(&user_id, id).await {
            Ok(()) => Ok(ActionResponse::ok("Recipe removed successfully!")),
            Err(e) => {
                warn!(user.id = %user_id, liked.id = id, error = %e, "Unlike rejected");
                Ok(ActionResponse::failed(e.user_message()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_defaults_to_zero() {
        assert_eq!(parse_id(Some(" 42 ")), 42);
        assert_eq!(parse_id(Some("abc")), 0);
        assert_eq!(parse_id(None), 0);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(Some("True")));
        assert!(parse_flag(Some("on")));
        assert!(!parse_flag(Some("false")));
        assert!(!parse_flag(None));
    }

    #[test]
    fn test_empty_form_has_no_recipe_data() {
        let form = LikeForm {
            csrf_token: Some("t".to_owned()),
            ..LikeForm::default()
        };
        assert!(!form.has_recipe_data());
    }

    #[test]
    fn test_to_new_like_trims_and_drops_blank_image() {
        let form = LikeForm {
            recipe_id: Some("9".to_owned()),
            recipe_title: Some(" Soup ".to_owned()),
            recipe_image_uri: Some(" ".to_owned()),
            is_vegetarian: Some("true".to_owned()),
            csrf_token: None,
        };
        let like = form.to_new_like();
        assert_eq!(like.recipe_id, 9);
        assert_eq!(like.recipe_title, "Soup");
        assert_eq!(like.recipe_image_uri, None);
        assert!(like.is_vegetarian);
    }
}
