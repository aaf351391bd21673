// ABOUTME: Server-rendered page routes for search, listing, detail, liked, and about pages
// ABOUTME: Resolves query filters, calls the recipe provider or liked-recipe store, and renders HTML
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::external::RecipeFilters;
use crate::resources::ServerResources;
use crate::session::SessionContext;
use crate::views::{IndexPage, PageRenderer, RecipesPage};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Extension, Router};
use recipe_core::constants::diets;
use recipe_core::models::DietFilter;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error};

/// Query parameters for the landing page
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    /// Free-text search
    pub search: Option<String>,
    /// Diet name
    pub diet: Option<String>,
}

/// Query parameters for the filtered listing page
#[derive(Debug, Default, Deserialize)]
pub struct RecipesQuery {
    /// Diet name
    pub diet: Option<String>,
    /// Cuisine name
    pub cuisine: Option<String>,
    /// Meal type
    #[serde(rename = "type")]
    pub meal_type: Option<String>,
}

/// Query parameters for the liked page
#[derive(Debug, Default, Deserialize)]
pub struct LikedQuery {
    /// Diet name
    pub diet: Option<String>,
}

/// What the landing page asks the provider for, and how it labels the result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingSearch {
    /// Query text sent to the provider
    pub query: String,
    /// Diet forwarded to the provider, lowercased
    pub diet: Option<String>,
    /// Heading shown above the results
    pub display_query: String,
}

impl LandingSearch {
    /// Decide the provider query for a landing-page request
    ///
    /// A search term wins. Without one, a diet picks a canned query
    /// ("non-vegetarian" maps to meat keywords since the provider has no such
    /// diet), and with neither the page shows trending recipes.
    #[must_use]
    pub fn resolve(search: Option<&str>, diet: Option<&str>) -> Self {
        let search = search.map(str::trim).filter(|s| !s.is_empty());
        let diet = diet
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_lowercase);

        match (search, diet) {
            (Some(term), diet) => Self {
                query: term.to_owned(),
                display_query: format!("Search results for '{term}'"),
                diet,
            },
            (None, Some(diet)) => {
                let query = if diet == diets::NON_VEGETARIAN {
                    diets::NON_VEGETARIAN_QUERY
                } else {
                    diets::VEGETARIAN_QUERY
                };
                Self {
                    query: query.to_owned(),
                    display_query: format!("Trending {diet} recipes"),
                    diet: Some(diet),
                }
            }
            (None, None) => Self {
                query: diets::TRENDING_QUERY.to_owned(),
                display_query: "Trending Recipes".to_owned(),
                diet: None,
            },
        }
    }
}

/// Page routes implementation
pub struct PageRoutes;

impl PageRoutes {
    /// Create all page routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_index))
            .route("/recipes", get(Self::handle_recipes))
            .route("/recipes/:id", get(Self::handle_recipe_detail))
            .route("/liked", get(Self::handle_liked))
            .route("/about", get(Self::handle_about))
            .with_state(resources)
    }

    /// Handle GET / - landing page with search and diet filter
    async fn handle_index(
        State(resources): State<Arc<ServerResources>>,
        Extension(session): Extension<SessionContext>,
        Query(query): Query<IndexQuery>,
    ) -> Html<String> {
        let landing = LandingSearch::resolve(query.search.as_deref(), query.diet.as_deref());
        debug!(query = %landing.query, diet = ?landing.diet, "Landing page search");

        let recipes = resources
            .provider
            .search(&landing.query, &RecipeFilters::diet(landing.diet.as_deref()))
            .await;

        Html(PageRenderer::index(
            &IndexPage {
                search_query: query.search.as_deref().unwrap_or_default(),
                display_query: &landing.display_query,
                diet: DietFilter::parse(query.diet.as_deref()),
                recipes: &recipes,
            },
            session.csrf_token(),
        ))
    }

    /// Handle GET /recipes - random recipes filtered by diet, cuisine, and type
    async fn handle_recipes(
        State(resources): State<Arc<ServerResources>>,
        Extension(session): Extension<SessionContext>,
        Query(query): Query<RecipesQuery>,
    ) -> Html<String> {
        let filters = RecipeFilters::new(
            query.diet.as_deref(),
            query.cuisine.as_deref(),
            query.meal_type.as_deref(),
        );
        let recipes = resources.provider.random(&filters).await;
        let display_query = format!(
            "Results for {}",
            filters.diet.as_deref().unwrap_or("All Diets")
        );

        Html(PageRenderer::recipes(
            &RecipesPage {
                display_query: &display_query,
                diet: DietFilter::parse(query.diet.as_deref()),
                cuisine: query.cuisine.as_deref().unwrap_or_default(),
                meal_type: query.meal_type.as_deref().unwrap_or_default(),
                recipes: &recipes,
            },
            session.csrf_token(),
        ))
    }

    /// Handle GET /recipes/:id - recipe detail page
    async fn handle_recipe_detail(
        State(resources): State<Arc<ServerResources>>,
        Extension(session): Extension<SessionContext>,
        Path(id): Path<String>,
    ) -> Response {
        let Some(id) = id.trim().parse::<i64>().ok().filter(|id| *id > 0) else {
            return Redirect::to("/").into_response();
        };

        match resources.provider.details(id).await {
            Some(details) => {
                Html(PageRenderer::recipe_detail(&details, session.csrf_token())).into_response()
            }
            None => (
                StatusCode::NOT_FOUND,
                Html(PageRenderer::not_found(session.csrf_token())),
            )
                .into_response(),
        }
    }

    /// Handle GET /liked - the session user's liked recipes
    async fn handle_liked(
        State(resources): State<Arc<ServerResources>>,
        Extension(session): Extension<SessionContext>,
        Query(query): Query<LikedQuery>,
    ) -> Response {
        let user_id = session.resolve_user_id().await;
        let diet = DietFilter::parse(query.diet.as_deref());

        match resources.database.liked_recipes().list_for(&user_id, diet).await {
            Ok(liked) => Html(PageRenderer::liked(&liked, diet, session.csrf_token())).into_response(),
            Err(e) => {
                error!(user.id = %user_id, error = %e, "Failed to load liked recipes");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(PageRenderer::error(
                        "Something went wrong",
                        "We couldn't load your liked recipes. Please try again.",
                        session.csrf_token(),
                    )),
                )
                    .into_response()
            }
        }
    }

    /// Handle GET /about
    async fn handle_about(Extension(session): Extension<SessionContext>) -> Html<String> {
        Html(PageRenderer::about(session.csrf_token()))
    }
}
