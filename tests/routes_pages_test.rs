// ABOUTME: HTTP tests for the server-rendered pages and the session cookie middleware
// ABOUTME: Covers provider queries, detail id handling, liked listing, and request ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]

mod common;
mod helpers;

use axum::http::StatusCode;
use common::{sample_details, sample_recipe, StubProvider, TestApp};
use helpers::axum_test::AxumTestRequest;
use recipe_core::models::NewLikedRecipe;

#[tokio::test]
async fn test_first_visit_sets_session_cookie() {
    let app = TestApp::new().await.unwrap();
    let response = AxumTestRequest::get("/about").send(app.router()).await;

    assert_eq!(response.status(), 200);
    let cookie = response.header("set-cookie").unwrap().to_owned();
    assert!(cookie.starts_with(&format!("{}=", app.cookie_name())));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(!cookie.contains("Secure"));

    let session_id = response.set_cookie_value(app.cookie_name()).unwrap();
    let again = AxumTestRequest::get("/about")
        .cookie(app.cookie_name(), &session_id)
        .send(app.router())
        .await;
    assert!(again.header("set-cookie").is_none());
}

#[tokio::test]
async fn test_unknown_session_cookie_is_replaced() {
    let app = TestApp::new().await.unwrap();
    let response = AxumTestRequest::get("/about")
        .cookie(app.cookie_name(), "forged-session")
        .send(app.router())
        .await;

    let issued = response.set_cookie_value(app.cookie_name()).unwrap();
    assert_ne!(issued, "forged-session");
}

#[tokio::test]
async fn test_request_id_is_generated_and_propagated() {
    let app = TestApp::new().await.unwrap();

    let generated = AxumTestRequest::get("/health").send(app.router()).await;
    assert!(generated.header("x-request-id").is_some_and(|id| !id.is_empty()));

    let supplied = AxumTestRequest::get("/health")
        .header("x-request-id", "req-123")
        .send(app.router())
        .await;
    assert_eq!(supplied.header("x-request-id"), Some("req-123"));
}

#[tokio::test]
async fn test_landing_page_without_input_shows_trending() {
    let provider = StubProvider::with_recipes(vec![sample_recipe(1, "Lemon Pasta", true)]);
    let app = TestApp::with_provider(provider).await.unwrap();

    let html = AxumTestRequest::get("/")
        .send(app.router())
        .await
        .assert_status(StatusCode::OK)
        .text();

    assert!(html.contains("Trending Recipes"));
    assert!(html.contains("Lemon Pasta"));
    assert!(html.contains(r#"data-recipe-id="1""#));

    let (query, filters) = app.provider.last_search().unwrap();
    assert_eq!(query, "trending");
    assert_eq!(filters.diet, None);
}

#[tokio::test]
async fn test_landing_page_search_term() {
    let app = TestApp::new().await.unwrap();

    let html = AxumTestRequest::get("/?search=tofu%20curry&diet=Vegetarian")
        .send(app.router())
        .await
        .text();

    assert!(html.contains("Search results for"));
    assert!(html.contains("tofu curry"));
    assert!(html.contains("No recipes found. Try a different search."));

    let (query, filters) = app.provider.last_search().unwrap();
    assert_eq!(query, "tofu curry");
    assert_eq!(filters.diet.as_deref(), Some("vegetarian"));
}

#[tokio::test]
async fn test_landing_page_non_vegetarian_substitutes_query() {
    let app = TestApp::new().await.unwrap();

    let html = AxumTestRequest::get("/?diet=non-vegetarian")
        .send(app.router())
        .await
        .text();
    assert!(html.contains("Trending non-vegetarian recipes"));

    let (query, _) = app.provider.last_search().unwrap();
    assert_eq!(query, "chicken, beef, fish");
}

#[tokio::test]
async fn test_recipes_page_passes_filters_to_random() {
    let provider = StubProvider::with_recipes(vec![sample_recipe(8, "Tiramisu", true)]);
    let app = TestApp::with_provider(provider).await.unwrap();

    let html = AxumTestRequest::get("/recipes?diet=vegetarian&cuisine=italian&type=dessert")
        .send(app.router())
        .await
        .text();

    assert!(html.contains("Results for vegetarian"));
    assert!(html.contains("Tiramisu"));

    let filters = app.provider.last_random().unwrap();
    assert_eq!(filters.diet.as_deref(), Some("vegetarian"));
    assert_eq!(filters.cuisine.as_deref(), Some("italian"));
    assert_eq!(filters.meal_type.as_deref(), Some("dessert"));
}

#[tokio::test]
async fn test_recipes_page_without_diet() {
    let app = TestApp::new().await.unwrap();
    let html = AxumTestRequest::get("/recipes").send(app.router()).await.text();
    assert!(html.contains("Results for All Diets"));
}

#[tokio::test]
async fn test_detail_page_renders_provider_details() {
    let provider = StubProvider::with_details(vec![sample_details(42, "Garlic Soup")]);
    let app = TestApp::with_provider(provider).await.unwrap();

    let html = AxumTestRequest::get("/recipes/42")
        .send(app.router())
        .await
        .assert_status(StatusCode::OK)
        .text();

    assert!(html.contains("Garlic Soup"));
    assert!(html.contains("<b>Quick</b> and easy"));
    assert!(html.contains("https://recipes.example.com/42"));
}

#[tokio::test]
async fn test_detail_page_missing_recipe_is_not_found() {
    let app = TestApp::new().await.unwrap();

    let response = AxumTestRequest::get("/recipes/99").send(app.router()).await;
    assert_eq!(response.status(), 404);
    assert!(response.text().contains("Recipe not found"));
}

#[tokio::test]
async fn test_detail_page_invalid_id_redirects_home() {
    let app = TestApp::new().await.unwrap();

    for uri in ["/recipes/0", "/recipes/-4", "/recipes/abc"] {
        let response = AxumTestRequest::get(uri).send(app.router()).await;
        assert_eq!(response.status(), 303, "{uri}");
        assert_eq!(response.header("location"), Some("/"));
    }
}

#[tokio::test]
async fn test_liked_page_lists_only_session_likes() {
    let app = TestApp::new().await.unwrap();
    let session = app.start_session().await;
    let other = app.start_session().await;

    let likes = app.resources.database.liked_recipes();
    let mine = NewLikedRecipe {
        recipe_id: 11,
        recipe_title: "Veggie Chili".to_owned(),
        recipe_image_uri: None,
        is_vegetarian: true,
    };
    let theirs = NewLikedRecipe {
        recipe_id: 12,
        recipe_title: "Beef Stew".to_owned(),
        recipe_image_uri: None,
        is_vegetarian: false,
    };
    likes.like(&session.resolve_user_id().await, &mine).await.unwrap();
    likes.like(&other.resolve_user_id().await, &theirs).await.unwrap();

    let html = AxumTestRequest::get("/liked")
        .cookie(app.cookie_name(), session.session_id())
        .send(app.router())
        .await
        .text();
    assert!(html.contains("Veggie Chili"));
    assert!(!html.contains("Beef Stew"));

    let filtered = AxumTestRequest::get("/liked?diet=non-vegetarian")
        .cookie(app.cookie_name(), session.session_id())
        .send(app.router())
        .await
        .text();
    assert!(filtered.contains("You haven't liked any recipes yet."));
}

#[tokio::test]
async fn test_csrf_token_is_embedded_in_pages() {
    let app = TestApp::new().await.unwrap();
    let session = app.start_session().await;

    let html = AxumTestRequest::get("/about")
        .cookie(app.cookie_name(), session.session_id())
        .send(app.router())
        .await
        .text();
    assert!(html.contains(&format!(
        r#"<meta name="csrf-token" content="{}">"#,
        session.csrf_token()
    )));
}
