// ABOUTME: Integration tests for the liked-recipe store
// ABOUTME: Covers id validation, duplicate likes, user scoping, diet filtering, and ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use recipe_book::config::DatabaseUrl;
use recipe_book::database::Database;
use recipe_core::errors::likes::{LikeError, UnlikeError};
use recipe_core::errors::ErrorCode;
use recipe_core::models::{DietFilter, NewLikedRecipe};
use std::time::Duration;
use tempfile::TempDir;

fn new_like(recipe_id: i64, title: &str, is_vegetarian: bool) -> NewLikedRecipe {
    NewLikedRecipe {
        recipe_id,
        recipe_title: title.to_owned(),
        recipe_image_uri: Some(format!("https://img.example.com/{recipe_id}.jpg")),
        is_vegetarian,
    }
}

#[tokio::test]
async fn test_non_positive_ids_are_rejected_without_mutation() {
    let database = common::create_test_database().await.unwrap();
    let store = database.liked_recipes();

    for recipe_id in [0, -1, i64::MIN] {
        let result = store.like("user-a", &new_like(recipe_id, "Nope", true)).await;
        assert_eq!(result, Err(LikeError::InvalidRecipeId { recipe_id }));
    }
    assert_eq!(store.count_for("user-a").await.unwrap(), 0);

    let kept = store.like("user-a", &new_like(10, "Soup", true)).await.unwrap();
    for id in [0, -5] {
        assert_eq!(
            store.unlike("user-a", id).await,
            Err(UnlikeError::InvalidId { id })
        );
    }
    let remaining = store.list_for("user-a", DietFilter::All).await.unwrap();
    assert_eq!(remaining, vec![kept]);
}

#[tokio::test]
async fn test_duplicate_like_keeps_one_row() {
    let database = common::create_test_database().await.unwrap();
    let store = database.liked_recipes();

    let first = store.like("user-a", &new_like(42, "Pasta", true)).await.unwrap();
    assert!(first.id > 0);
    assert_eq!(first.user_id, "user-a");

    let second = store.like("user-a", &new_like(42, "Pasta again", false)).await;
    assert_eq!(second, Err(LikeError::AlreadyLiked { recipe_id: 42 }));

    let rows = store.list_for("user-a", DietFilter::All).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].recipe_title, "Pasta");

    // Another user may like the same recipe
    store.like("user-b", &new_like(42, "Pasta", true)).await.unwrap();
    assert_eq!(store.count_for("user-b").await.unwrap(), 1);
}

#[tokio::test]
async fn test_unlike_is_scoped_to_owner() {
    let database = common::create_test_database().await.unwrap();
    let store = database.liked_recipes();

    let liked = store.like("owner", &new_like(7, "Curry", false)).await.unwrap();

    assert_eq!(
        store.unlike("intruder", liked.id).await,
        Err(UnlikeError::NotFound { id: liked.id })
    );
    assert_eq!(store.count_for("owner").await.unwrap(), 1);

    store.unlike("owner", liked.id).await.unwrap();
    assert_eq!(store.count_for("owner").await.unwrap(), 0);

    assert_eq!(
        store.unlike("owner", liked.id).await,
        Err(UnlikeError::NotFound { id: liked.id })
    );
}

#[tokio::test]
async fn test_list_for_filters_by_diet_newest_first() {
    let database = common::create_test_database().await.unwrap();
    let store = database.liked_recipes();

    let salad = store.like("user-a", &new_like(1, "Salad", true)).await.unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    let steak = store.like("user-a", &new_like(2, "Steak", false)).await.unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    let dal = store.like("user-a", &new_like(3, "Dal", true)).await.unwrap();
    store.like("user-b", &new_like(4, "Ribs", false)).await.unwrap();

    let all = store.list_for("user-a", DietFilter::All).await.unwrap();
    let ids: Vec<i64> = all.iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![dal.id, steak.id, salad.id]);
    assert!(all.windows(2).all(|pair| pair[0].date_liked >= pair[1].date_liked));

    let vegetarian = store.list_for("user-a", DietFilter::Vegetarian).await.unwrap();
    let ids: Vec<i64> = vegetarian.iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![dal.id, salad.id]);

    let meat = store
        .list_for("user-a", DietFilter::NonVegetarian)
        .await
        .unwrap();
    let ids: Vec<i64> = meat.iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![steak.id]);
}

#[tokio::test]
async fn test_snapshot_fields_round_trip_through_storage() {
    let database = common::create_test_database().await.unwrap();
    let store = database.liked_recipes();

    let like = NewLikedRecipe {
        recipe_id: 99,
        recipe_title: "Tofu Bowl".to_owned(),
        recipe_image_uri: None,
        is_vegetarian: true,
    };
    let created = store.like("user-a", &like).await.unwrap();

    let stored = store.list_for("user-a", DietFilter::All).await.unwrap();
    assert_eq!(stored, vec![created]);
    assert_eq!(stored[0].recipe_image_uri, None);
}

#[tokio::test]
async fn test_concurrent_duplicate_likes_create_one_row() {
    common::init_test_logging();
    let temp_dir = TempDir::new().unwrap();
    let database = Database::new(&DatabaseUrl::SQLite {
        path: temp_dir.path().join("likes.db"),
    })
    .await
    .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = database.liked_recipes();
            tokio::spawn(async move { store.like("racer", &new_like(5, "Race", true)).await })
        })
        .collect();

    let mut created = 0;
    let mut duplicates = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(LikeError::AlreadyLiked { recipe_id: 5 }) => duplicates += 1,
            Err(other) => panic!("unexpected like error: {other}"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(duplicates, 7);
    assert_eq!(database.liked_recipes().count_for("racer").await.unwrap(), 1);
}

#[tokio::test]
async fn test_storage_errors_keep_database_cause() {
    let temp_dir = TempDir::new().unwrap();
    let database = common::create_file_database(temp_dir.path()).await.unwrap();
    common::drop_table(temp_dir.path(), "liked_recipes").await.unwrap();
    let store = database.liked_recipes();

    match store.like("user-a", &new_like(3, "Stew", false)).await {
        Err(LikeError::Storage(cause)) => assert!(cause.contains("liked_recipes")),
        other => panic!("expected storage error, got {other:?}"),
    }

    let error = store.list_for("user-a", DietFilter::All).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::DatabaseError);
    let source = std::error::Error::source(&error).map(ToString::to_string);
    assert!(source.is_some_and(|cause| cause.contains("liked_recipes")));
}
