// ABOUTME: Main library entry point for the Recipe Book web application
// ABOUTME: Recipe search via Spoonacular, anonymous sessions, and per-session liked recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Book
//!
//! A server-rendered recipe discovery site. Visitors search and browse
//! recipes from the Spoonacular API, open recipe details, and keep a list of
//! liked recipes tied to their anonymous browser session.
//!
//! ## Architecture
//!
//! - **External**: the [`external::RecipeProvider`] seam and its Spoonacular
//!   client, which degrades to empty results instead of failing
//! - **Database**: `SQLite` persistence for liked recipes and contact messages
//! - **Session**: anonymous session ids, lazily bound user ids, CSRF tokens
//! - **Routes**: axum handlers rendering HTML pages and JSON like/unlike results
//!
//! ## Quick Start
//!
//! 1. Set `SPOONACULAR_API_KEY`
//! 2. Run `cargo run --bin recipe-book-server`
//! 3. Open `http://127.0.0.1:8080/`

/// Configuration management
pub mod config;

/// Liked-recipe and contact message persistence
pub mod database;

/// Unified error handling
pub mod errors;

/// External recipe provider clients
pub mod external;

/// Health reporting
pub mod health;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared server state
pub mod resources;

/// HTTP routes
pub mod routes;

/// Cookie and CSRF primitives
pub mod security;

/// Anonymous session identity
pub mod session;

/// Shared helpers
pub mod utils;

/// HTML page rendering
pub mod views;
