// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for the provider client, sessions, diets, and server defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! This module organizes application constants by domain for better maintainability.

/// Service identification for logs and health checks
pub mod service_names {
    /// Service name used in structured logs
    pub const RECIPE_BOOK: &str = "recipe-book";
    /// Provider name used in structured logs and errors
    pub const SPOONACULAR: &str = "Spoonacular API";
}

/// Spoonacular API endpoints and fixed request parameters
pub mod spoonacular {
    /// Default API base URL
    pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";
    /// Complex search endpoint
    pub const SEARCH_PATH: &str = "/recipes/complexSearch";
    /// Random recipes endpoint
    pub const RANDOM_PATH: &str = "/recipes/random";
    /// Request timeout for every provider call
    pub const REQUEST_TIMEOUT_SECS: u64 = 10;
    /// Page size for search requests
    pub const SEARCH_PAGE_SIZE: u32 = 12;
    /// Page size for random requests
    pub const RANDOM_PAGE_SIZE: u32 = 10;
    /// Query parameter carrying the API key
    pub const API_KEY_PARAM: &str = "apiKey";

    /// Build the recipe information path for a recipe id
    #[must_use]
    pub fn information_path(id: i64) -> String {
        format!("/recipes/{id}/information")
    }
}

/// Diet filter values shared by the provider client and the liked-recipe store
pub mod diets {
    /// Vegetarian diet filter value
    pub const VEGETARIAN: &str = "vegetarian";
    /// Non-vegetarian diet filter value
    pub const NON_VEGETARIAN: &str = "non-vegetarian";
    /// Landing-page query used for non-vegetarian browsing without a search term
    pub const NON_VEGETARIAN_QUERY: &str = "chicken, beef, fish";
    /// Landing-page query used for vegetarian browsing without a search term
    pub const VEGETARIAN_QUERY: &str = "vegetable, beans, lentil";
    /// Landing-page query used with no search term and no diet
    pub const TRENDING_QUERY: &str = "trending";
}

/// Session identity and CSRF constants
pub mod session {
    /// Name of the session cookie
    pub const COOKIE_NAME: &str = "recipe_book_session";
    /// Default idle timeout for server-side session state (20 minutes)
    pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 20 * 60;
    /// Default maximum number of live sessions before LRU eviction
    pub const DEFAULT_MAX_SESSIONS: usize = 10_000;
    /// CSRF token length in bytes (32 bytes = 256 bits)
    pub const CSRF_TOKEN_LENGTH: usize = 32;
    /// Header carrying the CSRF token on AJAX requests
    pub const CSRF_HEADER: &str = "x-csrf-token";
}

/// Contact form limits
pub mod contact {
    /// Maximum length of the sender name
    pub const MAX_NAME_LEN: usize = 100;
    /// Maximum length of the sender email and subject
    pub const MAX_EMAIL_LEN: usize = 255;
    /// Maximum length of the subject line
    pub const MAX_SUBJECT_LEN: usize = 255;
}

/// Server defaults
pub mod defaults {
    /// Default HTTP host
    pub const HTTP_HOST: &str = "127.0.0.1";
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8080;
    /// Default database URL
    pub const DATABASE_URL: &str = "sqlite:./data/recipe_book.db";
}
