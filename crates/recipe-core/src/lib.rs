// ABOUTME: Core types and constants for the Recipe Book recipe discovery application
// ABOUTME: Foundation crate with error handling, recipe models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing shared types and constants for the Recipe Book
//! application. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and like/unlike errors
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Recipe payloads from the provider and persisted liked recipes

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Recipe, RecipeDetails, LikedRecipe, DietFilter)
pub mod models;
