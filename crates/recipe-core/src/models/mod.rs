// ABOUTME: Core data models for recipes, liked recipes, and diet filters
// ABOUTME: Re-exports the provider payload types and the persisted like model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Diet filter parsing
pub mod diet;
/// Persisted liked-recipe model
pub mod liked_recipe;
/// Provider recipe payloads and envelopes
pub mod recipe;

pub use diet::DietFilter;
pub use liked_recipe::{LikedRecipe, NewLikedRecipe};
pub use recipe::{
    AnalyzedInstruction, Ingredient, InstructionStep, RandomEnvelope, Recipe, RecipeDetails,
    RecipeEnvelope, RecipeSummary, SearchEnvelope,
};
