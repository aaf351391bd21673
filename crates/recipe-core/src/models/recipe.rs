// ABOUTME: Recipe payload models returned by the Spoonacular API
// ABOUTME: Normalizes search and random envelopes into one Recipe sequence type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Models
//!
//! The provider answers with two different list envelopes (`results` for
//! complex search, `recipes` for random picks) and a richer object for the
//! detail endpoint. Both envelopes normalize to `Vec<Recipe>` through
//! [`RecipeEnvelope`], and [`RecipeDetails`] embeds a [`Recipe`] so it can be
//! used anywhere a summary is expected.

use serde::{Deserialize, Deserializer, Serialize};
use std::ops::Deref;

/// Treat an explicit JSON `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One numbered step of an instruction group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionStep {
    /// Step number as given by the provider
    #[serde(default)]
    pub number: u32,
    /// Step text
    #[serde(default, deserialize_with = "null_as_default")]
    pub step: String,
}

/// A named group of instruction steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedInstruction {
    /// Group name, often empty for single-group recipes
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Ordered steps
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<InstructionStep>,
}

/// Ingredient line from the detail endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Display string, e.g. "2 cups flour"
    #[serde(default, deserialize_with = "null_as_default")]
    pub original: String,
}

/// Recipe summary as returned by search and random endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Provider-assigned recipe id (0 when the provider omits it)
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    /// Recipe title
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Image URI
    #[serde(default)]
    pub image: Option<String>,
    /// Whether the provider marks the recipe vegetarian
    #[serde(default, deserialize_with = "null_as_default")]
    pub vegetarian: bool,
    /// Instruction groups, usually empty in search results
    #[serde(default, deserialize_with = "null_as_default")]
    pub analyzed_instructions: Vec<AnalyzedInstruction>,
    /// Original recipe page
    #[serde(default)]
    pub source_url: Option<String>,
}

/// Full recipe information from the detail endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetails {
    /// Summary fields shared with search results
    #[serde(flatten)]
    pub recipe: Recipe,
    /// HTML summary, rendered without escaping
    #[serde(default)]
    pub summary: Option<String>,
    /// Ingredient list
    #[serde(default, deserialize_with = "null_as_default")]
    pub extended_ingredients: Vec<Ingredient>,
}

impl RecipeDetails {
    /// Ingredient display strings in provider order
    pub fn ingredient_lines(&self) -> impl Iterator<Item = &str> {
        self.extended_ingredients
            .iter()
            .map(|ingredient| ingredient.original.as_str())
    }
}

impl Deref for RecipeDetails {
    type Target = Recipe;

    fn deref(&self) -> &Recipe {
        &self.recipe
    }
}

impl AsRef<Recipe> for RecipeDetails {
    fn as_ref(&self) -> &Recipe {
        &self.recipe
    }
}

impl From<RecipeDetails> for Recipe {
    fn from(details: RecipeDetails) -> Self {
        details.recipe
    }
}

/// Read access shared by recipe summaries and recipe details
pub trait RecipeSummary {
    /// Provider-assigned recipe id
    fn id(&self) -> i64;
    /// Recipe title
    fn title(&self) -> &str;
    /// Image URI, if any
    fn image(&self) -> Option<&str>;
    /// Vegetarian flag
    fn is_vegetarian(&self) -> bool;
    /// Instruction groups
    fn instructions(&self) -> &[AnalyzedInstruction];
}

impl RecipeSummary for Recipe {
    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    fn is_vegetarian(&self) -> bool {
        self.vegetarian
    }

    fn instructions(&self) -> &[AnalyzedInstruction] {
        &self.analyzed_instructions
    }
}

impl RecipeSummary for RecipeDetails {
    fn id(&self) -> i64 {
        self.recipe.id()
    }

    fn title(&self) -> &str {
        self.recipe.title()
    }

    fn image(&self) -> Option<&str> {
        self.recipe.image()
    }

    fn is_vegetarian(&self) -> bool {
        self.recipe.is_vegetarian()
    }

    fn instructions(&self) -> &[AnalyzedInstruction] {
        self.recipe.instructions()
    }
}

/// A provider response that wraps a list of recipes
pub trait RecipeEnvelope {
    /// Unwrap the recipe list, yielding an empty list when it is absent
    ///
    /// Entries without a positive id are dropped; they cannot be linked or liked.
    fn into_recipes(self) -> Vec<Recipe>;
}

fn with_valid_ids(recipes: Option<Vec<Recipe>>) -> Vec<Recipe> {
    recipes
        .unwrap_or_default()
        .into_iter()
        .filter(|recipe| recipe.id > 0)
        .collect()
}

/// Complex search response: `{ "results": [...] }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchEnvelope {
    /// Matching recipes
    #[serde(default)]
    pub results: Option<Vec<Recipe>>,
}

/// Random recipes response: `{ "recipes": [...] }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RandomEnvelope {
    /// Randomly picked recipes
    #[serde(default)]
    pub recipes: Option<Vec<Recipe>>,
}

impl RecipeEnvelope for SearchEnvelope {
    fn into_recipes(self) -> Vec<Recipe> {
        with_valid_ids(self.results)
    }
}

impl RecipeEnvelope for RandomEnvelope {
    fn into_recipes(self) -> Vec<Recipe> {
        with_valid_ids(self.recipes)
    }
}

/// A `null` response body normalizes to an empty list as well
impl<E: RecipeEnvelope> RecipeEnvelope for Option<E> {
    fn into_recipes(self) -> Vec<Recipe> {
        self.map(RecipeEnvelope::into_recipes).unwrap_or_default()
    }
}
