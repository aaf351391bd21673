// ABOUTME: Diet filter parsed from query strings for listing and search pages
// ABOUTME: Case-insensitive mapping of "vegetarian" / "non-vegetarian" with an unfiltered default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::diets;
use serde::{Deserialize, Serialize};

/// Vegetarian filter applied to recipe listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietFilter {
    /// No filtering
    #[default]
    All,
    /// Only vegetarian recipes
    Vegetarian,
    /// Only recipes not marked vegetarian
    NonVegetarian,
}

impl DietFilter {
    /// Parse a user-supplied diet value; unknown or blank values mean no filter
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case(diets::VEGETARIAN) => Self::Vegetarian,
            Some(v) if v.eq_ignore_ascii_case(diets::NON_VEGETARIAN) => Self::NonVegetarian,
            _ => Self::All,
        }
    }

    /// Required value of the vegetarian flag, if this filter constrains it
    #[must_use]
    pub const fn vegetarian_flag(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Vegetarian => Some(true),
            Self::NonVegetarian => Some(false),
        }
    }

    /// Canonical string form, `"all"` when unfiltered
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Vegetarian => diets::VEGETARIAN,
            Self::NonVegetarian => diets::NON_VEGETARIAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(DietFilter::parse(Some("Vegetarian")), DietFilter::Vegetarian);
        assert_eq!(
            DietFilter::parse(Some("NON-VEGETARIAN")),
            DietFilter::NonVegetarian
        );
    }

    #[test]
    fn test_unknown_values_are_unfiltered() {
        assert_eq!(DietFilter::parse(None), DietFilter::All);
        assert_eq!(DietFilter::parse(Some("")), DietFilter::All);
        assert_eq!(DietFilter::parse(Some("vegan")), DietFilter::All);
        assert_eq!(DietFilter::All.vegetarian_flag(), None);
    }
}
