// ABOUTME: Client-side recipe filtering by name substring and cuisine selection
// ABOUTME: Pure linear scans returning indices into the full list in original order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe filtering
//!
//! Filtering runs in two passes over the full list: a case-insensitive name
//! substring match, then a cuisine membership test. Either pass is skipped when
//! its input is empty. The result is a list of indices into the input slice,
//! strictly ascending, so callers keep the original order without cloning
//! recipes.

use crate::models::{CuisineSet, Recipe};

/// Case-insensitive name substring test against an already-lowercased needle
fn name_matches(recipe: &Recipe, needle: &str) -> bool {
    needle.is_empty() || recipe.name.to_lowercase().contains(needle)
}

/// Whether a single recipe passes both the search query and cuisine selection
#[must_use]
pub fn matches(recipe: &Recipe, query: &str, cuisines: &CuisineSet) -> bool {
    name_matches(recipe, &query.to_lowercase()) && cuisines.admits(&recipe.cuisine_type)
}

/// Indices of recipes whose name contains `query` (case-insensitive) and whose
/// cuisine is in `cuisines`
///
/// An empty `query` places no restriction on names; an empty `cuisines` set
/// places no restriction on cuisine.
#[must_use]
pub fn filter_recipes(recipes: &[Recipe], query: &str, cuisines: &CuisineSet) -> Vec<usize> {
    let needle = query.to_lowercase();

    recipes
        .iter()
        .enumerate()
        .filter(|(_, recipe)| name_matches(recipe, &needle))
        .filter(|(_, recipe)| cuisines.admits(&recipe.cuisine_type))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cuisine;

    fn sample() -> Vec<Recipe> {
        vec![
            Recipe::new("1", "Tomato Soup", Cuisine::American),
            Recipe::new("2", "Tacos", Cuisine::Mexican),
            Recipe::new("3", "Butter Chicken", Cuisine::Indian),
        ]
    }

    #[test]
    fn test_empty_inputs_are_identity() {
        let recipes = sample();
        assert_eq!(
            filter_recipes(&recipes, "", &CuisineSet::new()),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let recipes = sample();
        assert_eq!(
            filter_recipes(&recipes, "TAC", &CuisineSet::new()),
            vec![1]
        );
        assert_eq!(
            filter_recipes(&recipes, "soup", &CuisineSet::new()),
            vec![0]
        );
    }

    #[test]
    fn test_query_and_cuisine_combine() {
        let recipes = sample();
        let cuisines: CuisineSet = [Cuisine::Indian].into_iter().collect();
        assert_eq!(filter_recipes(&recipes, "t", &cuisines), vec![2]);
        assert!(filter_recipes(&recipes, "taco", &cuisines).is_empty());
    }

    #[test]
    fn test_unknown_cuisine_only_passes_empty_selection() {
        let recipes = vec![Recipe::new(
            "9",
            "Injera",
            Cuisine::Other("Ethiopian".to_owned()),
        )];
        assert_eq!(filter_recipes(&recipes, "", &CuisineSet::new()), vec![0]);

        let all_known: CuisineSet = Cuisine::ALL.into_iter().collect();
        assert!(filter_recipes(&recipes, "", &all_known).is_empty());
    }

    #[test]
    fn test_single_recipe_match() {
        let recipe = Recipe::new("2", "Tacos", Cuisine::Mexican);
        assert!(matches(&recipe, "aco", &CuisineSet::new()));
        let thai: CuisineSet = [Cuisine::Thai].into_iter().collect();
        assert!(!matches(&recipe, "aco", &thai));
    }
}
