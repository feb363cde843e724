// ABOUTME: Recipe record and list endpoint envelope as delivered by the backend
// ABOUTME: Serde mapping for _id/cuisineType/imageUrl plus step numbering helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::Cuisine;

/// A dish as described by the backend
///
/// `steps` order is the preparation sequence and is never reordered.
/// `ingredients` keeps the backend order for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable identifier, used as the list key
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name, searched case-insensitively
    pub name: String,
    /// Cuisine tag, used as the exact-match filter key
    #[serde(rename = "cuisineType")]
    pub cuisine_type: Cuisine,
    /// External image reference
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
    /// Ingredient lines
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Ordered preparation steps
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Recipe {
    /// Create a recipe with no image, ingredients or steps
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, cuisine_type: Cuisine) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cuisine_type,
            image_url: String::new(),
            ingredients: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Set the image reference
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Replace the ingredient list
    #[must_use]
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the step list
    #[must_use]
    pub fn with_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = steps.into_iter().map(Into::into).collect();
        self
    }

    /// Steps paired with their 1-based ordinal
    pub fn numbered_steps(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.steps
            .iter()
            .enumerate()
            .map(|(index, step)| (index + 1, step.as_str()))
    }
}

/// Body of `GET <base-url>/recipe/`
///
/// `recipes` is optional on the wire: a body without it is a valid, empty
/// answer rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeListResponse {
    /// Recipe collection, absent or null when the backend has none
    #[serde(default)]
    pub recipes: Option<Vec<Recipe>>,
}

impl RecipeListResponse {
    /// Unwrap the collection, treating a missing field as empty
    #[must_use]
    pub fn into_recipes(self) -> Vec<Recipe> {
        self.recipes.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_backend_field_names() {
        let recipe: Recipe = serde_json::from_value(json!({
            "_id": "65f1",
            "name": "Pad Thai",
            "cuisineType": "Thai",
            "imageUrl": "https://img.example.com/pad-thai.jpg",
            "ingredients": ["rice noodles", "tamarind"],
            "steps": ["Soak noodles", "Stir fry"]
        }))
        .unwrap();

        assert_eq!(recipe.id, "65f1");
        assert_eq!(recipe.cuisine_type, Cuisine::Thai);
        assert_eq!(recipe.image_url, "https://img.example.com/pad-thai.jpg");
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.steps, vec!["Soak noodles", "Stir fry"]);
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let recipe: Recipe = serde_json::from_value(json!({
            "_id": "1",
            "name": "Toast",
            "cuisineType": "American"
        }))
        .unwrap();

        assert!(recipe.ingredients.is_empty());
        assert!(recipe.steps.is_empty());
        assert!(recipe.image_url.is_empty());
    }

    #[test]
    fn test_numbered_steps_start_at_one() {
        let recipe = Recipe::new("1", "Pasta", Cuisine::Italian).with_steps([
            "Boil water",
            "Add pasta",
            "Drain",
        ]);
        let numbered: Vec<(usize, &str)> = recipe.numbered_steps().collect();
        assert_eq!(
            numbered,
            vec![(1, "Boil water"), (2, "Add pasta"), (3, "Drain")]
        );
    }

    #[test]
    fn test_envelope_without_recipes_is_empty() {
        let response: RecipeListResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.into_recipes().is_empty());

        let response: RecipeListResponse =
            serde_json::from_value(json!({ "recipes": null })).unwrap();
        assert!(response.into_recipes().is_empty());
    }
}
