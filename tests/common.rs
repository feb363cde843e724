// ABOUTME: Shared test utilities and recipe fixtures for integration tests
// ABOUTME: Provides quiet logging setup and small recipe collections used across test files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `culinary_explorer`

use std::sync::Once;

use culinary_core::models::{Cuisine, Recipe};
use culinary_explorer::controller::{Message, PageController};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// The two-recipe list used by the search and cuisine scenarios
pub fn soup_and_tacos() -> Vec<Recipe> {
    vec![
        Recipe::new("soup", "Tomato Soup", Cuisine::American),
        Recipe::new("tacos", "Tacos", Cuisine::Mexican),
    ]
}

/// `count` recipes named "Dish 0".."Dish N", cycling through the known cuisines
pub fn numbered_recipes(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|i| {
            Recipe::new(
                format!("id-{i}"),
                format!("Dish {i}"),
                Cuisine::ALL[i % Cuisine::ALL.len()].clone(),
            )
        })
        .collect()
}

/// Pasta with three ordered steps
pub fn pasta() -> Recipe {
    Recipe::new("pasta", "Spaghetti Aglio e Olio", Cuisine::Italian)
        .with_image_url("https://img.example.com/pasta.jpg")
        .with_ingredients(["spaghetti", "garlic", "olive oil"])
        .with_steps(["Boil water", "Add pasta", "Drain"])
}

/// Controller for a terminal `width` columns wide with `recipes` loaded
pub fn loaded_controller(width: u16, recipes: Vec<Recipe>) -> PageController {
    init_test_logging();
    let mut controller = PageController::with_size(width, 48);
    controller.update(Message::FetchStarted);
    controller.update(Message::RecipesLoaded(recipes));
    controller
}
