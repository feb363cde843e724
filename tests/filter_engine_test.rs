// ABOUTME: Integration tests for recipe filtering and page slicing
// ABOUTME: Checks search and cuisine filters, order preservation and page sizes per breakpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{numbered_recipes, soup_and_tacos};
use culinary_core::filter::{filter_recipes, matches};
use culinary_core::models::{Cuisine, CuisineSet, Recipe};
use culinary_core::pagination::{page_count, page_slice, Breakpoint, PageRequest};

fn names(recipes: &[Recipe], indices: &[usize]) -> Vec<String> {
    indices.iter().map(|&i| recipes[i].name.clone()).collect()
}

fn cuisines(values: &[Cuisine]) -> CuisineSet {
    values.iter().cloned().collect()
}

#[test]
fn test_search_matches_case_insensitive_substring() {
    let recipes = soup_and_tacos();
    let result = filter_recipes(&recipes, "tac", &CuisineSet::new());
    assert_eq!(names(&recipes, &result), vec!["Tacos"]);

    let result = filter_recipes(&recipes, "TOMATO", &CuisineSet::new());
    assert_eq!(names(&recipes, &result), vec!["Tomato Soup"]);

    let result = filter_recipes(&recipes, "o", &CuisineSet::new());
    assert_eq!(names(&recipes, &result), vec!["Tomato Soup", "Tacos"]);
}

#[test]
fn test_cuisine_selection_keeps_list_order() {
    let recipes = soup_and_tacos();
    let selected = cuisines(&[Cuisine::Mexican, Cuisine::American]);
    let result = filter_recipes(&recipes, "", &selected);
    assert_eq!(names(&recipes, &result), vec!["Tomato Soup", "Tacos"]);

    let result = filter_recipes(&recipes, "", &cuisines(&[Cuisine::Indian]));
    assert!(result.is_empty());
}

#[test]
fn test_no_query_and_no_cuisines_is_identity() {
    let recipes = numbered_recipes(17);
    let result = filter_recipes(&recipes, "", &CuisineSet::new());
    assert_eq!(result, (0..17).collect::<Vec<_>>());
}

#[test]
fn test_query_and_cuisines_combine() {
    let recipes = vec![
        Recipe::new("1", "Chicken Tikka", Cuisine::Indian),
        Recipe::new("2", "Chicken Tacos", Cuisine::Mexican),
        Recipe::new("3", "Kung Pao Chicken", Cuisine::Chinese),
        Recipe::new("4", "Paneer Tikka", Cuisine::Indian),
    ];
    let selected = cuisines(&[Cuisine::Indian, Cuisine::Chinese]);
    let result = filter_recipes(&recipes, "chicken", &selected);
    assert_eq!(names(&recipes, &result), vec!["Chicken Tikka", "Kung Pao Chicken"]);

    for (index, recipe) in recipes.iter().enumerate() {
        assert_eq!(result.contains(&index), matches(recipe, "chicken", &selected));
    }
}

#[test]
fn test_unknown_cuisine_only_passes_empty_selection() {
    let recipes = vec![Recipe::new("k", "Bibimbap", Cuisine::Other("Korean".to_owned()))];
    assert_eq!(filter_recipes(&recipes, "", &CuisineSet::new()), vec![0]);
    assert!(filter_recipes(&recipes, "", &cuisines(&Cuisine::ALL)).is_empty());
}

#[test]
fn test_filtered_is_ordered_subset() {
    let recipes = numbered_recipes(40);
    let selected = cuisines(&[Cuisine::Thai, Cuisine::Italian]);
    let result = filter_recipes(&recipes, "1", &selected);

    assert!(result.windows(2).all(|pair| pair[0] < pair[1]));
    for index in &result {
        let recipe = &recipes[*index];
        assert!(recipe.name.contains('1'));
        assert!(selected.contains(&recipe.cuisine_type));
    }
}

#[test]
fn test_second_page_of_twelve_has_two_items() {
    let recipes = numbered_recipes(12);
    let per_page = Breakpoint::Large.items_per_page();
    assert_eq!(per_page, 10);

    let page = page_slice(&recipes, 2, per_page);
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].name, "Dish 10");
    assert_eq!(page_count(recipes.len(), per_page), 2);
}

#[test]
fn test_visible_length_formula_holds_for_every_page() {
    let items: Vec<usize> = (0..23).collect();
    for breakpoint in [
        Breakpoint::ExtraSmall,
        Breakpoint::Small,
        Breakpoint::Medium,
        Breakpoint::Large,
    ] {
        let per_page = breakpoint.items_per_page();
        let pages = page_count(items.len(), per_page);
        assert_eq!(pages, items.len().div_ceil(per_page));

        for page in 1..=pages + 1 {
            let expected = per_page.min(items.len().saturating_sub((page - 1) * per_page));
            assert_eq!(page_slice(&items, page, per_page).len(), expected);
        }
    }
}

#[test]
fn test_page_request_reports_metadata() {
    let items: Vec<usize> = (0..15).collect();
    let page = PageRequest::first(Breakpoint::Medium).apply(&items);
    assert_eq!(page.items, vec![0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(page.page_count, 3);
    assert_eq!(page.total, 15);
    assert!(page.has_next());
    assert!(!page.has_prev());
}

#[test]
fn test_empty_list_has_no_pages() {
    let items: Vec<usize> = Vec::new();
    assert_eq!(page_count(0, 5), 0);
    assert!(page_slice(&items, 1, 5).is_empty());
}
