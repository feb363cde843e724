// ABOUTME: Messages accepted by the page controller
// ABOUTME: User input, fetch completion and viewport events as plain values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use culinary_core::models::{Cuisine, CuisineSet, Recipe};

use super::state::Direction;

/// All events the controller reacts to
///
/// Views and the input layer never mutate state directly: they produce a
/// `Message` and the controller applies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Fetch lifecycle
    /// The one-shot list request has been issued
    FetchStarted,
    /// The list request succeeded
    RecipesLoaded(Vec<Recipe>),
    /// The list request failed; the text is kept for the log only
    FetchFailed(String),

    // Search
    /// Append a character to the query
    SearchInput(char),
    /// Remove the last character of the query
    SearchBackspace,
    /// Empty the query
    SearchClear,
    /// Replace the whole query
    SetSearch(String),

    // Cuisine filter
    /// Add or remove one cuisine from the selection
    ToggleCuisine(Cuisine),
    /// Replace the whole selection
    SetCuisines(CuisineSet),
    /// Select nothing, which shows every cuisine
    ClearCuisines,

    // Pagination
    /// Jump to a 1-based page
    GoToPage(usize),
    /// Next page, if any
    NextPage,
    /// Previous page, if any
    PrevPage,
    /// Page 1
    FirstPage,
    /// Last page
    LastPage,

    // Viewport
    /// Terminal resized
    Resize {
        /// Columns
        width: u16,
        /// Rows
        height: u16,
    },

    // Grid and detail
    /// Move the highlighted card
    MoveCursor(Direction),
    /// Open the highlighted card in the detail overlay
    OpenSelected,
    /// Open a recipe by id
    OpenRecipe(String),
    /// Close the detail overlay
    CloseDetail,
    /// Scroll the detail overlay by lines
    ScrollDetail(i16),

    // Focus
    /// Start editing the search query
    FocusSearch,
    /// Open the cuisine picker
    FocusCuisinePicker,
    /// Return input focus to the grid
    FocusGrid,
    /// Move the picker highlight
    PickerMove(i16),
    /// Toggle the highlighted picker entry
    PickerToggle,

    /// Leave the application
    Quit,
}
