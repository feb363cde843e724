// ABOUTME: View state owned by the page controller and the values derived from it
// ABOUTME: Focus, cursor direction and the Loading/Ready/Empty status classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use culinary_core::models::{CuisineSet, Recipe};
use culinary_core::pagination::Breakpoint;

/// Which widget receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Card grid and pagination
    #[default]
    Grid,
    /// Search text field
    Search,
    /// Cuisine multi-select list
    CuisinePicker,
    /// Detail overlay
    Detail,
}

/// Cursor movement within the card grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Previous row
    Up,
    /// Next row
    Down,
    /// Previous card
    Left,
    /// Next card
    Right,
}

/// What the main area currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerStatus {
    /// Fetch in flight: skeleton cards, no pagination
    Loading,
    /// At least one recipe passes the filters
    Ready,
    /// Nothing passes the filters, or nothing was fetched
    Empty,
}

impl fmt::Display for ControllerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Ready => write!(f, "ready"),
            Self::Empty => write!(f, "empty"),
        }
    }
}

/// Source-of-truth state for the browser screen
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Every recipe returned by the fetch, in backend order
    pub full_list: Vec<Recipe>,
    /// Name search text
    pub search_query: String,
    /// Selected cuisines; empty means all
    pub selected_cuisines: CuisineSet,
    /// 1-based page number
    pub current_page: usize,
    /// True while the fetch is in flight
    pub loading: bool,
    /// Recipe shown in the detail overlay
    pub selected_recipe: Option<Recipe>,
    /// Whether the detail overlay is visible
    pub detail_open: bool,
    /// Width class of the terminal
    pub breakpoint: Breakpoint,
    /// Terminal columns, used to wrap the detail overlay
    pub width: u16,
    /// Terminal rows, used to fit the grid and bound the detail scroll
    pub height: u16,
    /// Widget receiving input
    pub focus: Focus,
    /// Highlighted card within the visible page
    pub cursor: usize,
    /// Highlighted entry in the cuisine picker
    pub picker_cursor: usize,
    /// First visible line of the detail overlay
    pub detail_scroll: u16,
    /// Set once the user asks to leave
    pub should_quit: bool,
    /// Text of the last fetch failure, never shown on screen
    pub last_error: Option<String>,
}

impl ViewState {
    /// Initial state before any fetch
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_page: 1,
            ..Self::default()
        }
    }
}

/// Values recomputed from [`ViewState`] after each relevant change
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedState {
    /// Indices into `full_list` that pass the filters, ascending
    pub filtered: Vec<usize>,
    /// Recipes per page for the current breakpoint
    pub items_per_page: usize,
    /// `ceil(filtered.len() / items_per_page)`
    pub page_count: usize,
}
