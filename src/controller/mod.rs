// ABOUTME: Page controller holding all browser state and applying messages to it
// ABOUTME: Runs the filter and pagination engine explicitly after list, query or cuisine changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Page controller
//!
//! The controller owns a [`ViewState`] and a [`DerivedState`]. Every change
//! goes through [`PageController::update`]. When the recipe list, the search
//! query or the cuisine selection actually changes, the filtered list is
//! recomputed and the page goes back to 1. Page navigation and resizes never
//! reset the page; a resize only pulls it back when it falls past the last
//! page.

mod message;
mod state;

pub use message::Message;
pub use state::{ControllerStatus, Direction, DerivedState, Focus, ViewState};

use culinary_core::constants::ui;
use culinary_core::filter::filter_recipes;
use culinary_core::models::{Cuisine, Recipe};
use culinary_core::pagination::{page_count, page_slice, Breakpoint, Page, PageRequest};
use ratatui::layout::Rect;
use tracing::{debug, info, warn};

use crate::views::{detail, grid};

/// Owner of the browser state
#[derive(Debug, Clone)]
pub struct PageController {
    state: ViewState,
    derived: DerivedState,
}

impl Default for PageController {
    fn default() -> Self {
        Self::new()
    }
}

impl PageController {
    /// Controller with an empty list, not loading, at the smallest breakpoint
    #[must_use]
    pub fn new() -> Self {
        let mut controller = Self {
            state: ViewState::new(),
            derived: DerivedState::default(),
        };
        controller.recompute();
        controller
    }

    /// Controller sized for a terminal of `width` by `height`
    #[must_use]
    pub fn with_size(width: u16, height: u16) -> Self {
        let mut controller = Self::new();
        controller.update(Message::Resize { width, height });
        controller
    }

    /// Read-only view of the state
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Current status classification
    #[must_use]
    pub fn status(&self) -> ControllerStatus {
        if self.state.loading {
            ControllerStatus::Loading
        } else if self.derived.filtered.is_empty() {
            ControllerStatus::Empty
        } else {
            ControllerStatus::Ready
        }
    }

    /// Recipes passing the current filters, in list order
    #[must_use]
    pub fn filtered(&self) -> Vec<&Recipe> {
        self.derived
            .filtered
            .iter()
            .filter_map(|&index| self.state.full_list.get(index))
            .collect()
    }

    /// Recipes on the current page
    #[must_use]
    pub fn visible_page(&self) -> Vec<&Recipe> {
        page_slice(
            &self.derived.filtered,
            self.state.current_page,
            self.derived.items_per_page,
        )
        .iter()
        .filter_map(|&index| self.state.full_list.get(index))
        .collect()
    }

    /// Current page with pagination metadata
    #[must_use]
    pub fn page(&self) -> Page<&Recipe> {
        PageRequest::new(self.state.current_page, self.derived.items_per_page)
            .apply(&self.filtered())
    }

    /// Number of pages for the filtered list
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.derived.page_count
    }

    /// Page size for the current breakpoint
    #[must_use]
    pub const fn items_per_page(&self) -> usize {
        self.derived.items_per_page
    }

    /// Recipe under the grid cursor, if any
    #[must_use]
    pub fn highlighted(&self) -> Option<&Recipe> {
        self.visible_page().get(self.state.cursor).copied()
    }

    /// Cuisine under the picker cursor
    #[must_use]
    pub fn picker_highlighted(&self) -> &Cuisine {
        let last = Cuisine::ALL.len() - 1;
        &Cuisine::ALL[self.state.picker_cursor.min(last)]
    }

    /// Apply one message
    #[allow(clippy::too_many_lines)]
    pub fn update(&mut self, message: Message) {
        match message {
            Message::FetchStarted => {
                self.state.loading = true;
                self.state.last_error = None;
            }
            Message::RecipesLoaded(recipes) => {
                info!(count = recipes.len(), "Recipe list loaded");
                self.state.loading = false;
                self.state.full_list = recipes;
                self.recompute();
            }
            Message::FetchFailed(reason) => {
                warn!(error = %reason, "Recipe list unavailable, showing empty state");
                self.state.loading = false;
                self.state.last_error = Some(reason);
            }

            Message::SearchInput(c) => {
                self.state.search_query.push(c);
                self.recompute();
            }
            Message::SearchBackspace => {
                if self.state.search_query.pop().is_some() {
                    self.recompute();
                }
            }
            Message::SearchClear => {
                if !self.state.search_query.is_empty() {
                    self.state.search_query.clear();
                    self.recompute();
                }
            }
            Message::SetSearch(query) => {
                if query != self.state.search_query {
                    self.state.search_query = query;
                    self.recompute();
                }
            }

            Message::ToggleCuisine(cuisine) => {
                self.state.selected_cuisines.toggle(cuisine);
                self.recompute();
            }
            Message::SetCuisines(cuisines) => {
                if cuisines != self.state.selected_cuisines {
                    self.state.selected_cuisines = cuisines;
                    self.recompute();
                }
            }
            Message::ClearCuisines => {
                if !self.state.selected_cuisines.is_empty() {
                    self.state.selected_cuisines.clear();
                    self.recompute();
                }
            }

            Message::GoToPage(page) => self.go_to_page(page),
            Message::NextPage => self.go_to_page(self.state.current_page.saturating_add(1)),
            Message::PrevPage => self.go_to_page(self.state.current_page.saturating_sub(1)),
            Message::FirstPage => self.go_to_page(1),
            Message::LastPage => self.go_to_page(self.derived.page_count),

            Message::Resize { width, height } => {
                self.state.width = width;
                self.state.height = height;
                let breakpoint = Breakpoint::from_width(width);
                if breakpoint != self.state.breakpoint {
                    debug!(from = %self.state.breakpoint, to = %breakpoint, "Breakpoint changed");
                    self.state.breakpoint = breakpoint;
                    self.relayout();
                }
                self.clamp_detail_scroll();
            }

            Message::MoveCursor(direction) => self.move_cursor(direction),
            Message::OpenSelected => {
                if let Some(recipe) = self.highlighted().cloned() {
                    self.open(recipe);
                }
            }
            Message::OpenRecipe(id) => {
                if let Some(recipe) = self.state.full_list.iter().find(|r| r.id == id).cloned() {
                    self.open(recipe);
                }
            }
            Message::CloseDetail => {
                self.state.detail_open = false;
                self.state.selected_recipe = None;
                self.state.detail_scroll = 0;
                self.state.focus = Focus::Grid;
            }
            Message::ScrollDetail(delta) => {
                if self.state.detail_open {
                    self.state.detail_scroll = self.state.detail_scroll.saturating_add_signed(delta);
                    self.clamp_detail_scroll();
                }
            }

            Message::FocusSearch => self.state.focus = Focus::Search,
            Message::FocusCuisinePicker => self.state.focus = Focus::CuisinePicker,
            Message::FocusGrid => self.state.focus = Focus::Grid,
            Message::PickerMove(delta) => {
                let last = Cuisine::ALL.len() - 1;
                self.state.picker_cursor = self
                    .state
                    .picker_cursor
                    .saturating_add_signed(isize::from(delta))
                    .min(last);
            }
            Message::PickerToggle => {
                let cuisine = self.picker_highlighted().clone();
                self.update(Message::ToggleCuisine(cuisine));
            }

            Message::Quit => self.state.should_quit = true,
        }
    }

    /// Re-run the filter and send the user back to page 1
    ///
    /// Called after the list, query or cuisine selection changed.
    pub fn recompute(&mut self) {
        self.derived.filtered = filter_recipes(
            &self.state.full_list,
            &self.state.search_query,
            &self.state.selected_cuisines,
        );
        self.state.current_page = 1;
        self.state.cursor = 0;
        self.relayout();
        debug!(
            query = %self.state.search_query,
            cuisines = self.state.selected_cuisines.len(),
            matches = self.derived.filtered.len(),
            "Filter recomputed"
        );
    }

    /// Largest useful detail scroll offset for the current terminal size
    #[must_use]
    pub fn max_detail_scroll(&self) -> u16 {
        self.state
            .selected_recipe
            .as_ref()
            .map_or(0, |recipe| detail::max_scroll(recipe, self.screen()))
    }

    /// Cards per grid row as drawn for the current page
    ///
    /// Matches the layout in [`grid::card_areas`], which widens rows when the
    /// terminal is too short for the breakpoint's column count.
    #[must_use]
    pub fn grid_columns(&self) -> usize {
        let columns = self.state.breakpoint.grid_columns();
        if self.state.height == 0 {
            return columns;
        }
        let grid_height = self.state.height.saturating_sub(ui::CHROME_ROWS);
        grid::grid_shape(grid_height, self.visible_page().len(), columns).0
    }

    fn screen(&self) -> Rect {
        Rect::new(0, 0, self.state.width, self.state.height)
    }

    /// Refresh page size and count without touching the filter
    ///
    /// The page number is kept unless it now lies past the last page.
    fn relayout(&mut self) {
        self.derived.items_per_page = self.state.breakpoint.items_per_page();
        self.derived.page_count = page_count(self.derived.filtered.len(), self.derived.items_per_page);
        if self.derived.page_count > 0 && self.state.current_page > self.derived.page_count {
            debug!(
                from = self.state.current_page,
                to = self.derived.page_count,
                "Page past the end after relayout, clamping"
            );
            self.state.current_page = self.derived.page_count;
            self.state.cursor = 0;
        }
        self.clamp_cursor();
    }

    fn clamp_detail_scroll(&mut self) {
        self.state.detail_scroll = self.state.detail_scroll.min(self.max_detail_scroll());
    }

    fn go_to_page(&mut self, page: usize) {
        if self.derived.page_count == 0 {
            return;
        }
        let page = page.clamp(1, self.derived.page_count);
        if page != self.state.current_page {
            self.state.current_page = page;
            self.state.cursor = 0;
        }
    }

    fn move_cursor(&mut self, direction: Direction) {
        let visible = self.visible_page().len();
        if visible == 0 {
            return;
        }
        let columns = self.grid_columns();
        let cursor = self.state.cursor;
        self.state.cursor = match direction {
            Direction::Left => cursor.saturating_sub(1),
            Direction::Right => (cursor + 1).min(visible - 1),
            Direction::Up => cursor.checked_sub(columns).unwrap_or(cursor),
            Direction::Down => {
                let next = cursor + columns;
                if next < visible {
                    next
                } else {
                    cursor
                }
            }
        };
    }

    fn clamp_cursor(&mut self) {
        let visible = self.visible_page().len();
        self.state.cursor = self.state.cursor.min(visible.saturating_sub(1));
    }

    fn open(&mut self, recipe: Recipe) {
        debug!(id = %recipe.id, name = %recipe.name, "Opening recipe detail");
        self.state.selected_recipe = Some(recipe);
        self.state.detail_open = true;
        self.state.detail_scroll = 0;
        self.state.focus = Focus::Detail;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipes(count: usize) -> Vec<Recipe> {
        (0..count)
            .map(|i| Recipe::new(format!("r{i}"), format!("Dish {i}"), Cuisine::Italian))
            .collect()
    }

    fn loaded(count: usize, width: u16) -> PageController {
        let mut controller = PageController::with_size(width, 50);
        controller.update(Message::FetchStarted);
        controller.update(Message::RecipesLoaded(recipes(count)));
        controller
    }

    #[test]
    fn test_initial_state_is_empty_not_loading() {
        let controller = PageController::new();
        assert_eq!(controller.status(), ControllerStatus::Empty);
        assert_eq!(controller.state().current_page, 1);
        assert_eq!(controller.items_per_page(), 5);
    }

    #[test]
    fn test_page_navigation_is_clamped() {
        let mut controller = loaded(12, 200);
        assert_eq!(controller.page_count(), 2);

        controller.update(Message::PrevPage);
        assert_eq!(controller.state().current_page, 1);

        controller.update(Message::NextPage);
        controller.update(Message::NextPage);
        assert_eq!(controller.state().current_page, 2);

        controller.update(Message::GoToPage(99));
        assert_eq!(controller.state().current_page, 2);

        controller.update(Message::FirstPage);
        assert_eq!(controller.state().current_page, 1);

        controller.update(Message::LastPage);
        assert_eq!(controller.visible_page().len(), 2);
    }

    #[test]
    fn test_cursor_moves_by_rows_and_resets_on_page_change() {
        let mut controller = loaded(12, 200);
        controller.update(Message::MoveCursor(Direction::Down));
        assert_eq!(controller.state().cursor, 4);
        controller.update(Message::MoveCursor(Direction::Right));
        assert_eq!(controller.state().cursor, 5);
        controller.update(Message::MoveCursor(Direction::Down));
        assert_eq!(controller.state().cursor, 9);
        controller.update(Message::MoveCursor(Direction::Down));
        assert_eq!(controller.state().cursor, 9);

        controller.update(Message::NextPage);
        assert_eq!(controller.state().cursor, 0);
    }

    #[test]
    fn test_picker_toggle_selects_highlighted_cuisine() {
        let mut controller = loaded(3, 80);
        controller.update(Message::PickerMove(3));
        assert_eq!(controller.picker_highlighted(), &Cuisine::Italian);
        controller.update(Message::PickerToggle);
        assert!(controller.state().selected_cuisines.contains(&Cuisine::Italian));
        assert_eq!(controller.filtered().len(), 3);

        controller.update(Message::PickerMove(-10));
        assert_eq!(controller.state().picker_cursor, 0);
        controller.update(Message::PickerMove(100));
        assert_eq!(controller.state().picker_cursor, Cuisine::ALL.len() - 1);
    }

    fn long_recipe() -> Recipe {
        Recipe::new("long", "Slow Braise", Cuisine::Mediterranean)
            .with_steps((1..=30).map(|n| format!("Step {n}")))
    }

    #[test]
    fn test_detail_scroll_only_while_open() {
        let mut controller = PageController::with_size(80, 24);
        controller.update(Message::RecipesLoaded(vec![long_recipe()]));
        controller.update(Message::ScrollDetail(3));
        assert_eq!(controller.state().detail_scroll, 0);

        controller.update(Message::OpenSelected);
        controller.update(Message::ScrollDetail(3));
        controller.update(Message::ScrollDetail(-5));
        assert_eq!(controller.state().detail_scroll, 0);
        controller.update(Message::ScrollDetail(2));
        assert_eq!(controller.state().detail_scroll, 2);
    }

    #[test]
    fn test_detail_scroll_stops_at_last_line() {
        let mut controller = PageController::with_size(80, 24);
        controller.update(Message::RecipesLoaded(vec![long_recipe()]));
        controller.update(Message::OpenSelected);

        let max = controller.max_detail_scroll();
        assert!(max > 0);
        for _ in 0..100 {
            controller.update(Message::ScrollDetail(1));
        }
        assert_eq!(controller.state().detail_scroll, max);

        controller.update(Message::ScrollDetail(-1));
        assert_eq!(controller.state().detail_scroll, max - 1);
    }

    #[test]
    fn test_short_detail_does_not_scroll() {
        let mut controller = loaded(3, 80);
        controller.update(Message::OpenSelected);
        controller.update(Message::ScrollDetail(5));
        assert_eq!(controller.state().detail_scroll, 0);
    }

    #[test]
    fn test_resize_shrinking_detail_reclamps_scroll() {
        let mut controller = PageController::with_size(80, 24);
        controller.update(Message::RecipesLoaded(vec![long_recipe()]));
        controller.update(Message::OpenSelected);
        controller.update(Message::ScrollDetail(i16::MAX));
        controller.update(Message::Resize {
            width: 80,
            height: 60,
        });
        assert_eq!(controller.state().detail_scroll, controller.max_detail_scroll());
    }

    #[test]
    fn test_short_terminal_widens_grid_rows_for_cursor() {
        let mut controller = PageController::with_size(200, 12);
        controller.update(Message::RecipesLoaded(recipes(10)));
        assert_eq!(controller.grid_columns(), 5);
        controller.update(Message::MoveCursor(Direction::Down));
        assert_eq!(controller.state().cursor, 5);
    }
}
