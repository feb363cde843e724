// ABOUTME: Screen composition for the recipe browser
// ABOUTME: Header, filter bar, grid or empty state, pagination, key hints and overlays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Views
//!
//! Views only read from the [`PageController`]; they never change state.

/// Recipe detail overlay
pub mod detail;
/// Empty-state message
pub mod empty;
/// Search field and cuisine picker
pub mod filter_bar;
/// Recipe card grid
pub mod grid;
/// Pagination bar
pub mod pagination;
/// Palette and layout helpers
pub mod theme;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::controller::{ControllerStatus, Focus, PageController};
use grid::GridContent;

/// Draw the whole screen
pub fn render(frame: &mut Frame, controller: &PageController) {
    let state = controller.state();
    let screen = frame.area();
    let [header, filters, main, pager, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(screen);

    render_header(frame, header, controller);
    filter_bar::render(
        frame,
        filters,
        &state.search_query,
        &state.selected_cuisines,
        state.focus == Focus::Search,
        state.focus == Focus::CuisinePicker,
    );

    match controller.status() {
        ControllerStatus::Loading => {
            grid::render(frame, main, GridContent::Skeleton, state.breakpoint);
        }
        ControllerStatus::Empty => empty::render(frame, main),
        ControllerStatus::Ready => {
            let visible = controller.visible_page();
            grid::render(
                frame,
                main,
                GridContent::Cards {
                    recipes: &visible,
                    cursor: state.cursor,
                },
                state.breakpoint,
            );
            pagination::render(frame, pager, state.current_page, controller.page_count());
        }
    }

    render_footer(frame, footer, state.focus);

    if state.focus == Focus::CuisinePicker {
        filter_bar::render_picker(
            frame,
            screen,
            &state.selected_cuisines,
            state.picker_cursor,
        );
    }

    detail::render(
        frame,
        screen,
        state.selected_recipe.as_ref(),
        state.detail_open,
        state.detail_scroll,
    );
}

fn render_header(frame: &mut Frame, area: Rect, controller: &PageController) {
    let count = match controller.status() {
        ControllerStatus::Loading => "loading recipes…".to_owned(),
        _ => format!(
            "{} of {} recipes",
            controller.filtered().len(),
            controller.state().full_list.len()
        ),
    };

    let line = Line::from(vec![
        Span::styled(
            theme::APP_TITLE,
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(count, Style::default().fg(theme::MUTED)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Key hints for the focused widget
#[must_use]
pub const fn key_hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Grid => {
            "←↑↓→ move · Enter open · [ ] page · g/G first/last · / search · c cuisines · q quit"
        }
        Focus::Search => "type to search · Backspace delete · Ctrl-U clear · Enter/Esc done",
        Focus::CuisinePicker => "↑↓ move · Space toggle · x clear · Enter/Esc done",
        Focus::Detail => "↑↓ scroll · Esc/q close",
    }
}

fn render_footer(frame: &mut Frame, area: Rect, focus: Focus) {
    frame.render_widget(
        Paragraph::new(key_hints(focus)).style(Style::default().fg(theme::MUTED)),
        area,
    );
}
