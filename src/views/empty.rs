// ABOUTME: Empty state shown when no recipe passes the current filters
// ABOUTME: Replaces the grid and pagination bar with a short hint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::theme;

/// Primary empty-state message
pub const EMPTY_TITLE: &str = "No recipes found matching your criteria.";

/// Secondary empty-state hint
pub const EMPTY_HINT: &str = "Try adjusting your search or filters.";

/// Draw both lines centered in `area`
pub fn render(frame: &mut Frame, area: Rect) {
    let [text_area] = Layout::vertical([Constraint::Length(2)])
        .flex(Flex::Center)
        .areas(area);

    let lines = vec![
        Line::styled(EMPTY_TITLE, Style::default().add_modifier(Modifier::BOLD)),
        Line::styled(EMPTY_HINT, Style::default().fg(theme::MUTED)),
    ];
    frame.render_widget(Paragraph::new(lines).centered(), text_area);
}
