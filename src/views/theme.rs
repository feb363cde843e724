// ABOUTME: Fixed palette and shared layout helpers for the browser views
// ABOUTME: Cuisine chip colors, focus styles and centered popup geometry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use culinary_core::models::Cuisine;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
};

/// Title shown in the header
pub const APP_TITLE: &str = "Culinary Explorer";

/// Accent used for focused widgets and the highlighted card
pub const ACCENT: Color = Color::Yellow;

/// Muted text and unfocused borders
pub const MUTED: Color = Color::DarkGray;

/// Background of a cuisine chip
///
/// Indian, Mexican, Chinese and Italian have their own tint; every other
/// cuisine shares the neutral grey.
#[must_use]
pub const fn cuisine_color(cuisine: &Cuisine) -> Color {
    match cuisine {
        Cuisine::Indian => Color::Rgb(255, 224, 178),
        Cuisine::Mexican => Color::Rgb(200, 230, 201),
        Cuisine::Chinese => Color::Rgb(197, 202, 233),
        Cuisine::Italian => Color::Rgb(255, 205, 210),
        _ => Color::Rgb(224, 224, 224),
    }
}

/// Cuisine tag rendered as a padded colored chip
#[must_use]
pub fn cuisine_chip(cuisine: &Cuisine) -> Span<'static> {
    Span::styled(
        format!(" {cuisine} "),
        Style::default()
            .fg(Color::Black)
            .bg(cuisine_color(cuisine))
            .add_modifier(Modifier::BOLD),
    )
}

/// Border style for a widget depending on focus
#[must_use]
pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(MUTED)
    }
}

/// Rectangle of `percent_x` by `percent_y` centered in `area`
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [v_area] = vertical.areas(area);
    let [h_area] = horizontal.areas(v_area);
    h_area
}

/// Cut `text` to at most `max` characters, ending with an ellipsis when cut
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}
