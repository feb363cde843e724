// ABOUTME: Recipe detail overlay with ingredients and numbered preparation steps
// ABOUTME: Drawn as a centered popup over the grid while a recipe is selected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use culinary_core::models::Recipe;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::theme;

/// Heading above the ingredient list
pub const INGREDIENTS_HEADING: &str = "Ingredients";

/// Heading above the step list
pub const STEPS_HEADING: &str = "Preparation Steps";

/// Steps as display strings, `"N. text"` with N starting at 1
#[must_use]
pub fn numbered_steps(recipe: &Recipe) -> Vec<String> {
    recipe
        .numbered_steps()
        .map(|(ordinal, step)| format!("{ordinal}. {step}"))
        .collect()
}

/// Full overlay text for `recipe`
#[must_use]
pub fn detail_lines(recipe: &Recipe) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(theme::ACCENT)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::styled(
            recipe.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(theme::cuisine_chip(&recipe.cuisine_type)),
    ];

    if !recipe.image_url.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Image: ", Style::default().fg(theme::MUTED)),
            Span::raw(recipe.image_url.clone()),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::styled(INGREDIENTS_HEADING, heading));
    lines.extend(
        recipe
            .ingredients
            .iter()
            .map(|ingredient| Line::from(format!("  ✓ {ingredient}"))),
    );

    lines.push(Line::default());
    lines.push(Line::styled(STEPS_HEADING, heading));
    lines.extend(
        numbered_steps(recipe)
            .into_iter()
            .map(|step| Line::from(format!("  {step}"))),
    );

    lines
}

fn overlay_block() -> Block<'static> {
    Block::default()
        .title(" Recipe ")
        .title_bottom(Line::styled(
            " ↑↓ scroll · Esc close ",
            Style::default().fg(theme::MUTED),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_style(true))
}

/// Largest scroll offset that still fills the overlay drawn inside `screen`
///
/// Counts rows after word wrapping at the overlay's inner width, so long
/// steps that span several rows stay reachable.
#[must_use]
pub fn max_scroll(recipe: &Recipe, screen: Rect) -> u16 {
    let inner = overlay_block().inner(theme::centered_rect(80, 80, screen));
    let wrapped_rows = Paragraph::new(detail_lines(recipe))
        .wrap(Wrap { trim: false })
        .line_count(inner.width);
    u16::try_from(wrapped_rows)
        .unwrap_or(u16::MAX)
        .saturating_sub(inner.height)
}

/// Draw the overlay when `open` and a recipe is selected; otherwise nothing
pub fn render(frame: &mut Frame, area: Rect, recipe: Option<&Recipe>, open: bool, scroll: u16) {
    let Some(recipe) = recipe.filter(|_| open) else {
        return;
    };

    let popup = theme::centered_rect(80, 80, area);
    frame.render_widget(Clear, popup);

    frame.render_widget(
        Paragraph::new(detail_lines(recipe))
            .block(overlay_block())
            .wrap(Wrap { trim: false })
            .scroll((scroll.min(max_scroll(recipe, area)), 0)),
        popup,
    );
}
