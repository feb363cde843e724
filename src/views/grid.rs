// ABOUTME: Recipe grid rendering a page of recipe cards or loading skeletons
// ABOUTME: Lays cards out in rows whose column count follows the breakpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use culinary_core::constants::ui;
use culinary_core::models::Recipe;
use culinary_core::pagination::Breakpoint;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::theme;

/// What the grid should draw
#[derive(Debug, Clone, Copy)]
pub enum GridContent<'a> {
    /// Fixed number of placeholder cards
    Skeleton,
    /// One card per recipe, with the card at `cursor` highlighted
    Cards {
        /// Recipes of the visible page, in page order
        recipes: &'a [&'a Recipe],
        /// Index of the highlighted card
        cursor: usize,
    },
}

/// Draw the grid into `area`
pub fn render(frame: &mut Frame, area: Rect, content: GridContent<'_>, breakpoint: Breakpoint) {
    let count = match content {
        GridContent::Skeleton => ui::SKELETON_CARD_COUNT,
        GridContent::Cards { recipes, .. } => recipes.len(),
    };

    for (index, cell) in card_areas(area, count, breakpoint.grid_columns())
        .into_iter()
        .enumerate()
    {
        match content {
            GridContent::Skeleton => render_skeleton(frame, cell),
            GridContent::Cards { recipes, cursor } => {
                if let Some(recipe) = recipes.get(index) {
                    render_card(frame, cell, recipe, index == cursor);
                }
            }
        }
    }
}

/// Column count and row height that fit `count` cards into `height` rows
///
/// Cards keep their full height when there is room. Otherwise rows shrink
/// down to [`ui::MIN_CARD_HEIGHT`], and if the rows still overflow the grid
/// gains columns until every card has a cell.
#[must_use]
pub fn grid_shape(height: u16, count: usize, columns: usize) -> (usize, u16) {
    let max_rows = usize::from((height / ui::MIN_CARD_HEIGHT).max(1));
    let columns = columns.max(1).max(count.div_ceil(max_rows));
    let rows = count.div_ceil(columns).max(1);
    let row_height = u16::try_from(usize::from(height) / rows)
        .unwrap_or(u16::MAX)
        .min(ui::CARD_HEIGHT);
    (columns, row_height)
}

/// Cell rectangles for `count` cards laid out at least `columns` per row
///
/// Always returns `count` cells; see [`grid_shape`] for how they shrink.
#[must_use]
pub fn card_areas(area: Rect, count: usize, columns: usize) -> Vec<Rect> {
    let (columns, row_height) = grid_shape(area.height, count, columns);
    let rows = count.div_ceil(columns);

    let row_areas = Layout::vertical(vec![Constraint::Length(row_height); rows])
        .flex(Flex::Start)
        .split(area);

    row_areas
        .iter()
        .flat_map(|row| {
            Layout::horizontal(vec![Constraint::Fill(1); columns])
                .split(*row)
                .to_vec()
        })
        .take(count)
        .collect()
}

fn render_card(frame: &mut Frame, area: Rect, recipe: &Recipe, highlighted: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if highlighted {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(theme::border_style(highlighted));

    let inner = block.inner(area);
    let width = usize::from(inner.width);
    let name_style = Style::default().add_modifier(Modifier::BOLD);
    let chip = theme::cuisine_chip(&recipe.cuisine_type);

    let lines = match inner.height {
        0 | 1 => {
            let name_width = width.saturating_sub(chip.width() + 1);
            vec![Line::from(vec![
                Span::styled(theme::truncate(&recipe.name, name_width), name_style),
                Span::raw(" "),
                chip,
            ])]
        }
        2 => vec![
            Line::styled(theme::truncate(&recipe.name, width), name_style),
            Line::from(chip),
        ],
        _ => vec![
            Line::styled(theme::truncate(&recipe.name, width), name_style),
            Line::default(),
            Line::from(chip),
        ],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_skeleton(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(theme::MUTED));
    let width = block.inner(area).width as usize;

    let lines = vec![
        Line::styled("░".repeat(width), Style::default().fg(theme::MUTED)),
        Line::default(),
        Line::styled("░".repeat(width / 3), Style::default().fg(theme::MUTED)),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_areas_follow_column_count() {
        let area = Rect::new(0, 0, 160, 20);
        let cells = card_areas(area, 10, 4);
        assert_eq!(cells.len(), 10);
        assert_eq!(cells[0].width, 40);
        assert_eq!(cells[4].y, ui::CARD_HEIGHT);
    }

    #[test]
    fn test_short_area_shrinks_rows_instead_of_dropping_cards() {
        let area = Rect::new(0, 0, 60, 12);
        let cells = card_areas(area, 5, 1);
        assert_eq!(cells.len(), 5);
        assert!(cells.iter().all(|cell| cell.bottom() <= area.bottom()));
        assert!(cells.iter().all(|cell| cell.height >= 2));
    }

    #[test]
    fn test_grid_shape_adds_columns_when_rows_run_out() {
        assert_eq!(grid_shape(18, 8, 1), (2, 4));
        assert_eq!(grid_shape(18, 5, 1), (1, 3));
        assert_eq!(grid_shape(40, 5, 1), (1, ui::CARD_HEIGHT));
        assert_eq!(grid_shape(6, 10, 4), (5, 3));
    }
}
