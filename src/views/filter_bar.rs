// ABOUTME: Search field, cuisine selection summary and the cuisine picker popup
// ABOUTME: Shows the current query and selection and places the text cursor while searching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use culinary_core::models::{Cuisine, CuisineSet};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::theme;

/// Comma separated selection, or "All" when nothing is selected
#[must_use]
pub fn selection_summary(selected: &CuisineSet) -> String {
    if selected.is_empty() {
        return "All".to_owned();
    }
    selected
        .iter()
        .map(Cuisine::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Draw the search field and cuisine summary side by side
pub fn render(
    frame: &mut Frame,
    area: Rect,
    query: &str,
    selected: &CuisineSet,
    search_focused: bool,
    picker_focused: bool,
) {
    let [search_area, cuisine_area] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(area);

    let search_block = Block::default()
        .title(" Search recipes (/) ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_style(search_focused));

    let search_text = if query.is_empty() && !search_focused {
        Line::styled("type / to search by name", Style::default().fg(theme::MUTED))
    } else {
        Line::raw(query)
    };
    frame.render_widget(Paragraph::new(search_text).block(search_block), search_area);

    if search_focused {
        let offset = u16::try_from(query.chars().count()).unwrap_or(u16::MAX);
        let max_x = search_area.right().saturating_sub(2);
        frame.set_cursor_position(Position::new(
            search_area.x.saturating_add(1).saturating_add(offset).min(max_x),
            search_area.y + 1,
        ));
    }

    let cuisine_block = Block::default()
        .title(" Cuisines (c) ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_style(picker_focused));
    let summary = theme::truncate(
        &selection_summary(selected),
        cuisine_block.inner(cuisine_area).width as usize,
    );
    frame.render_widget(Paragraph::new(summary).block(cuisine_block), cuisine_area);
}

/// Draw the multi-select cuisine picker as a popup
pub fn render_picker(frame: &mut Frame, area: Rect, selected: &CuisineSet, cursor: usize) {
    let popup = theme::centered_rect(40, 60, area);
    frame.render_widget(Clear, popup);

    let items: Vec<ListItem> = Cuisine::ALL
        .iter()
        .map(|cuisine| {
            let mark = if selected.contains(cuisine) { "[x]" } else { "[ ]" };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{mark} ")),
                theme::cuisine_chip(cuisine),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Filter by cuisine ")
                .title_bottom(Line::styled(
                    " Space toggle · x clear · Esc done ",
                    Style::default().fg(theme::MUTED),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme::border_style(true)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(cursor));
    frame.render_stateful_widget(list, popup, &mut state);
}
