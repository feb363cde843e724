// ABOUTME: Pagination bar with first/previous/next/last controls and page numbers
// ABOUTME: Shows a window of page numbers around the current page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme;

/// Page numbers shown on each side of the current page
const PAGE_WINDOW: usize = 2;

/// Inclusive range of page numbers to list around `current`
#[must_use]
pub fn page_window(current: usize, page_count: usize) -> (usize, usize) {
    if page_count == 0 {
        return (0, 0);
    }
    let current = current.clamp(1, page_count);
    let start = current.saturating_sub(PAGE_WINDOW).max(1);
    let end = (current + PAGE_WINDOW).min(page_count);
    (start, end)
}

/// The bar as a single line
#[must_use]
pub fn pagination_line(current: usize, page_count: usize) -> Line<'static> {
    let enabled = Style::default();
    let disabled = Style::default().fg(theme::MUTED);
    let back = if current > 1 { enabled } else { disabled };
    let forward = if current < page_count { enabled } else { disabled };

    let mut spans = vec![Span::styled("« ", back), Span::styled("‹ ", back)];

    let (start, end) = page_window(current, page_count);
    if start > 1 {
        spans.push(Span::styled("… ", disabled));
    }
    for page in start..=end {
        if page == current {
            spans.push(Span::styled(
                format!("[{page}]"),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw(format!(" {page} ")));
        }
        spans.push(Span::raw(" "));
    }
    if end < page_count {
        spans.push(Span::styled("… ", disabled));
    }

    spans.push(Span::styled("› ", forward));
    spans.push(Span::styled("»", forward));
    spans.push(Span::styled(
        format!("   page {current} of {page_count}"),
        disabled,
    ));

    Line::from(spans)
}

/// Draw the bar centered in `area`
pub fn render(frame: &mut Frame, area: Rect, current: usize, page_count: usize) {
    frame.render_widget(
        Paragraph::new(pagination_line(current, page_count)).centered(),
        area,
    );
}
