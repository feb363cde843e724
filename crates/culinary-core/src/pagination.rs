// ABOUTME: Page-number pagination for the filtered recipe list
// ABOUTME: Breakpoint-driven page size, page counts and clamped page slicing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::constants::breakpoints;

/// Viewport size class derived from the terminal width
///
/// Page size is a function of the breakpoint only; users cannot change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Breakpoint {
    /// Narrower than the small breakpoint: one card per row
    #[default]
    ExtraSmall,
    /// Two cards per row
    Small,
    /// Three cards per row, seven items per page
    Medium,
    /// Four cards per row, ten items per page
    Large,
}

impl Breakpoint {
    /// Classify a terminal width in columns
    #[must_use]
    pub const fn from_width(columns: u16) -> Self {
        if columns >= breakpoints::LARGE_MIN_COLUMNS {
            Self::Large
        } else if columns >= breakpoints::MEDIUM_MIN_COLUMNS {
            Self::Medium
        } else if columns >= breakpoints::SMALL_MIN_COLUMNS {
            Self::Small
        } else {
            Self::ExtraSmall
        }
    }

    /// Number of recipes shown per page
    #[must_use]
    pub const fn items_per_page(self) -> usize {
        match self {
            Self::Large => breakpoints::LARGE_ITEMS_PER_PAGE,
            Self::Medium => breakpoints::MEDIUM_ITEMS_PER_PAGE,
            Self::Small | Self::ExtraSmall => breakpoints::SMALL_ITEMS_PER_PAGE,
        }
    }

    /// Number of cards laid out per grid row
    #[must_use]
    pub const fn grid_columns(self) -> usize {
        match self {
            Self::Large => 4,
            Self::Medium => 3,
            Self::Small => 2,
            Self::ExtraSmall => 1,
        }
    }

    /// Get string representation for logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ExtraSmall => "xs",
            Self::Small => "sm",
            Self::Medium => "md",
            Self::Large => "lg",
        }
    }
}

impl Display for Breakpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `ceil(len / per_page)`, zero for an empty list or a zero page size
#[must_use]
pub const fn page_count(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

/// The `page`-th (1-based) window of `per_page` items
///
/// Bounds are clamped to the slice: an out-of-range page, including page 0,
/// yields an empty slice rather than an error.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if page == 0 || per_page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(per_page).min(items.len());
    let end = page.saturating_mul(per_page).min(items.len());
    &items[start..end]
}

/// Pagination parameters for page-number queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page index
    pub page: usize,
    /// Maximum number of items on the page
    pub per_page: usize,
}

impl PageRequest {
    /// Create pagination parameters
    #[must_use]
    pub const fn new(page: usize, per_page: usize) -> Self {
        Self { page, per_page }
    }

    /// First page sized for a breakpoint
    #[must_use]
    pub const fn first(breakpoint: Breakpoint) -> Self {
        Self::new(1, breakpoint.items_per_page())
    }

    /// Apply this request to a slice
    #[must_use]
    pub fn apply<T: Clone>(&self, items: &[T]) -> Page<T> {
        Page::new(
            page_slice(items, self.page, self.per_page).to_vec(),
            self.page,
            page_count(items.len(), self.per_page),
            items.len(),
        )
    }
}

/// A page of items with pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items in this page
    pub items: Vec<T>,
    /// 1-based index of this page
    pub page: usize,
    /// Total number of pages
    pub page_count: usize,
    /// Total number of items across all pages
    pub total: usize,
}

impl<T> Page<T> {
    /// Create a new page
    #[must_use]
    pub const fn new(items: Vec<T>, page: usize, page_count: usize, total: usize) -> Self {
        Self {
            items,
            page,
            page_count,
            total,
        }
    }

    /// Create an empty page
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_count: 0,
            total: 0,
        }
    }

    /// Whether a later page exists
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    /// Whether an earlier page exists
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::ExtraSmall);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Small);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Small);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Medium);
        assert_eq!(Breakpoint::from_width(159), Breakpoint::Medium);
        assert_eq!(Breakpoint::from_width(160), Breakpoint::Large);
    }

    #[test]
    fn test_items_per_page() {
        assert_eq!(Breakpoint::Large.items_per_page(), 10);
        assert_eq!(Breakpoint::Medium.items_per_page(), 7);
        assert_eq!(Breakpoint::Small.items_per_page(), 5);
        assert_eq!(Breakpoint::ExtraSmall.items_per_page(), 5);
    }

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        let items: Vec<u32> = (0..12).collect();
        assert!(page_slice(&items, 0, 10).is_empty());
        assert!(page_slice(&items, 3, 10).is_empty());
        assert!(page_slice(&items, usize::MAX, 10).is_empty());
        assert_eq!(page_slice(&items, 2, 10), &[10, 11]);
    }

    #[test]
    fn test_page_request_apply() {
        let items: Vec<u32> = (0..12).collect();
        let page = PageRequest::new(1, 5).apply(&items);
        assert_eq!(page.items, vec![0, 1, 2, 3, 4]);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.total, 12);
        assert!(page.has_next());
        assert!(!page.has_prev());
    }
}
