// ABOUTME: Constants organized by domain for the Culinary Explorer recipe browser
// ABOUTME: Endpoint paths, environment variable names, defaults and UI limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Service identity used in logs and the HTTP user agent
pub mod service_names {
    /// Binary and service name
    pub const CULINARY_EXPLORER: &str = "culinary-explorer";
}

/// Backend API endpoints
pub mod endpoints {
    /// List recipes endpoint, appended to the configured base URL
    pub const LIST_RECIPES: &str = "/recipe/";
}

/// Environment variable names
pub mod env_config {
    /// Backend base URL, read once at startup
    pub const SERVER_URL: &str = "CULINARY_SERVER_URL";
    /// Total request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";
    /// Connection timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "HTTP_CONNECT_TIMEOUT_SECS";
    /// Log file override
    pub const LOG_FILE: &str = "CULINARY_LOG_FILE";
}

/// Default configuration values
pub mod defaults {
    /// Base URL used when `CULINARY_SERVER_URL` is unset
    pub const SERVER_URL: &str = "http://localhost:5000";
    /// Default request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// Default connection timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Log file name inside the cache directory
    pub const LOG_FILE_NAME: &str = "culinary-explorer.log";
}

/// User interface limits
pub mod ui {
    /// Skeleton cards shown while the fetch is in flight, independent of page size
    pub const SKELETON_CARD_COUNT: usize = 8;
    /// Event poll interval for the terminal loop in milliseconds
    pub const EVENT_POLL_INTERVAL_MS: u64 = 100;
    /// Height of one recipe card in terminal rows
    pub const CARD_HEIGHT: u16 = 5;
    /// Shortest card the grid shrinks to: a border plus one text row
    pub const MIN_CARD_HEIGHT: u16 = 3;
    /// Rows used by the header, filter bar, pagination bar and key hints
    pub const CHROME_ROWS: u16 = 6;
}

/// Viewport breakpoints measured in terminal columns
pub mod breakpoints {
    /// Two cards per row from here
    pub const SMALL_MIN_COLUMNS: u16 = 60;
    /// Medium layout (7 items per page) from here
    pub const MEDIUM_MIN_COLUMNS: u16 = 100;
    /// Large layout (10 items per page) from here
    pub const LARGE_MIN_COLUMNS: u16 = 160;

    /// Items per page on large terminals
    pub const LARGE_ITEMS_PER_PAGE: usize = 10;
    /// Items per page on medium terminals
    pub const MEDIUM_ITEMS_PER_PAGE: usize = 7;
    /// Items per page on everything smaller
    pub const SMALL_ITEMS_PER_PAGE: usize = 5;
}
