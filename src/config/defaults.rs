// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Search**: iTunes Search API endpoint, default query, result limit
//! - **Gallery**: Grid geometry and thumbnail size
//! - **Slideshow**: Random replacement interval
//! - **Network**: Request timeouts

// ==========================================================================
// Search Defaults
// ==========================================================================

/// iTunes Search API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://itunes.apple.com/search";

/// Search term shown in the search field at startup.
pub const DEFAULT_SEARCH_TERM: &str = "star wars";

/// Number of results requested from the API for every search.
pub const SEARCH_RESULT_LIMIT: u32 = 200;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Rows in the artwork grid.
pub const GRID_ROWS: usize = 4;

/// Columns in the artwork grid.
pub const GRID_COLUMNS: usize = 5;

/// Number of display slots in the grid.
pub const SLOT_COUNT: usize = GRID_ROWS * GRID_COLUMNS;

/// Minimum number of distinct artwork URLs needed to populate the grid:
/// one per slot plus at least one replacement candidate.
pub const MIN_CANDIDATES: usize = SLOT_COUNT + 1;

/// Edge length (pixels) every thumbnail is scaled to.
pub const THUMBNAIL_SIZE: u32 = 100;

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Default delay between two random replacements (in seconds).
pub const DEFAULT_SLIDESHOW_INTERVAL_SECS: u64 = 2;

/// Minimum slideshow interval (in seconds).
pub const MIN_SLIDESHOW_INTERVAL_SECS: u64 = 1;

/// Maximum slideshow interval (in seconds).
pub const MAX_SLIDESHOW_INTERVAL_SECS: u64 = 60;

// ==========================================================================
// Network Defaults
// ==========================================================================

/// Timeout for the search request (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;

/// Timeout for each thumbnail download (in seconds).
pub const DEFAULT_IMAGE_TIMEOUT_SECS: u64 = 10;

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("ItunesGallery/", env!("CARGO_PKG_VERSION"));

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(SLOT_COUNT == 20);
    assert!(MIN_CANDIDATES > SLOT_COUNT);
    assert!(SEARCH_RESULT_LIMIT as usize >= MIN_CANDIDATES);

    assert!(MIN_SLIDESHOW_INTERVAL_SECS > 0);
    assert!(MAX_SLIDESHOW_INTERVAL_SECS >= MIN_SLIDESHOW_INTERVAL_SECS);
    assert!(DEFAULT_SLIDESHOW_INTERVAL_SECS >= MIN_SLIDESHOW_INTERVAL_SECS);
    assert!(DEFAULT_SLIDESHOW_INTERVAL_SECS <= MAX_SLIDESHOW_INTERVAL_SECS);

    assert!(DEFAULT_REQUEST_TIMEOUT_SECS > 0);
    assert!(DEFAULT_IMAGE_TIMEOUT_SECS > 0);
};
