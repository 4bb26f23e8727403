// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default number of tiles per gallery row.
pub const DEFAULT_GALLERY_COLUMNS: u16 = 3;

/// Minimum allowed number of tiles per row.
pub const MIN_GALLERY_COLUMNS: u16 = 1;

/// Maximum allowed number of tiles per row.
pub const MAX_GALLERY_COLUMNS: u16 = 6;

/// Whether preset images are downloaded at startup.
pub const DEFAULT_FETCH_PRESETS: bool = true;

// ==========================================================================
// Validation
// ==========================================================================

const _: () = {
    assert!(MIN_GALLERY_COLUMNS >= 1);
    assert!(MIN_GALLERY_COLUMNS <= DEFAULT_GALLERY_COLUMNS);
    assert!(DEFAULT_GALLERY_COLUMNS <= MAX_GALLERY_COLUMNS);
};
