// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the selection settings.
//!
//! The bounds themselves live next to the newtypes in
//! `domain::selection::newtypes`; this module re-states the defaults the
//! settings file falls back to and checks them at compile time.

use crate::domain::selection::newtypes::{capacity_bounds, size_bounds};

// ==========================================================================
// Selection Defaults
// ==========================================================================

/// Default accept pattern advertised to file pickers.
pub const DEFAULT_ACCEPT: &str = crate::domain::selection::DEFAULT_ACCEPT;

/// Default maximum number of images in one selection.
pub const DEFAULT_MAX_FILES: usize = capacity_bounds::DEFAULT;

/// Default per-file size limit in megabytes.
pub const DEFAULT_MAX_SIZE_MB: f64 = size_bounds::DEFAULT_MB;

/// Whether a freshly configured engine starts disabled.
pub const DEFAULT_DISABLED: bool = false;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(capacity_bounds::MIN > 0);
    assert!(DEFAULT_MAX_FILES >= capacity_bounds::MIN);

    assert!(size_bounds::BYTES_PER_MB > 0.0);
    assert!(DEFAULT_MAX_SIZE_MB > 0.0);
};
