// SPDX-License-Identifier: MPL-2.0
//! Selection limit newtypes.
//!
//! This module provides type-safe wrappers for the capacity and size limits.
//! Limits have no upper bound; only values that cannot work (zero, negative,
//! non-finite) are replaced.

// =============================================================================
// Capacity Bounds
// =============================================================================

/// Maximum file count bounds.
pub mod capacity_bounds {
    /// Minimum number of files a selection may hold.
    pub const MIN: usize = 1;
    /// Default number of files.
    pub const DEFAULT: usize = 12;
}

// =============================================================================
// MaxFiles
// =============================================================================

/// Capacity of a selection, at least one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MaxFiles(usize);

impl MaxFiles {
    /// Creates a new capacity. Zero is raised to [`capacity_bounds::MIN`].
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self(count.max(capacity_bounds::MIN))
    }

    /// Returns the raw count.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns how many more items fit next to `current` (zero when full).
    #[must_use]
    pub fn remaining(self, current: usize) -> usize {
        self.0.saturating_sub(current)
    }
}

impl Default for MaxFiles {
    fn default() -> Self {
        Self(capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Size Bounds
// =============================================================================

/// Per-file size limit constants.
pub mod size_bounds {
    /// Default per-file limit in megabytes.
    pub const DEFAULT_MB: f64 = 10.0;
    /// Bytes per megabyte (binary).
    pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
}

// =============================================================================
// MaxSizeMb
// =============================================================================

/// Per-file size limit in megabytes, always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct MaxSizeMb(f64);

impl MaxSizeMb {
    /// Creates a new size limit.
    ///
    /// Zero, negative and non-finite input fall back to the default.
    #[must_use]
    pub fn new(megabytes: f64) -> Self {
        if !megabytes.is_finite() || megabytes <= 0.0 {
            return Self::default();
        }
        Self(megabytes)
    }

    /// Returns the raw megabyte value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the limit in bytes.
    #[must_use]
    pub fn as_bytes(self) -> f64 {
        self.0 * size_bounds::BYTES_PER_MB
    }

    /// Returns `true` if a file of `size` bytes is over the limit.
    #[must_use]
    pub fn is_exceeded_by(self, size: u64) -> bool {
        #[allow(clippy::cast_precision_loss)]
        let size = size as f64;
        size > self.as_bytes()
    }
}

impl Default for MaxSizeMb {
    fn default() -> Self {
        Self(size_bounds::DEFAULT_MB)
    }
}
