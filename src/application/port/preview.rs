// SPDX-License-Identifier: MPL-2.0
//! Preview handle port definition.
//!
//! This module defines the [`PreviewProvider`] trait through which the
//! selection engine obtains displayable locators for pending files and gives
//! them back. Hosts implement it with whatever resource-handle facility their
//! runtime offers (object URLs in a browser, texture handles in a native UI).

use crate::domain::selection::PendingFile;
use std::fmt;
use thiserror::Error;

// =============================================================================
// PreviewLocator
// =============================================================================

/// Displayable locator bound to one pending file's content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreviewLocator(String);

impl PreviewLocator {
    #[must_use]
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PreviewLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// PreviewError
// =============================================================================

/// Errors a preview provider may report.
///
/// The engine never surfaces these to the user: a failed allocation shows a
/// blank thumbnail, a failed release is logged and forgotten.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    /// The provider refused to create a locator for this content.
    #[error("Preview allocation failed: {0}")]
    AllocationFailed(String),

    /// The provider could not release a locator it handed out.
    #[error("Preview release failed: {0}")]
    ReleaseFailed(String),
}

// =============================================================================
// PreviewProvider Trait
// =============================================================================

/// Port for allocating and releasing preview handles.
///
/// # Contract
///
/// - Every successful `allocate` is paired by the engine with exactly one
///   later `release` of the returned locator.
/// - `release` of a locator that was already released, or never handed out,
///   must be a no-op rather than an error.
///
/// # Example
///
/// ```ignore
/// use image_select::application::port::preview::PreviewProvider;
///
/// fn thumbnail_src(provider: &mut impl PreviewProvider, file: &PendingFile) -> String {
///     provider
///         .allocate(file)
///         .map(|locator| locator.to_string())
///         .unwrap_or_default()
/// }
/// ```
pub trait PreviewProvider {
    /// Creates a displayable locator for the file's content.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::AllocationFailed`] if no locator can be made.
    fn allocate(&mut self, file: &PendingFile) -> Result<PreviewLocator, PreviewError>;

    /// Gives a locator back to the provider.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::ReleaseFailed`] only on provider failure, never
    /// for an unknown or already released locator.
    fn release(&mut self, locator: &PreviewLocator) -> Result<(), PreviewError>;
}

impl<P: PreviewProvider + ?Sized> PreviewProvider for Box<P> {
    fn allocate(&mut self, file: &PendingFile) -> Result<PreviewLocator, PreviewError> {
        (**self).allocate(file)
    }

    fn release(&mut self, locator: &PreviewLocator) -> Result<(), PreviewError> {
        (**self).release(locator)
    }
}
