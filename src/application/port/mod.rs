// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`preview`]: Preview handle allocation and release
//!
//! # Design Notes
//!
//! - All traits use domain types only (no browser or toolkit handles)
//! - Methods return `Result` with port-specific error types
//! - The engine is single-threaded, so ports take `&mut self` and need not be `Send`

pub mod preview;

// Re-export main types for convenience
pub use preview::{PreviewError, PreviewLocator, PreviewProvider};
