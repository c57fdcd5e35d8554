// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`preview`]: In-memory `blob:` locator registry (implements [`PreviewProvider`])
//! - [`candidates`]: Builds pending candidates from files on disk
//!
//! # Design Notes
//!
//! - Adapters implement traits from `application::port`
//! - Hosts with their own handle facility provide their own adapter
//!
//! [`PreviewProvider`]: crate::application::port::PreviewProvider

pub mod candidates;
pub mod preview;

// Re-export main types for convenience
pub use candidates::{candidate_from_path, media_type_for_path, pick_files};
pub use preview::BlobPreviewStore;
