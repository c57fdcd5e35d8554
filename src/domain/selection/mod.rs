// SPDX-License-Identifier: MPL-2.0
//! Selection domain types.
//!
//! Pure data for the image-select engine: the items a selection holds, the
//! raw candidates offered to it, its limits, and the notices a batch can
//! produce. Nothing here performs I/O.

pub mod accept;
pub mod candidate;
pub mod item;
pub mod newtypes;
pub mod notice;

// Re-export commonly used types
pub use accept::{AcceptPattern, AcceptToken, DEFAULT_ACCEPT};
pub use candidate::{PendingCandidate, IMAGE_MEDIA_PREFIX};
pub use item::{IdentityKey, ItemId, PendingFile, RemoteRef, SelectableItem, SelectionValue};
pub use newtypes::{MaxFiles, MaxSizeMb};
pub use notice::{Notice, NoticeArg, ValidationMessage};
