// SPDX-License-Identifier: MPL-2.0
//! Multi-image selection engine.
//!
//! This module follows the same "state down, messages up" pattern as the other
//! UI components. The host forwards picker, drag and item events as
//! [`Message`]s; the engine validates them, updates its ordered selection and
//! answers with an [`Effect`] carrying the new value whenever it changed.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── validation - type, size, capacity and duplicate checks
//!     ├── drag       - drop-zone highlight
//!     ├── previews   - preview handle per pending file
//!     └── labels     - localized texts around the drop zone
//! ```
//!
//! Preview handles are owned by the engine: they are allocated when a pending
//! file enters the selection and released when it leaves, when the host
//! replaces the value, and when the engine is dropped.

use crate::application::port::preview::PreviewProvider;
use crate::config::SelectionConfig;
use crate::domain::selection::{
    AcceptPattern, MaxFiles, MaxSizeMb, SelectableItem, SelectionValue, ValidationMessage,
};

mod component;
pub mod drag;
mod labels;
mod messages;
pub mod previews;
pub mod validation;

pub use drag::DragPhase;
pub use labels::Labels;
pub use messages::{Effect, Message};
pub use previews::{PreviewEntry, PreviewSource};

/// Limits and flags the engine runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Offered to file pickers; ingestion itself only checks for `image/`.
    pub accept: AcceptPattern,
    pub max_files: MaxFiles,
    pub max_size_mb: MaxSizeMb,
    /// Suppresses every interactive mutation.
    pub disabled: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            accept: AcceptPattern::default(),
            max_files: MaxFiles::default(),
            max_size_mb: MaxSizeMb::default(),
            disabled: false,
        }
    }
}

impl From<&SelectionConfig> for Options {
    fn from(config: &SelectionConfig) -> Self {
        Self {
            accept: config.accept_pattern(),
            max_files: config.max_files(),
            max_size_mb: config.max_size_mb(),
            disabled: config.disabled,
        }
    }
}

/// Everything the host needs to render the widget after an event.
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    pub value: SelectionValue,
    pub message: Option<ValidationMessage>,
    pub drag: DragPhase,
    pub disabled: bool,
    pub previews: Vec<PreviewEntry>,
}

impl Output {
    /// English message text, notices joined by a single space.
    #[must_use]
    pub fn message_text(&self) -> Option<String> {
        self.message.as_ref().map(ValidationMessage::text)
    }
}

/// Engine state.
pub struct State<P: PreviewProvider> {
    options: Options,
    items: Vec<SelectableItem>,
    message: Option<ValidationMessage>,
    drag: drag::State,
    previews: previews::PreviewRegistry,
    provider: P,
}

impl<P: PreviewProvider> std::fmt::Debug for State<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("options", &self.options)
            .field("items", &self.items)
            .field("message", &self.message)
            .field("drag", &self.drag)
            .field("previews", &self.previews.len())
            .finish_non_exhaustive()
    }
}

impl<P: PreviewProvider> Drop for State<P> {
    fn drop(&mut self) {
        self.previews.release_all(&mut self.provider);
    }
}

#[cfg(test)]
mod tests;
