// SPDX-License-Identifier: MPL-2.0
//! Image select message/effect types re-exported by the facade.

use crate::domain::selection::{PendingCandidate, SelectionValue};

/// Events the host forwards to the engine.
#[derive(Debug, Clone)]
pub enum Message {
    /// Files picked through a file dialog.
    FilesChosen(Vec<PendingCandidate>),
    DragEntered,
    DragOver,
    DragLeft,
    /// Files dropped onto the drop zone.
    Dropped(Vec<PendingCandidate>),
    Remove(usize),
    MoveUp(usize),
    MoveDown(usize),
    /// Move the item at `from` to position `to`. Targets outside the
    /// selection, including negative ones, are ignored.
    Reorder { from: usize, to: isize },
    DismissMessage,
    /// The host replaced the controlled value.
    Sync(SelectionValue),
}

/// What the host has to do after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The selection changed; store the new value.
    SelectionChanged(SelectionValue),
}

impl Effect {
    /// The new value, if the selection changed.
    #[must_use]
    pub fn changed_value(&self) -> Option<&SelectionValue> {
        match self {
            Effect::SelectionChanged(value) => Some(value),
            Effect::None => None,
        }
    }
}
