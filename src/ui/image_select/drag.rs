// SPDX-License-Identifier: MPL-2.0
//! Drop-zone drag sub-component.
//!
//! Tracks only what the drop zone should look like. It has no say over the
//! selection; a drop hands its files to the orchestrator for ingestion.

/// Visual phase of the drop zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Files are being dragged over the zone.
    Hover,
    /// A drop is being ingested. Internal to the handling of one drop
    /// event: the zone is back to `Idle` before the event returns, so hosts
    /// never observe this phase through the engine's output.
    Drop,
}

/// Messages for the drag sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Enter,
    Over,
    Leave,
    Drop,
}

/// Effects produced by drag events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The dropped files should be ingested, then [`State::settle`] called.
    Ingest,
}

/// Drag sub-component state.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    phase: DragPhase,
}

impl State {
    /// Handle a drag message.
    ///
    /// While `disabled`, hovering does not highlight and drops are not ingested.
    pub fn handle(&mut self, msg: Message, disabled: bool) -> Effect {
        match msg {
            Message::Enter | Message::Over => {
                if !disabled {
                    self.phase = DragPhase::Hover;
                }
                Effect::None
            }
            Message::Leave => {
                self.phase = DragPhase::Idle;
                Effect::None
            }
            Message::Drop => {
                if disabled {
                    self.phase = DragPhase::Idle;
                    Effect::None
                } else {
                    self.phase = DragPhase::Drop;
                    Effect::Ingest
                }
            }
        }
    }

    /// Returns to idle once a drop has been ingested.
    pub fn settle(&mut self) {
        self.phase = DragPhase::Idle;
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }
}
