// SPDX-License-Identifier: MPL-2.0
//! Constructor, operations and message dispatch for the selection engine.

use crate::application::port::preview::PreviewProvider;
use crate::domain::selection::{
    ItemId, PendingCandidate, PendingFile, SelectableItem, SelectionValue, ValidationMessage,
};
use crate::error::{Error, Result};
use std::collections::HashSet;

use super::{
    drag, previews, validation, DragPhase, Effect, Message, Options, Output, PreviewEntry, State,
};

impl<P: PreviewProvider> State<P> {
    /// Create an engine with an empty selection.
    pub fn new(options: Options, provider: P) -> Self {
        Self::with_value(options, SelectionValue::default(), provider)
    }

    /// Create an engine seeded with the host's current value.
    ///
    /// Previews are allocated for every pending file in `value`.
    pub fn with_value(options: Options, value: SelectionValue, provider: P) -> Self {
        let mut state = Self {
            options,
            items: Vec::new(),
            message: None,
            drag: drag::State::default(),
            previews: previews::PreviewRegistry::new(),
            provider,
        };
        state.sync(value);
        state
    }

    /// Dispatch one host event.
    ///
    /// Contract violations from the host (out-of-range indices) are logged
    /// and produce [`Effect::None`].
    pub fn handle(&mut self, msg: Message) -> Effect {
        let result = match msg {
            Message::FilesChosen(candidates) => Ok(self.ingest(candidates)),
            Message::DragEntered => Ok(self.handle_drag(drag::Message::Enter)),
            Message::DragOver => Ok(self.handle_drag(drag::Message::Over)),
            Message::DragLeft => Ok(self.handle_drag(drag::Message::Leave)),
            Message::Dropped(candidates) => Ok(self.handle_drop(candidates)),
            Message::Remove(index) => self.remove(index),
            Message::MoveUp(index) => {
                let to = isize::try_from(index).map_or(isize::MAX, |index| index - 1);
                self.reorder(index, to)
            }
            Message::MoveDown(index) => {
                let to = isize::try_from(index.saturating_add(1)).unwrap_or(isize::MAX);
                self.reorder(index, to)
            }
            Message::Reorder { from, to } => self.reorder(from, to),
            Message::DismissMessage => {
                self.dismiss_message();
                Ok(Effect::None)
            }
            Message::Sync(value) => {
                self.sync(value);
                Ok(Effect::None)
            }
        };

        result.unwrap_or_else(|err| {
            log::error!("Ignoring invalid selection event: {err}");
            Effect::None
        })
    }

    fn handle_drag(&mut self, msg: drag::Message) -> Effect {
        self.drag.handle(msg, self.options.disabled);
        Effect::None
    }

    fn handle_drop(&mut self, candidates: Vec<PendingCandidate>) -> Effect {
        match self.drag.handle(drag::Message::Drop, self.options.disabled) {
            drag::Effect::Ingest => {
                let effect = self.ingest(candidates);
                self.drag.settle();
                effect
            }
            drag::Effect::None => Effect::None,
        }
    }

    /// Validate a batch and append what survives.
    ///
    /// The validation message is replaced by this batch's notices, or cleared
    /// when there are none. Returns [`Effect::SelectionChanged`] only if at
    /// least one file was added.
    pub fn ingest(&mut self, candidates: Vec<PendingCandidate>) -> Effect {
        if self.options.disabled {
            return Effect::None;
        }

        let total = candidates.len();
        let outcome = validation::validate(
            &self.items,
            candidates,
            self.options.max_files,
            self.options.max_size_mb,
        );
        log::debug!(
            "Accepted {} of {total} candidate(s), {} notice(s)",
            outcome.accepted.len(),
            outcome.notices.len()
        );

        self.message = ValidationMessage::from_notices(outcome.notices);
        if outcome.accepted.is_empty() {
            return Effect::None;
        }

        for candidate in outcome.accepted {
            let file = PendingFile::from_candidate(candidate);
            self.previews.acquire(&mut self.provider, &file);
            self.items.push(SelectableItem::Pending(file));
        }
        self.changed()
    }

    /// Remove the item at `index`, releasing its preview.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index` is not in the selection.
    pub fn remove(&mut self, index: usize) -> Result<Effect> {
        if self.options.disabled {
            return Ok(Effect::None);
        }
        self.check_index(index)?;

        let item = self.items.remove(index);
        if let SelectableItem::Pending(file) = &item {
            self.previews.release(&mut self.provider, file.id());
        }
        self.message = None;
        Ok(self.changed())
    }

    /// Move the item at `from` to position `to`.
    ///
    /// A `to` outside the selection is a no-op, which makes the first and last
    /// items' outward moves harmless.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `from` is not in the selection.
    pub fn reorder(&mut self, from: usize, to: isize) -> Result<Effect> {
        if self.options.disabled {
            return Ok(Effect::None);
        }
        self.check_index(from)?;

        let Some(to) = usize::try_from(to).ok().filter(|to| *to < self.items.len()) else {
            return Ok(Effect::None);
        };
        let item = self.items.remove(from);
        self.items.insert(to, item);
        self.message = None;
        Ok(self.changed())
    }

    /// Clear the validation message.
    pub fn dismiss_message(&mut self) {
        self.message = None;
    }

    /// Adopt a value supplied by the host.
    ///
    /// Previews of pending files that are gone are released and new pending
    /// files get one. The value is taken as is; it is not validated, but a
    /// pending file listed more than once gets a fresh id per extra copy so
    /// that every entry owns its own preview.
    pub fn sync(&mut self, value: SelectionValue) {
        self.items = value.into_items();

        let mut seen = HashSet::new();
        for item in &mut self.items {
            if let SelectableItem::Pending(file) = item {
                if !seen.insert(file.id()) {
                    log::debug!("Repeated entry for {} gets its own id", file.name());
                    file.renew_id();
                }
            }
        }

        let keep: HashSet<ItemId> = self.pending_files().map(PendingFile::id).collect();
        self.previews.retain(&mut self.provider, &keep);
        for item in &self.items {
            if let SelectableItem::Pending(file) = item {
                self.previews.acquire(&mut self.provider, file);
            }
        }
    }

    /// Enable or disable user interaction.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.options.disabled = disabled;
        if disabled {
            self.drag.settle();
        }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn items(&self) -> &[SelectableItem] {
        &self.items
    }

    /// The selection in host representation.
    #[must_use]
    pub fn value(&self) -> SelectionValue {
        SelectionValue::from_items(self.items.clone())
    }

    #[must_use]
    pub fn message(&self) -> Option<&ValidationMessage> {
        self.message.as_ref()
    }

    #[must_use]
    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.options.disabled
    }

    /// Thumbnails for the current selection, in order.
    #[must_use]
    pub fn previews(&self) -> Vec<PreviewEntry> {
        self.previews.entries(&self.items)
    }

    /// Number of pending files with a preview slot.
    #[must_use]
    pub fn preview_slots(&self) -> usize {
        self.previews.len()
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Snapshot of everything the host renders.
    #[must_use]
    pub fn output(&self) -> Output {
        Output {
            value: self.value(),
            message: self.message.clone(),
            drag: self.drag.phase(),
            disabled: self.options.disabled,
            previews: self.previews(),
        }
    }

    fn pending_files(&self) -> impl Iterator<Item = &PendingFile> {
        self.items.iter().filter_map(SelectableItem::as_pending)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.items.len();
        if index < len {
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds { index, len })
        }
    }

    fn changed(&self) -> Effect {
        Effect::SelectionChanged(self.value())
    }
}
