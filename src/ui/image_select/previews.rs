// SPDX-License-Identifier: MPL-2.0
//! Preview handle bookkeeping.
//!
//! Every pending file in the selection owns exactly one registry slot. A slot
//! holds the locator the provider handed out, or nothing when allocation
//! failed and the thumbnail renders blank.

use crate::application::port::preview::{PreviewLocator, PreviewProvider};
use crate::domain::selection::{ItemId, PendingFile, SelectableItem};
use std::collections::{HashMap, HashSet};

/// Where a thumbnail's image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewSource {
    /// Locator minted for a pending file.
    Local(PreviewLocator),
    /// URL of an already uploaded image.
    Remote(String),
    /// Allocation failed; render a placeholder.
    Blank,
}

impl PreviewSource {
    /// The `src` value of the thumbnail; empty for a blank preview.
    #[must_use]
    pub fn src(&self) -> &str {
        match self {
            PreviewSource::Local(locator) => locator.as_str(),
            PreviewSource::Remote(url) => url,
            PreviewSource::Blank => "",
        }
    }
}

/// One thumbnail as the host should render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewEntry {
    pub index: usize,
    pub source: PreviewSource,
    /// Alternative text, `image-<index>`.
    pub alt: String,
    /// Stable render key, `<src>-<index>`.
    pub key: String,
}

impl PreviewEntry {
    fn new(index: usize, source: PreviewSource) -> Self {
        let key = format!("{}-{index}", source.src());
        Self {
            index,
            source,
            alt: format!("image-{index}"),
            key,
        }
    }
}

/// Live preview slots, keyed by pending item id.
#[derive(Debug, Default)]
pub struct PreviewRegistry {
    slots: HashMap<ItemId, Option<PreviewLocator>>,
}

impl PreviewRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a preview for `file` unless it already has a slot.
    pub fn acquire<P: PreviewProvider>(&mut self, provider: &mut P, file: &PendingFile) {
        if self.slots.contains_key(&file.id()) {
            return;
        }
        let locator = match provider.allocate(file) {
            Ok(locator) => Some(locator),
            Err(err) => {
                log::warn!("No preview for {}: {err}", file.name());
                None
            }
        };
        self.slots.insert(file.id(), locator);
    }

    /// Releases the slot of one item. Unknown ids are ignored.
    pub fn release<P: PreviewProvider>(&mut self, provider: &mut P, id: ItemId) {
        if let Some(Some(locator)) = self.slots.remove(&id) {
            release_quietly(provider, &locator);
        }
    }

    /// Releases every slot whose item is not in `keep`.
    pub fn retain<P: PreviewProvider>(&mut self, provider: &mut P, keep: &HashSet<ItemId>) {
        let stale: Vec<ItemId> = self
            .slots
            .keys()
            .filter(|id| !keep.contains(id))
            .copied()
            .collect();
        for id in stale {
            self.release(provider, id);
        }
    }

    /// Releases every slot.
    pub fn release_all<P: PreviewProvider>(&mut self, provider: &mut P) {
        for (_, locator) in self.slots.drain() {
            if let Some(locator) = locator {
                release_quietly(provider, &locator);
            }
        }
    }

    #[must_use]
    pub fn locator(&self, id: ItemId) -> Option<&PreviewLocator> {
        self.slots.get(&id).and_then(Option::as_ref)
    }

    /// Number of slots, including blank ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Thumbnail entries for `items`, in order.
    #[must_use]
    pub fn entries(&self, items: &[SelectableItem]) -> Vec<PreviewEntry> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let source = match item {
                    SelectableItem::Pending(file) => self
                        .locator(file.id())
                        .cloned()
                        .map_or(PreviewSource::Blank, PreviewSource::Local),
                    SelectableItem::Remote(remote) => PreviewSource::Remote(remote.url().to_string()),
                };
                PreviewEntry::new(index, source)
            })
            .collect()
    }
}

fn release_quietly<P: PreviewProvider>(provider: &mut P, locator: &PreviewLocator) {
    if let Err(err) = provider.release(locator) {
        log::warn!("Ignoring failed preview release: {err}");
    }
}
