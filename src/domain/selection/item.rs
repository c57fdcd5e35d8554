// SPDX-License-Identifier: MPL-2.0
//! Selectable items and their external representation.
//!
//! A selection holds two kinds of entries: files the user just picked, which
//! still carry their bytes, and references to images that were uploaded
//! earlier and only exist as a URL.

use std::fmt;
use std::sync::Arc;

use super::candidate::PendingCandidate;

// =============================================================================
// ItemId
// =============================================================================

/// Engine-assigned identifier of a pending file.
///
/// Two pending files with the same name and size are distinct items with
/// distinct ids; the id is what preview handles are bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    /// Creates a new unique item ID.
    #[must_use]
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw id value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// IdentityKey
// =============================================================================

/// Duplicate-detection key of a pending file: `name:size`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey(String);

impl IdentityKey {
    /// Builds the key from a file name and its byte size.
    #[must_use]
    pub fn new(name: &str, size: u64) -> Self {
        Self(format!("{name}:{size}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// PendingFile
// =============================================================================

/// A file held in memory that has not been uploaded yet.
#[derive(Debug, Clone)]
pub struct PendingFile {
    id: ItemId,
    name: String,
    size: u64,
    media_type: String,
    bytes: Arc<[u8]>,
}

impl PendingFile {
    /// Accepts a validated candidate into the selection, assigning it an id.
    #[must_use]
    pub fn from_candidate(candidate: PendingCandidate) -> Self {
        let (name, size, media_type, bytes) = candidate.into_parts();
        Self {
            id: ItemId::new(),
            name,
            size,
            media_type,
            bytes,
        }
    }

    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Gives this copy an id of its own, detaching it from the item it was
    /// cloned from. Content is still shared.
    pub fn renew_id(&mut self) {
        self.id = ItemId::new();
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared byte size.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// File content, shared with every clone of this item.
    #[must_use]
    pub fn bytes(&self) -> &Arc<[u8]> {
        &self.bytes
    }

    #[must_use]
    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey::new(&self.name, self.size)
    }
}

impl PartialEq for PendingFile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PendingFile {}

// =============================================================================
// RemoteRef
// =============================================================================

/// Locator of an image that already lives on the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteRef(String);

impl RemoteRef {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RemoteRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// SelectableItem
// =============================================================================

/// One entry of a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectableItem {
    /// Raw bytes waiting to be uploaded.
    Pending(PendingFile),
    /// Content already persisted remotely.
    Remote(RemoteRef),
}

impl SelectableItem {
    /// Returns the pending file, if this item is one.
    #[must_use]
    pub fn as_pending(&self) -> Option<&PendingFile> {
        match self {
            SelectableItem::Pending(file) => Some(file),
            SelectableItem::Remote(_) => None,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, SelectableItem::Pending(_))
    }

    /// Human-readable label: the file name or the URL.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            SelectableItem::Pending(file) => file.name(),
            SelectableItem::Remote(remote) => remote.url(),
        }
    }
}

impl From<PendingFile> for SelectableItem {
    fn from(file: PendingFile) -> Self {
        SelectableItem::Pending(file)
    }
}

impl From<RemoteRef> for SelectableItem {
    fn from(remote: RemoteRef) -> Self {
        SelectableItem::Remote(remote)
    }
}

// =============================================================================
// SelectionValue
// =============================================================================

/// The selection as it is handed to and received from the host form.
///
/// Hosts that model a singular field receive a bare item when exactly one
/// entry is selected; every other length is reported as a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionValue {
    Single(SelectableItem),
    Many(Vec<SelectableItem>),
}

impl SelectionValue {
    /// Wraps an ordered item list using the single-or-sequence rule.
    #[must_use]
    pub fn from_items(mut items: Vec<SelectableItem>) -> Self {
        if items.len() == 1 {
            if let Some(item) = items.pop() {
                return SelectionValue::Single(item);
            }
        }
        SelectionValue::Many(items)
    }

    /// Normalizes the value into an ordered list.
    #[must_use]
    pub fn into_items(self) -> Vec<SelectableItem> {
        match self {
            SelectionValue::Single(item) => vec![item],
            SelectionValue::Many(items) => items,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            SelectionValue::Single(_) => 1,
            SelectionValue::Many(items) => items.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn is_single(&self) -> bool {
        matches!(self, SelectionValue::Single(_))
    }
}

impl Default for SelectionValue {
    fn default() -> Self {
        SelectionValue::Many(Vec::new())
    }
}

impl From<Vec<SelectableItem>> for SelectionValue {
    fn from(items: Vec<SelectableItem>) -> Self {
        SelectionValue::from_items(items)
    }
}
