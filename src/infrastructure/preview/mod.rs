// SPDX-License-Identifier: MPL-2.0
//! In-memory preview store.
//!
//! [`BlobPreviewStore`] implements [`PreviewProvider`] the way a browser's
//! object-URL registry behaves: each allocation mints a fresh `blob:` locator
//! that pins the file's bytes until it is revoked. Locators are derived from a
//! blake3 hash of the content plus a sequence number, so two allocations for
//! the same bytes never collide.

use crate::application::port::preview::{PreviewError, PreviewLocator, PreviewProvider};
use crate::domain::selection::PendingFile;
use std::collections::HashMap;
use std::sync::Arc;

/// Scheme and authority of minted locators.
const LOCATOR_PREFIX: &str = "blob:image-select/";

/// Number of hex digits of the content hash kept in a locator.
const HASH_PREFIX_LEN: usize = 16;

/// Registry of live preview locators and the bytes they pin.
#[derive(Debug, Default)]
pub struct BlobPreviewStore {
    live: HashMap<PreviewLocator, Arc<[u8]>>,
    next_sequence: u64,
    /// Optional cap on the total bytes pinned by live locators.
    byte_budget: Option<u64>,
}

impl BlobPreviewStore {
    /// Creates an empty store without a byte budget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that refuses allocations past `bytes` pinned bytes.
    #[must_use]
    pub fn with_byte_budget(bytes: u64) -> Self {
        Self {
            byte_budget: Some(bytes),
            ..Self::default()
        }
    }

    /// Number of locators currently live.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Total bytes pinned by live locators.
    #[must_use]
    pub fn live_bytes(&self) -> u64 {
        self.live.values().map(|bytes| bytes.len() as u64).sum()
    }

    #[must_use]
    pub fn is_live(&self, locator: &PreviewLocator) -> bool {
        self.live.contains_key(locator)
    }

    /// Returns the bytes behind a live locator.
    #[must_use]
    pub fn resolve(&self, locator: &PreviewLocator) -> Option<&[u8]> {
        self.live.get(locator).map(AsRef::as_ref)
    }

    fn mint(&mut self, bytes: &[u8]) -> PreviewLocator {
        let hash = blake3::hash(bytes).to_hex();
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        PreviewLocator::new(format!(
            "{LOCATOR_PREFIX}{}-{sequence}",
            &hash.as_str()[..HASH_PREFIX_LEN]
        ))
    }
}

impl PreviewProvider for BlobPreviewStore {
    fn allocate(&mut self, file: &PendingFile) -> Result<PreviewLocator, PreviewError> {
        if let Some(budget) = self.byte_budget {
            let requested = file.bytes().len() as u64;
            if self.live_bytes() + requested > budget {
                return Err(PreviewError::AllocationFailed(format!(
                    "{} would exceed the {budget} byte preview budget",
                    file.name()
                )));
            }
        }

        let locator = self.mint(file.bytes());
        self.live.insert(locator.clone(), Arc::clone(file.bytes()));
        log::debug!("Allocated preview {locator} for {}", file.name());
        Ok(locator)
    }

    fn release(&mut self, locator: &PreviewLocator) -> Result<(), PreviewError> {
        if self.live.remove(locator).is_some() {
            log::debug!("Released preview {locator}");
        }
        Ok(())
    }
}
