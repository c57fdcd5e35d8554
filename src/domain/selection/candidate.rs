// SPDX-License-Identifier: MPL-2.0
//! Raw files offered to the engine by a picker dialog or a drop event.

use std::sync::Arc;

use super::item::IdentityKey;

/// Media-type prefix every accepted candidate must carry.
pub const IMAGE_MEDIA_PREFIX: &str = "image/";

/// A file the user offered but the engine has not validated yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCandidate {
    name: String,
    size: u64,
    media_type: String,
    bytes: Arc<[u8]>,
}

impl PendingCandidate {
    /// Creates a candidate whose declared size is the length of its content.
    #[must_use]
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let size = bytes.len() as u64;
        Self {
            name: name.into(),
            size,
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Creates a candidate with an explicit declared size.
    ///
    /// Browsers report the size separately from the content; this keeps the
    /// two apart so large files can be described without holding their bytes.
    #[must_use]
    pub fn with_declared_size(
        name: impl Into<String>,
        media_type: impl Into<String>,
        size: u64,
        bytes: Arc<[u8]>,
    ) -> Self {
        Self {
            name: name.into(),
            size,
            media_type: media_type.into(),
            bytes,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Returns `true` if the declared media type is an image type.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with(IMAGE_MEDIA_PREFIX)
    }

    #[must_use]
    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey::new(&self.name, self.size)
    }

    pub(crate) fn into_parts(self) -> (String, u64, String, Arc<[u8]>) {
        (self.name, self.size, self.media_type, self.bytes)
    }
}
