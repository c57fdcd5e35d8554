// SPDX-License-Identifier: MPL-2.0
//! Building pending candidates from files on disk.
//!
//! A browser reports a media type for each picked file; on the desktop the
//! type is guessed from the extension, using the `image` crate's format table.

use crate::domain::selection::{AcceptPattern, PendingCandidate};
use crate::error::{Error, Result};
use image_rs::ImageFormat;
use std::fs;
use std::path::{Path, PathBuf};

/// Media type reported for files whose extension is not recognized.
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Guesses the media type of a file from its extension.
#[must_use]
pub fn media_type_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        // Not a raster format, so the image crate does not know it.
        Some("svg") => "image/svg+xml",
        Some("txt") => "text/plain",
        Some("csv") => "text/csv",
        Some("pdf") => "application/pdf",
        Some(ext) => ImageFormat::from_extension(ext)
            .map_or(FALLBACK_MEDIA_TYPE, |format| format.to_mime_type()),
        None => FALLBACK_MEDIA_TYPE,
    }
}

/// Reads a file into a candidate named after its final path component.
///
/// # Errors
///
/// Returns [`Error::Io`] if the path has no file name or cannot be read.
pub fn candidate_from_path(path: &Path) -> Result<PendingCandidate> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| Error::Io(format!("{} has no usable file name", path.display())))?
        .to_string();
    let bytes = fs::read(path)?;
    Ok(PendingCandidate::new(name, media_type_for_path(path), bytes))
}

/// Reads the files a picker restricted to `accept` would offer.
///
/// Paths outside the accept list are skipped without being read; unreadable
/// files are logged and skipped.
#[must_use]
pub fn pick_files(paths: &[PathBuf], accept: &AcceptPattern) -> Vec<PendingCandidate> {
    paths
        .iter()
        .filter(|path| {
            let name = path.file_name().and_then(|name| name.to_str()).unwrap_or_default();
            let offered = accept.matches(name, media_type_for_path(path));
            if !offered {
                log::info!("Skipping {}: not offered by \"{accept}\"", path.display());
            }
            offered
        })
        .filter_map(|path| match candidate_from_path(path) {
            Ok(candidate) => Some(candidate),
            Err(err) => {
                log::warn!("Skipping {}: {err}", path.display());
                None
            }
        })
        .collect()
}
