// SPDX-License-Identifier: MPL-2.0
//! Batch validation pipeline.
//!
//! Runs the type, size, capacity and duplicate checks, in that order, over a
//! batch of candidates. Every check is advisory: rejected candidates produce a
//! [`Notice`] and the remainder keeps flowing to the next step.

use crate::domain::selection::{
    IdentityKey, MaxFiles, MaxSizeMb, Notice, PendingCandidate, SelectableItem,
};
use std::collections::HashSet;

/// Result of validating one batch.
#[derive(Debug, Default)]
pub struct Outcome {
    /// Candidates to append, in batch order.
    pub accepted: Vec<PendingCandidate>,
    /// Notices in step order.
    pub notices: Vec<Notice>,
}

/// Validates `candidates` against the current selection.
#[must_use]
pub fn validate(
    existing: &[SelectableItem],
    candidates: Vec<PendingCandidate>,
    max_files: MaxFiles,
    max_size_mb: MaxSizeMb,
) -> Outcome {
    let mut notices = Vec::new();

    let typed: Vec<PendingCandidate> = candidates
        .into_iter()
        .filter(|candidate| {
            let keep = candidate.is_image();
            if !keep {
                notices.push(Notice::NotAnImage {
                    name: candidate.name().to_string(),
                });
            }
            keep
        })
        .collect();

    let mut survivors: Vec<PendingCandidate> = typed
        .into_iter()
        .filter(|candidate| {
            let keep = !max_size_mb.is_exceeded_by(candidate.size());
            if !keep {
                notices.push(Notice::TooLarge {
                    name: candidate.name().to_string(),
                    max_size_mb: max_size_mb.value(),
                });
            }
            keep
        })
        .collect();

    let current = existing.len();
    if current + survivors.len() > max_files.value() {
        if current >= max_files.value() {
            notices.push(Notice::AtCapacity {
                max_files: max_files.value(),
            });
            return Outcome {
                accepted: Vec::new(),
                notices,
            };
        }
        let allowed = max_files.remaining(current);
        survivors.truncate(allowed);
        notices.push(Notice::CapacityTruncated {
            allowed,
            max_files: max_files.value(),
        });
    }

    // Keys seen so far, including earlier candidates of this batch.
    let mut seen: HashSet<IdentityKey> = existing
        .iter()
        .filter_map(SelectableItem::as_pending)
        .map(|file| file.identity_key())
        .collect();
    let before = survivors.len();
    survivors.retain(|candidate| seen.insert(candidate.identity_key()));
    if survivors.len() < before {
        notices.push(Notice::SkippedDuplicates);
    }

    Outcome {
        accepted: survivors,
        notices,
    }
}
