// SPDX-License-Identifier: MPL-2.0
//! Advisory notices produced while validating a batch.
//!
//! A notice never aborts a batch. The engine collects them in step order and
//! joins them into one validation message for the user.

use std::fmt;

/// One reason a batch was trimmed.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// The declared media type is not an image type.
    NotAnImage { name: String },
    /// The file is larger than the per-file limit.
    TooLarge { name: String, max_size_mb: f64 },
    /// The selection was already full; nothing was added.
    AtCapacity { max_files: usize },
    /// Only the first `allowed` survivors were kept.
    CapacityTruncated { allowed: usize, max_files: usize },
    /// At least one survivor matched an item already selected.
    SkippedDuplicates,
}

impl Notice {
    /// Returns the i18n message key for this notice.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Notice::NotAnImage { .. } => "select-notice-not-an-image",
            Notice::TooLarge { .. } => "select-notice-too-large",
            Notice::AtCapacity { .. } => "select-notice-at-capacity",
            Notice::CapacityTruncated { .. } => "select-notice-capacity-truncated",
            Notice::SkippedDuplicates => "select-notice-skipped-duplicates",
        }
    }

    /// Returns the interpolation arguments for the i18n message.
    #[must_use]
    pub fn i18n_args(&self) -> Vec<(&'static str, NoticeArg)> {
        match self {
            Notice::NotAnImage { name } => vec![("name", NoticeArg::Text(name.clone()))],
            Notice::TooLarge { name, max_size_mb } => vec![
                ("name", NoticeArg::Text(name.clone())),
                ("max", NoticeArg::Number(*max_size_mb)),
            ],
            Notice::AtCapacity { max_files } => {
                vec![("max", NoticeArg::Count(*max_files))]
            }
            Notice::CapacityTruncated { allowed, max_files } => vec![
                ("count", NoticeArg::Count(*allowed)),
                ("max", NoticeArg::Count(*max_files)),
            ],
            Notice::SkippedDuplicates => Vec::new(),
        }
    }
}

/// Value of a notice argument.
#[derive(Debug, Clone, PartialEq)]
pub enum NoticeArg {
    Text(String),
    Count(usize),
    Number(f64),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NotAnImage { name } => write!(f, "\"{name}\" is not an image."),
            Notice::TooLarge { name, max_size_mb } => {
                write!(f, "\"{name}\" exceeds {max_size_mb} MB.")
            }
            Notice::AtCapacity { max_files } => {
                write!(f, "You already have {max_files} images.")
            }
            Notice::CapacityTruncated { allowed, max_files } => {
                let plural = if *allowed > 1 { "s" } else { "" };
                write!(
                    f,
                    "Only {allowed} more image{plural} allowed (max {max_files})."
                )
            }
            Notice::SkippedDuplicates => f.write_str("Skipped duplicates."),
        }
    }
}

/// The combined advisory message of the latest mutation attempt.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationMessage {
    notices: Vec<Notice>,
}

impl ValidationMessage {
    /// Wraps the notices of one batch; `None` when there are none.
    #[must_use]
    pub fn from_notices(notices: Vec<Notice>) -> Option<Self> {
        (!notices.is_empty()).then_some(Self { notices })
    }

    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// English text: every notice in order, joined by a single space.
    #[must_use]
    pub fn text(&self) -> String {
        self.notices
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_render_english_text() {
        assert_eq!(
            Notice::NotAnImage { name: "notes.txt".into() }.to_string(),
            "\"notes.txt\" is not an image."
        );
        assert_eq!(
            Notice::TooLarge { name: "big.png".into(), max_size_mb: 10.0 }.to_string(),
            "\"big.png\" exceeds 10 MB."
        );
        assert_eq!(
            Notice::TooLarge { name: "big.png".into(), max_size_mb: 2.5 }.to_string(),
            "\"big.png\" exceeds 2.5 MB."
        );
        assert_eq!(
            Notice::AtCapacity { max_files: 12 }.to_string(),
            "You already have 12 images."
        );
        assert_eq!(Notice::SkippedDuplicates.to_string(), "Skipped duplicates.");
    }

    #[test]
    fn truncation_pluralizes_above_one() {
        assert_eq!(
            Notice::CapacityTruncated { allowed: 1, max_files: 3 }.to_string(),
            "Only 1 more image allowed (max 3)."
        );
        assert_eq!(
            Notice::CapacityTruncated { allowed: 2, max_files: 2 }.to_string(),
            "Only 2 more images allowed (max 2)."
        );
    }

    #[test]
    fn message_joins_with_single_space() {
        let message = ValidationMessage::from_notices(vec![
            Notice::NotAnImage { name: "a.txt".into() },
            Notice::SkippedDuplicates,
        ])
        .expect("non-empty");
        assert_eq!(message.text(), "\"a.txt\" is not an image. Skipped duplicates.");
    }

    #[test]
    fn no_notices_means_no_message() {
        assert!(ValidationMessage::from_notices(Vec::new()).is_none());
    }

    #[test]
    fn i18n_keys_are_distinct() {
        let keys = [
            Notice::NotAnImage { name: String::new() }.i18n_key(),
            Notice::TooLarge { name: String::new(), max_size_mb: 1.0 }.i18n_key(),
            Notice::AtCapacity { max_files: 1 }.i18n_key(),
            Notice::CapacityTruncated { allowed: 1, max_files: 1 }.i18n_key(),
            Notice::SkippedDuplicates.i18n_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
