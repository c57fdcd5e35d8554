// SPDX-License-Identifier: MPL-2.0
//! Localized texts rendered around the drop zone.

use crate::i18n::fluent::I18n;
use fluent_bundle::FluentValue;

use super::Options;

/// Fixed texts of the widget in the active locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub prompt: String,
    /// Limits shown under the prompt, e.g. `Up to 12 images, 10 MB each`.
    pub hint: String,
    pub empty: String,
    pub move_up: String,
    pub move_down: String,
    pub remove: String,
    pub dismiss: String,
}

impl Labels {
    #[must_use]
    pub fn new(i18n: &I18n, options: &Options) -> Self {
        let hint = i18n.tr_with_args(
            "select-hint-limits",
            &[
                ("max_files", FluentValue::from(options.max_files.value())),
                ("max_size_mb", FluentValue::from(options.max_size_mb.value())),
            ],
        );
        Self {
            prompt: i18n.tr("select-prompt"),
            hint,
            empty: i18n.tr("select-empty"),
            move_up: i18n.tr("select-move-up"),
            move_down: i18n.tr("select-move-down"),
            remove: i18n.tr("select-remove"),
            dismiss: i18n.tr("select-dismiss"),
        }
    }
}
