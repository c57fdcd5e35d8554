// SPDX-License-Identifier: MPL-2.0
//! Fluent-backed translation bundles.

use crate::domain::selection::{Notice, NoticeArg, ValidationMessage};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale used when nothing else resolves.
pub const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    /// Loads every embedded `.ftl` file and picks the active locale.
    ///
    /// The locale is taken from the CLI argument, then the config file, then
    /// the OS, falling back to `en-US`.
    pub fn new(cli_lang: Option<&str>, config_lang: Option<&str>) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((_, errors)) => {
                    log::error!("Skipping {filename}: {} syntax error(s)", errors.len());
                    continue;
                }
            };
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Plain text output; hosts render into non-bidi-aware surfaces.
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                log::error!("Skipping {filename}: {} duplicate message(s)", errors.len());
                continue;
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }

        let current_locale = resolve_locale(cli_lang, config_lang, &available_locales)
            .unwrap_or_else(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Translates a key without arguments.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.tr_with_args(key, &[])
    }

    /// Translates a key, interpolating the given arguments.
    ///
    /// Unknown keys render as `MISSING: <key>`.
    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, FluentValue<'_>)]) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut fluent_args = FluentArgs::new();
                for (name, value) in args {
                    fluent_args.set(*name, value.clone());
                }
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, Some(&fluent_args), &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
                log::warn!("Formatting {key} reported {} error(s)", errors.len());
            }
        }
        format!("MISSING: {key}")
    }

    /// Renders one validation notice in the current locale.
    #[must_use]
    pub fn notice(&self, notice: &Notice) -> String {
        let args: Vec<(&str, FluentValue<'_>)> = notice
            .i18n_args()
            .into_iter()
            .map(|(name, arg)| {
                let value = match arg {
                    NoticeArg::Text(text) => FluentValue::from(text),
                    NoticeArg::Count(count) => FluentValue::from(count),
                    NoticeArg::Number(number) => FluentValue::from(number),
                };
                (name, value)
            })
            .collect();
        self.tr_with_args(notice.i18n_key(), &args)
    }

    /// Renders a full validation message, notices joined by a single space.
    #[must_use]
    pub fn message(&self, message: &ValidationMessage) -> String {
        message
            .notices()
            .iter()
            .map(|notice| self.notice(notice))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

fn parse_available(lang: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    lang.parse::<LanguageIdentifier>()
        .ok()
        .filter(|parsed| available.contains(parsed))
}

fn resolve_locale(
    cli_lang: Option<&str>,
    config_lang: Option<&str>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang) = cli_lang.and_then(|l| parse_available(l, available)) {
        return Some(lang);
    }

    // 2. Check config file
    if let Some(lang) = config_lang.and_then(|l| parse_available(l, available)) {
        return Some(lang);
    }

    // 3. Check OS locale
    sys_locale::get_locale().and_then(|os| parse_available(&os, available))
}
