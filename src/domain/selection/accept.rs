// SPDX-License-Identifier: MPL-2.0
//! File-picker accept patterns.
//!
//! An accept pattern is the comma-separated list a file input advertises,
//! e.g. `image/*`, `image/png,image/jpeg` or `.png,.webp`. It narrows what the
//! picker offers; the engine's own type filter runs regardless.

use std::fmt;

/// Default accept pattern.
pub const DEFAULT_ACCEPT: &str = "image/*";

/// Extensions offered for an `image/*` wildcard.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico", "svg", "avif",
];

/// One entry of an accept list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceptToken {
    /// `type/*`
    Wildcard(String),
    /// `type/subtype`
    Exact(String),
    /// `.ext`
    Extension(String),
}

impl AcceptToken {
    fn parse(raw: &str) -> Option<Self> {
        let token = raw.trim().to_ascii_lowercase();
        if token.is_empty() {
            return None;
        }
        if let Some(ext) = token.strip_prefix('.') {
            return (!ext.is_empty()).then(|| AcceptToken::Extension(ext.to_string()));
        }
        let (kind, subtype) = token.split_once('/')?;
        if kind.is_empty() || subtype.is_empty() {
            return None;
        }
        if subtype == "*" {
            Some(AcceptToken::Wildcard(kind.to_string()))
        } else {
            Some(AcceptToken::Exact(token.clone()))
        }
    }

    fn matches(&self, name: &str, media_type: &str) -> bool {
        let media_type = media_type.to_ascii_lowercase();
        match self {
            AcceptToken::Wildcard(kind) => media_type
                .split_once('/')
                .is_some_and(|(candidate_kind, _)| candidate_kind == kind),
            AcceptToken::Exact(exact) => media_type == *exact,
            AcceptToken::Extension(ext) => extension_of(name).is_some_and(|e| e == *ext),
        }
    }
}

impl fmt::Display for AcceptToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcceptToken::Wildcard(kind) => write!(f, "{kind}/*"),
            AcceptToken::Exact(exact) => f.write_str(exact),
            AcceptToken::Extension(ext) => write!(f, ".{ext}"),
        }
    }
}

/// Parsed accept list. An empty list accepts everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptPattern {
    tokens: Vec<AcceptToken>,
}

impl AcceptPattern {
    /// Parses a comma-separated accept string, ignoring malformed entries.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self {
            tokens: raw.split(',').filter_map(AcceptToken::parse).collect(),
        }
    }

    #[must_use]
    pub fn tokens(&self) -> &[AcceptToken] {
        &self.tokens
    }

    /// Returns `true` if a file with this name and media type would be offered.
    #[must_use]
    pub fn matches(&self, name: &str, media_type: &str) -> bool {
        self.tokens.is_empty() || self.tokens.iter().any(|t| t.matches(name, media_type))
    }

    /// Extensions to hand to a native file dialog filter.
    #[must_use]
    pub fn dialog_extensions(&self) -> Vec<String> {
        let mut extensions: Vec<String> = Vec::new();
        let mut push = |ext: &str| {
            if !extensions.iter().any(|e| e == ext) {
                extensions.push(ext.to_string());
            }
        };
        for token in &self.tokens {
            match token {
                AcceptToken::Wildcard(kind) if kind == "image" => {
                    IMAGE_EXTENSIONS.iter().for_each(|ext| push(ext));
                }
                AcceptToken::Wildcard(_) => {}
                AcceptToken::Exact(exact) => {
                    if let Some((_, subtype)) = exact.split_once('/') {
                        match subtype {
                            "jpeg" => {
                                push("jpg");
                                push("jpeg");
                            }
                            "svg+xml" => push("svg"),
                            "x-icon" | "vnd.microsoft.icon" => push("ico"),
                            other => push(other),
                        }
                    }
                }
                AcceptToken::Extension(ext) => push(ext),
            }
        }
        extensions
    }
}

impl Default for AcceptPattern {
    fn default() -> Self {
        Self::parse(DEFAULT_ACCEPT)
    }
}

impl fmt::Display for AcceptPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.tokens.iter().map(ToString::to_string).collect();
        f.write_str(&joined.join(","))
    }
}

fn extension_of(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    (!stem.is_empty() && !ext.is_empty()).then(|| ext.to_ascii_lowercase())
}
