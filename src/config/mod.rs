// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[selection]` - Accept pattern, capacity, per-file size limit, disabled flag
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `IMAGE_SELECT_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use image_select::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.selection.max_files = 4;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::selection::{AcceptPattern, MaxFiles, MaxSizeMb};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key returned by [`load`] when the settings file exists but is broken.
pub const CONFIG_LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Image selection limits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionConfig {
    /// Accept pattern advertised to file pickers (e.g. `image/*`).
    #[serde(default = "default_accept")]
    pub accept: String,

    /// Maximum number of images in one selection.
    #[serde(default = "default_max_files")]
    pub max_files: usize,

    /// Per-file size limit in megabytes.
    #[serde(default = "default_max_size_mb")]
    pub max_size_mb: f64,

    /// Whether user interaction is suppressed.
    #[serde(default)]
    pub disabled: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            accept: default_accept(),
            max_files: DEFAULT_MAX_FILES,
            max_size_mb: DEFAULT_MAX_SIZE_MB,
            disabled: DEFAULT_DISABLED,
        }
    }
}

impl SelectionConfig {
    /// Parsed accept pattern.
    #[must_use]
    pub fn accept_pattern(&self) -> AcceptPattern {
        AcceptPattern::parse(&self.accept)
    }

    /// Capacity, clamped to the supported range.
    #[must_use]
    pub fn max_files(&self) -> MaxFiles {
        MaxFiles::new(self.max_files)
    }

    /// Size limit, clamped to the supported range.
    #[must_use]
    pub fn max_size_mb(&self) -> MaxSizeMb {
        MaxSizeMb::new(self.max_size_mb)
    }
}

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub selection: SelectionConfig,
}

fn default_accept() -> String {
    DEFAULT_ACCEPT.to_string()
}

fn default_max_files() -> usize {
    DEFAULT_MAX_FILES
}

fn default_max_size_mb() -> f64 {
    DEFAULT_MAX_SIZE_MB
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns the config and, if the file existed but could not be parsed, the
/// i18n key of a warning to show the user. Defaults are used in that case.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring unreadable config {}: {err}", path.display());
                    return (Config::default(), Some(CONFIG_LOAD_ERROR_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`] if
/// it is not valid TOML for [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Propagates the errors of [`save_to_path`].
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Propagates the errors of [`save_to_path`].
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns [`Error::Io`] on filesystem failure and [`Error::Config`] if
/// serialization fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
