// SPDX-License-Identifier: MPL-2.0
//! Crate-level error type.
//!
//! Validation rejections are not errors: they become notices in the
//! validation message, and preview provider failures are absorbed by the
//! engine. These variants cover I/O, configuration and host contract
//! violations.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The host addressed an item that is not in the selection.
    #[error("Index {index} is out of bounds for a selection of {len} item(s)")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
