// SPDX-License-Identifier: MPL-2.0
//! `image_select` is a multi-image selection engine for upload forms.
//!
//! It validates picked or dropped files (type, size, capacity, duplicates),
//! keeps them in a user-ordered selection, manages thumbnail preview handles,
//! and reports advisory messages through Fluent localization and a
//! TOML settings file.

#![doc(html_root_url = "https://docs.rs/image_select/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
