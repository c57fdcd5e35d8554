// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: the
//! host owns rendering and forwards events, components own their state and
//! answer with effects.
//!
//! # Components
//!
//! - [`image_select`] - Multi-image picker with validation, ordering and previews

pub mod image_select;
