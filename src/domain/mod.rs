// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core selection rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`selection`]: Selection types ([`SelectableItem`](selection::SelectableItem),
//!   [`PendingCandidate`](selection::PendingCandidate), [`MaxFiles`](selection::MaxFiles),
//!   [`Notice`](selection::Notice))

pub mod selection;
