// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports the selection engine depends on.
//!
//! # Architecture
//!
//! The application layer sits between the domain layer (pure selection rules)
//! and the infrastructure/presentation layers. It defines:
//!
//! - **Ports (Traits)**: Abstract interfaces that infrastructure implements
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer (the engine) uses the ports
//!
//! # Example
//!
//! ```ignore
//! use image_select::application::port::PreviewProvider;
//!
//! // Infrastructure implements the port trait
//! struct ObjectUrlPreviews { /* ... */ }
//! impl PreviewProvider for ObjectUrlPreviews { /* ... */ }
//! ```

pub mod port;
