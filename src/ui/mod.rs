// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! This module follows a component-based architecture with the Elm-style
//! "state down, messages up" pattern.
//!
//! - [`nav`] - Locale-scoped link and navigation-link widgets
//! - [`gate`] - Conditional rendering gate for contributable locales
//! - [`localized`] - Rendering helper for localized message attributes
//! - [`settings`] - Settings screen with the language picker

pub mod gate;
pub mod localized;
pub mod nav;
pub mod settings;
