// SPDX-License-Identifier: MPL-2.0
//! Locale-prefixed route building.
//!
//! Application-relative paths (`/speak`, `/listen`, ...) are scoped to the
//! active locale by inserting the locale tag as the first path segment, so
//! `es` + `/speak` becomes `/es/speak`. This is plain string templating:
//! neither the locale nor the path is validated, and malformed input passes
//! through unchanged into a malformed route.

/// Prefix `path` with `locale` as its first segment.
pub fn locale_route(locale: &str, path: &str) -> String {
    format!("/{}{}", locale, path)
}

/// Builds locale-prefixed routes for a fixed locale.
///
/// The router carries the active locale explicitly; callers construct a new
/// one whenever the locale changes instead of reading ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRouter {
    locale: String,
}

impl LocaleRouter {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    /// The locale this router prefixes with.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Locale-prefixed form of an application-relative path.
    pub fn route(&self, path: &str) -> String {
        locale_route(&self.locale, path)
    }
}
