// SPDX-License-Identifier: MPL-2.0
//! The contributable-locale allow-list.
//!
//! Not every display language accepts user contributions yet. The set of
//! locales that do is maintained as a static JSON artifact embedded at build
//! time and loaded once at startup. Membership is an exact string match
//! against the configured tags; no case folding or region-subtag fallback is
//! applied, so `"FR"` does not match an entry of `"fr"`.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/locales/"]
struct Asset;

const CONTRIBUTABLE_FILE: &str = "contributable.json";

/// Load-time-fixed set of locales open for contribution.
#[derive(Debug, Clone)]
pub struct ContributableLocales {
    locales: Vec<String>,
}

impl ContributableLocales {
    /// Load the embedded allow-list. A missing or malformed artifact is a
    /// startup failure; call sites never see a partially loaded set.
    pub fn load() -> Result<Self> {
        let file = Asset::get(CONTRIBUTABLE_FILE).ok_or_else(|| {
            Error::Locales(format!("embedded {} is missing", CONTRIBUTABLE_FILE))
        })?;
        Self::from_json(&String::from_utf8_lossy(file.data.as_ref()))
    }

    /// Parse an allow-list from a JSON array of locale tags.
    pub fn from_json(json: &str) -> Result<Self> {
        let locales: Vec<String> = serde_json::from_str(json)?;
        Ok(Self { locales })
    }

    /// True iff `locale` is literally present in the allow-list.
    pub fn is_contributable(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }
}
