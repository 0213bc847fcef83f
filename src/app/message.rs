// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::nav;
use unic_langid::LanguageIdentifier;

/// Values parsed from the command line before the app starts.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub lang: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Nav(nav::Message),
    LanguageSelected(LanguageIdentifier),
}
