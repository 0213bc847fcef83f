// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Speak,
    Listen,
    Settings,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Home, Screen::Speak, Screen::Listen, Screen::Settings];

    /// Application-relative path of the screen, before locale prefixing.
    pub fn app_path(self) -> &'static str {
        match self {
            Screen::Home => "/",
            Screen::Speak => "/speak",
            Screen::Listen => "/listen",
            Screen::Settings => "/settings",
        }
    }

    /// Reverse lookup from an application-relative path.
    pub fn from_app_path(path: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|screen| screen.app_path() == path)
    }

    /// i18n key of the screen's navigation label.
    pub fn nav_key(self) -> &'static str {
        match self {
            Screen::Home => "nav-home",
            Screen::Speak => "nav-speak",
            Screen::Listen => "nav-listen",
            Screen::Settings => "nav-settings",
        }
    }
}
