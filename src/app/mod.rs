// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between screens.
//!
//! The `App` struct wires together localization, the contributable-locale
//! allow-list, and screen navigation, and translates messages into side
//! effects like config persistence or opening the system browser. The
//! current location is always a locale-prefixed path (`/es/speak`), rebuilt
//! whenever the display language changes.

mod message;
mod screen;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config, DEFAULT_WEB_BASE_URL};
use crate::i18n::fluent::I18n;
use crate::locales::ContributableLocales;
use crate::routes::LocaleRouter;
use crate::ui::gate::{self, GateContent};
use crate::ui::localized;
use crate::ui::nav::{self, Event as NavEvent, ExternalTarget, LinkConfig};
use crate::ui::settings;
use iced::widget::{Column, Container, Row, Text};
use iced::{window, Element, Length, Task};
use unic_langid::LanguageIdentifier;

pub struct App {
    i18n: I18n,
    config: Config,
    contributable: ContributableLocales,
    screen: Screen,
    /// Current locale-prefixed location, e.g. `/es/speak`.
    location: String,
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(800.0, 600.0),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state from `Flags` received from the launcher.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            eprintln!("Failed to load config: {}", err);
            Config::default()
        });
        let i18n = I18n::new(flags.lang, &config);
        let contributable =
            ContributableLocales::load().expect("contributable locale list must load at startup");
        let location =
            LocaleRouter::new(i18n.current_locale().to_string()).route(Screen::Home.app_path());

        (
            Self {
                i18n,
                config,
                contributable,
                screen: Screen::Home,
                location,
            },
            Task::none(),
        )
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    pub fn contributable(&self) -> &ContributableLocales {
        &self.contributable
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The current locale-prefixed location.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Route builder for the active locale. Rebuilt on demand so a language
    /// switch is picked up on the next render.
    pub fn router(&self) -> LocaleRouter {
        LocaleRouter::new(self.i18n.current_locale().to_string())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Nav(msg) => match nav::update(msg) {
                NavEvent::Navigate(path) => self.navigate_to(path),
                NavEvent::OpenExternal(target) => self.open_external(&target),
            },
            Message::LanguageSelected(locale) => {
                self.set_language(locale);
                if let Err(err) = config::save(&self.config) {
                    eprintln!("Failed to save config: {}", err);
                }
            }
        }
        Task::none()
    }

    /// Switch the display language and re-scope the current location to it.
    pub fn set_language(&mut self, locale: LanguageIdentifier) {
        self.i18n.set_locale(locale);
        self.location = self.router().route(self.screen.app_path());
        self.config.language = Some(self.i18n.current_locale().to_string());
    }

    fn navigate_to(&mut self, path: String) {
        match self.screen_for_location(&path) {
            Some(screen) => {
                self.screen = screen;
                self.location = path;
            }
            None => eprintln!("Ignoring navigation to unknown route: {}", path),
        }
    }

    /// Resolve a locale-prefixed location back to a screen. The prefix must
    /// match the active locale; anything else is an unknown route.
    fn screen_for_location(&self, location: &str) -> Option<Screen> {
        let prefix = format!("/{}", self.i18n.current_locale());
        let rest = location.strip_prefix(&prefix)?;
        let rest = if rest.is_empty() { "/" } else { rest };
        Screen::from_app_path(rest)
    }

    /// Absolute URL of an external target on the hosted site.
    fn external_url(&self, target: &ExternalTarget) -> String {
        let base = self
            .config
            .web_base_url
            .as_deref()
            .unwrap_or(DEFAULT_WEB_BASE_URL);
        format!("{}{}", base.trim_end_matches('/'), target.path)
    }

    fn open_external(&self, target: &ExternalTarget) {
        // The system browser is a separate context with no handle back to us,
        // which is exactly what the target's safety flags call for.
        debug_assert!(target.new_context && target.isolate_opener);
        let url = self.external_url(target);
        if let Err(err) = webbrowser::open(&url) {
            eprintln!("Failed to open browser for {}: {}", url, err);
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let router = self.router();

        let mut nav_bar = Row::new().spacing(8.0).padding(8.0);
        for screen in Screen::ALL {
            let link = nav::locale_nav_link(
                &router,
                LinkConfig::new(screen.app_path(), self.i18n.tr(screen.nav_key())),
                &self.location,
            );
            nav_bar = nav_bar.push(link.map(Message::Nav));
        }
        let guide = nav::locale_link(
            &router,
            LinkConfig::new("/guide", self.i18n.tr("nav-guide")).blank(true),
        );
        nav_bar = nav_bar.push(guide.map(Message::Nav));

        let content = match self.screen {
            Screen::Home => self.view_home(),
            Screen::Speak => self.view_speak(),
            Screen::Listen => self.view_listen(),
            Screen::Settings => settings::view_settings(self),
        };

        Column::new()
            .push(nav_bar)
            .push(Container::new(content).width(Length::Fill).padding(16.0))
            .into()
    }

    fn view_home(&self) -> Element<'_, Message> {
        let locale = self.i18n.current_locale().to_string();
        let status = gate::view(
            &self.contributable,
            &locale,
            GateContent::Render(Box::new(move |contributable| {
                let key = if contributable {
                    "contribute-open"
                } else {
                    "contribute-locked"
                };
                Text::new(self.i18n.tr(key)).into()
            })),
        );

        Column::new()
            .spacing(12.0)
            .push(Text::new(self.i18n.tr("home-heading")).size(30))
            .push(Text::new(self.i18n.tr("home-intro")))
            .push(status)
            .into()
    }

    fn view_speak(&self) -> Element<'_, Message> {
        let locale = self.i18n.current_locale().to_string();
        let task = gate::view(
            &self.contributable,
            &locale,
            GateContent::Children(Text::new(self.i18n.tr("speak-intro")).into()),
        );

        Column::new()
            .spacing(12.0)
            .push(Text::new(self.i18n.tr("speak-heading")).size(30))
            .push(localized::attribute(
                &self.i18n,
                "nav-speak",
                "title",
                |value| Text::new(value).size(16).into(),
            ))
            .push(task)
            .into()
    }

    fn view_listen(&self) -> Element<'_, Message> {
        let locale = self.i18n.current_locale().to_string();
        let task = gate::view(
            &self.contributable,
            &locale,
            GateContent::Children(Text::new(self.i18n.tr("listen-intro")).into()),
        );

        Column::new()
            .spacing(12.0)
            .push(Text::new(self.i18n.tr("listen-heading")).size(30))
            .push(localized::attribute(
                &self.i18n,
                "nav-listen",
                "title",
                |value| Text::new(value).size(16).into(),
            ))
            .push(task)
            .into()
    }
}
