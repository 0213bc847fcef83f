// SPDX-License-Identifier: MPL-2.0
//! Locale-scoped link components.
//!
//! Links in this application never point at a bare path: the target is
//! always run through a [`LocaleRouter`] so the active locale appears as the
//! first path segment. Two kinds of link exist:
//!
//! - in-app links, which emit a navigation event the parent resolves to a
//!   screen change, and
//! - blank links, which open the hosted web version of the target in a
//!   separate browsing context with no handle back to the opener.
//!
//! Presentation attributes are an enumerated struct rather than an
//! open-ended bag; anything not modeled in [`LinkAttrs`] is deliberately not
//! forwardable.

use crate::routes::LocaleRouter;
use iced::widget::{button, Row, Text};
use iced::{Element, Length, Padding};

/// Presentation attributes forwarded to the underlying link widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkAttrs {
    pub width: Option<Length>,
    pub padding: Option<Padding>,
}

/// Configuration for a locale-scoped link.
#[derive(Debug, Clone)]
pub struct LinkConfig {
    /// Application-relative target path, e.g. `/speak`.
    pub to: String,
    pub label: String,
    /// When true, the link opens externally instead of navigating in-app.
    pub blank: bool,
    pub attrs: LinkAttrs,
}

impl LinkConfig {
    pub fn new(to: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            label: label.into(),
            blank: false,
            attrs: LinkAttrs::default(),
        }
    }

    pub fn blank(mut self, blank: bool) -> Self {
        self.blank = blank;
        self
    }

    pub fn attrs(mut self, attrs: LinkAttrs) -> Self {
        self.attrs = attrs;
        self
    }
}

/// Target of an external activation.
///
/// The flags mirror the anchor conventions of the hosted site: the page
/// opens in a new browsing context, and that context gets no reference back
/// to the opener and sends no referrer. They are never set independently;
/// every external target carries both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalTarget {
    /// Locale-prefixed path on the hosted site.
    pub path: String,
    pub new_context: bool,
    pub isolate_opener: bool,
}

impl ExternalTarget {
    fn new(path: String) -> Self {
        Self {
            path,
            new_context: true,
            isolate_opener: true,
        }
    }
}

/// Messages emitted by link widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(String),
    OpenExternal(ExternalTarget),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    /// Switch to the screen behind this locale-prefixed path.
    Navigate(String),
    /// Open the target in the system browser.
    OpenExternal(ExternalTarget),
}

/// Process a link message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Navigate(path) => Event::Navigate(path),
        Message::OpenExternal(target) => Event::OpenExternal(target),
    }
}

/// The message a link with this configuration emits when activated.
fn activation(router: &LocaleRouter, cfg: &LinkConfig) -> Message {
    let target = router.route(&cfg.to);
    if cfg.blank {
        Message::OpenExternal(ExternalTarget::new(target))
    } else {
        Message::Navigate(target)
    }
}

/// Render a locale-scoped link.
pub fn locale_link<'a>(router: &LocaleRouter, cfg: LinkConfig) -> Element<'a, Message> {
    let message = activation(router, &cfg);

    let label: Element<'a, Message> = if cfg.blank {
        // Marker so external links are distinguishable from in-app ones.
        Row::new()
            .spacing(4.0)
            .push(Text::new(cfg.label))
            .push(Text::new("\u{2197}"))
            .into()
    } else {
        Text::new(cfg.label).into()
    };

    let mut link = button(label).on_press(message).style(button::text);
    if let Some(width) = cfg.attrs.width {
        link = link.width(width);
    }
    if let Some(padding) = cfg.attrs.padding {
        link = link.padding(padding);
    }
    link.into()
}

/// Render a locale-scoped navigation link, highlighted when `current_path`
/// is the link's own locale-prefixed target.
pub fn locale_nav_link<'a>(
    router: &LocaleRouter,
    cfg: LinkConfig,
    current_path: &str,
) -> Element<'a, Message> {
    let target = router.route(&cfg.to);
    let active = current_path == target;

    let mut link = button(Text::new(cfg.label))
        .on_press(Message::Navigate(target))
        .style(if active { button::primary } else { button::text });
    if let Some(width) = cfg.attrs.width {
        link = link.width(width);
    }
    if let Some(padding) = cfg.attrs.padding {
        link = link.padding(padding);
    }
    link.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_link_navigates_to_prefixed_target() {
        let router = LocaleRouter::new("es");
        let cfg = LinkConfig::new("/speak", "Speak");
        match activation(&router, &cfg) {
            Message::Navigate(path) => assert_eq!(path, "/es/speak"),
            Message::OpenExternal(_) => panic!("expected internal navigation"),
        }
    }

    #[test]
    fn blank_link_opens_external_target_with_safety_flags() {
        let router = LocaleRouter::new("es");
        let cfg = LinkConfig::new("/speak", "Speak").blank(true);
        match activation(&router, &cfg) {
            Message::OpenExternal(target) => {
                assert_eq!(target.path, "/es/speak");
                assert!(target.new_context);
                assert!(target.isolate_opener);
            }
            Message::Navigate(_) => panic!("expected external target"),
        }
    }

    #[test]
    fn update_forwards_navigation_event() {
        let event = update(Message::Navigate("/fr/listen".to_string()));
        match event {
            Event::Navigate(path) => assert_eq!(path, "/fr/listen"),
            Event::OpenExternal(_) => panic!("expected navigate event"),
        }
    }

    #[test]
    fn update_forwards_external_event() {
        let router = LocaleRouter::new("fr");
        let cfg = LinkConfig::new("/guide", "Guide").blank(true);
        let Message::OpenExternal(target) = activation(&router, &cfg) else {
            panic!("expected external target");
        };
        let event = update(Message::OpenExternal(target.clone()));
        assert!(matches!(event, Event::OpenExternal(t) if t == target));
    }

    #[test]
    fn link_views_render() {
        let router = LocaleRouter::new("en-US");
        let _internal = locale_link(&router, LinkConfig::new("/speak", "Speak"));
        let _external = locale_link(&router, LinkConfig::new("/speak", "Speak").blank(true));
        let _active = locale_nav_link(&router, LinkConfig::new("/speak", "Speak"), "/en-US/speak");
        let _inactive = locale_nav_link(&router, LinkConfig::new("/speak", "Speak"), "/en-US/");
    }

    #[test]
    fn attrs_are_applied_without_changing_activation() {
        let router = LocaleRouter::new("fr");
        let cfg = LinkConfig::new("/speak", "Parler").attrs(LinkAttrs {
            width: Some(Length::Fill),
            padding: Some(Padding::new(8.0)),
        });
        match activation(&router, &cfg) {
            Message::Navigate(path) => assert_eq!(path, "/fr/speak"),
            Message::OpenExternal(_) => panic!("expected internal navigation"),
        }
        let _element = locale_link(&router, cfg);
    }
}
