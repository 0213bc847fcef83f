// SPDX-License-Identifier: MPL-2.0
//! Conditional rendering gate for contributable locales.
//!
//! Some screens only make sense for locales that accept contributions. The
//! gate checks the active locale against the allow-list and either shows or
//! hides its content. The rendering mode is an explicit tagged choice:
//! callers pass declarative children to hide outright, or a callback when
//! they want to branch on the result themselves.

use crate::locales::ContributableLocales;
use iced::widget::Space;
use iced::Element;

/// What the gate renders.
pub enum GateContent<'a, Message> {
    /// Shown only when the locale is contributable; otherwise nothing.
    Children(Element<'a, Message>),
    /// Always invoked, with the contributability result.
    Render(Box<dyn FnOnce(bool) -> Element<'a, Message> + 'a>),
}

/// Render `content` gated on whether `locale` accepts contributions.
pub fn view<'a, Message: 'a>(
    locales: &ContributableLocales,
    locale: &str,
    content: GateContent<'a, Message>,
) -> Element<'a, Message> {
    let contributable = locales.is_contributable(locale);
    match content {
        GateContent::Render(render) => render(contributable),
        GateContent::Children(children) if contributable => children,
        GateContent::Children(_) => Space::new().into(),
    }
}
