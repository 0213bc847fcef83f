// SPDX-License-Identifier: MPL-2.0
//! Rendering helper for localized message attributes.
//!
//! Fluent messages can carry named attributes next to their main value
//! (`nav-speak` has a `.title`, for example). This helper resolves one
//! attribute through the localization runtime and hands the resulting
//! string to a caller-supplied closure that decides how to render it.
//! Lookup, formatting, and fallback behavior all belong to [`I18n`]; the
//! helper only wires the attribute name through.

use crate::i18n::fluent::I18n;
use iced::Element;

/// Resolve `attribute` of message `id` and render it with `render`.
pub fn attribute<'a, Message: 'a>(
    i18n: &I18n,
    id: &str,
    attribute: &str,
    render: impl FnOnce(String) -> Element<'a, Message>,
) -> Element<'a, Message> {
    render(i18n.attr(id, attribute))
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::Text;
    use std::cell::RefCell;

    fn english() -> I18n {
        let mut i18n = I18n::default();
        i18n.set_locale("en-US".parse().unwrap());
        i18n
    }

    #[test]
    fn resolved_attribute_reaches_the_callback() {
        let seen = RefCell::new(None);
        let _element: Element<'_, ()> = attribute(&english(), "nav-speak", "title", |value| {
            *seen.borrow_mut() = Some(value.clone());
            Text::new(value).into()
        });
        assert_eq!(
            seen.borrow().as_deref(),
            Some("Record voice clips in your language")
        );
    }

    #[test]
    fn runtime_fallback_passes_through_unchanged() {
        let seen = RefCell::new(None);
        let _element: Element<'_, ()> = attribute(&english(), "nav-speak", "tooltip", |value| {
            *seen.borrow_mut() = Some(value.clone());
            Text::new(value).into()
        });
        assert_eq!(seen.borrow().as_deref(), Some("MISSING: nav-speak.tooltip"));
    }
}
