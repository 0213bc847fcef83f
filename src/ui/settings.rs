//! This module defines the UI components for the application's settings view.
//! It provides a language selection submenu, allowing users to choose their
//! preferred display language. Each language is annotated with whether it is
//! open for contribution, so switching is an informed choice rather than a
//! surprise on the Speak and Listen screens.

use crate::app::{App, Message};
use crate::ui::gate::{self, GateContent};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Button, Column, Row, Text},
    Element, Length,
};

pub fn view_settings(app: &App) -> Element<'_, Message> {
    let title = Text::new(app.i18n().tr("settings-title")).size(30);

    let mut language_selection_column = Column::new()
        .push(Text::new(app.i18n().tr("select-language-label")))
        .spacing(10);

    for locale in &app.i18n().available_locales {
        let display_name = locale.to_string(); // Fallback to string representation

        // Check for specific translation for the language name, e.g., "language-name-en-US"
        let translated_name_key = format!("language-name-{}", locale);
        let translated_name = app.i18n().tr(&translated_name_key);
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name.clone() // Use raw locale if translation missing
        } else {
            format!("{} ({})", translated_name, display_name)
        };

        let is_current_locale = app.i18n().current_locale() == locale;
        let mut button =
            Button::new(Text::new(button_text)).on_press(Message::LanguageSelected(locale.clone()));

        if is_current_locale {
            button = button.style(button::primary); // Highlight current language
        } else {
            button = button.style(button::secondary);
        }

        // Contribution status of this candidate language, not the active one.
        let status = gate::view(
            app.contributable(),
            &display_name,
            GateContent::Render(Box::new(move |contributable| {
                let key = if contributable {
                    "contribute-open"
                } else {
                    "contribute-locked"
                };
                Text::new(app.i18n().tr(key)).size(12).into()
            })),
        );

        let row = Row::new()
            .spacing(10)
            .align_y(Vertical::Center)
            .push(button)
            .push(status);
        language_selection_column = language_selection_column.push(row);
    }

    Column::new()
        .push(title)
        .push(language_selection_column)
        .spacing(20)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Flags;

    fn app_with_lang(lang: &str) -> App {
        let (app, _task) = App::new(Flags {
            lang: Some(lang.to_string()),
        });
        app
    }

    #[test]
    fn view_settings_returns_element() {
        let app = app_with_lang("en-US");
        let _element = view_settings(&app);
    }

    #[test]
    fn view_settings_renders_locked_language_rows() {
        // "de" ships as a display language but is not in the allow-list, so
        // the picker renders with at least one locked annotation.
        let app = app_with_lang("de");
        assert!(!app.contributable().is_contributable("de"));
        assert!(app
            .i18n()
            .available_locales
            .iter()
            .any(|l| l.to_string() == "de"));
        let _element = view_settings(&app);
    }
}
