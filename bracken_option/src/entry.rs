// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The option contract: a named value that materializes as a widget.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use bracken_backend::{Span, Text, Translator};
use bracken_position::Position;
use bracken_widget::Widget;

/// Localization key for the generic "name: value" display pattern.
///
/// The pattern takes two `%s` placeholders: the option's translated name
/// and its current value. Translations with fewer than two placeholders
/// fall back to `"%s: %s"`.
pub const GENERIC_DISPLAY_KEY: &str = "bracken.options.generic";

/// Localization key for a boolean option's `true` value.
pub const VALUE_ON_KEY: &str = "bracken.options.on";

/// Localization key for a boolean option's `false` value.
pub const VALUE_OFF_KEY: &str = "bracken.options.off";

/// A named, localizable option that can build a widget editing its value.
///
/// Options are factories: every [`create_widget`](Self::create_widget) call
/// produces a fresh widget bound to the same underlying state. The widget
/// reads the value at creation time and rewrites its own display text when
/// the value changes, without moving its bounds.
pub trait OptionEntry {
    /// The option's identity and localization key.
    fn key(&self) -> &str;

    /// The option's tooltip text, if any.
    fn tooltip(&self) -> Option<&str>;

    /// Builds a widget showing and editing the option's current value.
    fn create_widget(
        &self,
        position: Position,
        width: f64,
        i18n: &dyn Translator,
    ) -> Box<dyn Widget>;

    /// The option's translated display name.
    fn name(&self, i18n: &dyn Translator) -> String {
        i18n.translate(self.key())
    }

    /// Formats the option's name and a styled value through the generic
    /// display pattern, preserving the value's span colors.
    fn display_text(&self, i18n: &dyn Translator, value: Text) -> Text {
        let translated = i18n.translate(GENERIC_DISPLAY_KEY);
        let pattern = if translated.matches("%s").count() >= 2 {
            translated
        } else {
            String::from("%s: %s")
        };

        let mut parts = pattern.splitn(3, "%s");
        // splitn on a pattern with two separators always yields three parts.
        let head = parts.next().unwrap_or("");
        let mid = parts.next().unwrap_or("");
        let tail = parts.next().unwrap_or("");

        let mut text = Text::plain(format!("{head}{}{mid}", self.name(i18n)));
        for span in value.spans() {
            text.push(span.clone());
        }
        if !tail.is_empty() {
            text.push(Span::plain(tail));
        }
        text
    }
}
