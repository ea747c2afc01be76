// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A boolean option presented as a toggle button.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use bracken_backend::{Text, Translator, palette};
use bracken_position::Position;
use bracken_widget::{Button, Widget};
use core::fmt;

use crate::binding::BoolBinding;
use crate::entry::{OptionEntry, VALUE_OFF_KEY, VALUE_ON_KEY};

/// A named boolean backed by a [`BoolBinding`].
///
/// Materializes as a [`Button`] whose message is `"name: value"` through
/// the generic display pattern; pressing the button flips the binding and
/// rewrites the message in place. With [`colored`](Self::colored), the
/// value suffix is drawn green when `true` and red when `false`.
pub struct BooleanOption {
    key: String,
    tooltip: Option<String>,
    binding: Rc<dyn BoolBinding>,
    colored: bool,
}

impl BooleanOption {
    /// Creates a boolean option.
    ///
    /// # Panics
    ///
    /// Panics if `key` is empty. The key is the option's identity and its
    /// localization lookup; there is no sensible behavior without one.
    #[must_use]
    pub fn new(key: impl Into<String>, binding: impl BoolBinding + 'static) -> Self {
        let key = key.into();
        assert!(!key.is_empty(), "an option requires a non-empty key");
        Self {
            key,
            tooltip: None,
            binding: Rc::new(binding),
            colored: false,
        }
    }

    /// Colors the displayed value, builder style.
    #[must_use]
    pub fn colored(mut self) -> Self {
        self.colored = true;
        self
    }

    /// Attaches a tooltip, builder style.
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Reads the current value from the binding.
    #[must_use]
    pub fn get(&self) -> bool {
        self.binding.get()
    }

    /// Writes a value through the binding.
    pub fn set(&self, value: bool) {
        self.binding.set(value);
    }

    /// Flips the current value.
    pub fn toggle(&self) {
        self.binding.set(!self.binding.get());
    }

    /// Parses and writes a value; anything but `"true"` is `false`.
    pub fn set_from_str(&self, value: &str) {
        self.binding.set(value == "true");
    }

    /// The styled value text for an arbitrary value.
    #[must_use]
    pub fn value_text_for(&self, i18n: &dyn Translator, value: bool) -> Text {
        let label = i18n.translate(if value { VALUE_ON_KEY } else { VALUE_OFF_KEY });
        if self.colored {
            let color = if value {
                palette::AFFIRMATIVE
            } else {
                palette::NEGATIVE
            };
            Text::colored(label, color)
        } else {
            Text::plain(label)
        }
    }

    /// The styled value text for the current value.
    #[must_use]
    pub fn value_text(&self, i18n: &dyn Translator) -> Text {
        self.value_text_for(i18n, self.get())
    }

    /// Builds the toggle button for this option.
    ///
    /// Both display texts are computed up front, so the press action only
    /// carries the binding and the two prepared messages.
    #[must_use]
    pub fn create_button(&self, position: Position, width: f64, i18n: &dyn Translator) -> Button {
        let on_text = self.display_text(i18n, self.value_text_for(i18n, true));
        let off_text = self.display_text(i18n, self.value_text_for(i18n, false));
        let initial = if self.get() {
            on_text.clone()
        } else {
            off_text.clone()
        };

        let binding = self.binding.clone();
        let mut button = Button::new(position, width, initial, move |button| {
            let next = !binding.get();
            binding.set(next);
            button.set_message(if next { on_text.clone() } else { off_text.clone() });
        });
        button
            .state_mut()
            .set_tooltip(self.tooltip.as_ref().map(String::from));
        button
    }
}

impl fmt::Debug for BooleanOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BooleanOption")
            .field("key", &self.key)
            .field("tooltip", &self.tooltip)
            .field("colored", &self.colored)
            .field("value", &self.get())
            .finish_non_exhaustive()
    }
}

impl OptionEntry for BooleanOption {
    fn key(&self) -> &str {
        &self.key
    }

    fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    fn create_widget(
        &self,
        position: Position,
        width: f64,
        i18n: &dyn Translator,
    ) -> Box<dyn Widget> {
        Box::new(self.create_button(position, width, i18n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use core::cell::Cell;

    struct EchoTranslator;

    impl Translator for EchoTranslator {
        fn translate(&self, key: &str) -> String {
            key.to_string()
        }
    }

    #[test]
    #[should_panic(expected = "non-empty key")]
    fn empty_key_is_rejected() {
        let _ = BooleanOption::new("", Cell::new(false));
    }

    #[test]
    fn toggle_twice_round_trips() {
        let value = Rc::new(Cell::new(false));
        let option = BooleanOption::new("demo.flag", value.clone());

        option.toggle();
        assert!(value.get());
        option.toggle();
        assert!(!value.get());
    }

    #[test]
    fn set_from_str_accepts_only_the_literal_true() {
        let value = Rc::new(Cell::new(false));
        let option = BooleanOption::new("demo.flag", value.clone());

        option.set_from_str("true");
        assert!(value.get());
        option.set_from_str("True");
        assert!(!value.get());
        option.set_from_str("1");
        assert!(!value.get());
    }

    #[test]
    fn colored_values_pick_the_state_color() {
        let option = BooleanOption::new("demo.flag", Cell::new(true)).colored();
        let on = option.value_text(&EchoTranslator);
        assert_eq!(on.spans()[0].color, Some(palette::AFFIRMATIVE));

        option.set(false);
        let off = option.value_text(&EchoTranslator);
        assert_eq!(off.spans()[0].color, Some(palette::NEGATIVE));
        assert_eq!(off.to_plain(), VALUE_OFF_KEY);
    }

    #[test]
    fn uncolored_values_defer_to_the_widget_default() {
        let option = BooleanOption::new("demo.flag", Cell::new(true));
        assert!(option.value_text(&EchoTranslator).spans()[0].color.is_none());
    }
}
