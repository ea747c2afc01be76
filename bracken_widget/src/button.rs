// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A clickable button with a centered message.

use alloc::boxed::Box;
use alloc::string::String;
use bracken_backend::{Text, Translator, palette};
use bracken_position::Position;
use core::fmt;
use kurbo::Point;

use crate::input::{Key, MouseButton};
use crate::state::WidgetState;
use crate::widget::{RenderContext, Widget};

/// Localization key for button narration; takes the message as `%s`.
pub const NARRATION_KEY: &str = "bracken.narrator.button";

/// Action invoked when a button is pressed.
///
/// The action receives the button so it can update the message in place
/// (option buttons rewrite their value suffix on every toggle).
pub type ButtonAction = Box<dyn FnMut(&mut Button)>;

/// Default button height.
pub const DEFAULT_HEIGHT: f64 = 20.0;

/// A push button.
///
/// Activated by a primary click while hovered, or by Enter/Space while
/// focused. The message is styled [`Text`]: spans are drawn left to right
/// with their own colors, centered as a whole.
pub struct Button {
    state: WidgetState,
    message: Text,
    action: ButtonAction,
}

impl Button {
    /// Creates a button of the given width and the default height.
    #[must_use]
    pub fn new(
        position: Position,
        width: f64,
        message: impl Into<Text>,
        action: impl FnMut(&mut Self) + 'static,
    ) -> Self {
        Self {
            state: WidgetState::new(position, width, DEFAULT_HEIGHT),
            message: message.into(),
            action: Box::new(action),
        }
    }

    /// The button's message.
    #[must_use]
    pub fn message(&self) -> &Text {
        &self.message
    }

    /// Replaces the message in place.
    ///
    /// The button's bounds do not change, so sibling widgets never need
    /// re-layout when a message updates.
    pub fn set_message(&mut self, message: impl Into<Text>) {
        self.message = message.into();
    }

    /// Fires the button's action.
    pub fn press(&mut self) {
        // Detach the action so it can borrow the button mutably.
        let mut action = core::mem::replace(&mut self.action, Box::new(|_| {}));
        action(self);
        self.action = action;
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("state", &self.state)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl Widget for Button {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn render_widget(&mut self, ctx: &mut RenderContext<'_>, _mouse: Point, _delta: f64) {
        let highlighted = self.state.is_hovered() || self.state.is_focused();
        let background = if highlighted {
            palette::BUTTON_HIGHLIGHTED
        } else {
            palette::BUTTON
        };
        ctx.surface.fill_rect(self.state.bounds(), background);

        let total_width = self.message.width(ctx.text);
        let mut x = self.state.x() + (self.state.width() - total_width) / 2.0;
        let y = self.state.y() + (self.state.height() - ctx.text.line_height()) / 2.0;
        for span in self.message.spans() {
            let color = span.color.unwrap_or(palette::WHITE);
            ctx.surface
                .draw_text(&span.content, Point::new(x, y), color, true);
            x += ctx.text.line_width(&span.content);
        }
    }

    fn on_mouse_click(&mut self, _pos: Point, button: MouseButton) -> bool {
        if button.is_primary() && self.state.is_hovered() {
            self.press();
            return true;
        }
        false
    }

    fn on_key_press(&mut self, key: Key) -> bool {
        if key.is_activation() && self.state.is_focused() {
            self.press();
            return true;
        }
        false
    }

    fn narration_message(&self, i18n: &dyn Translator) -> Option<String> {
        let plain = self.message.to_plain();
        (!plain.is_empty()).then(|| i18n.translate_with(NARRATION_KEY, &[&plain]))
    }
}
