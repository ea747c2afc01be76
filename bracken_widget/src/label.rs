// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A wrapping, optionally centered text label.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use bracken_backend::{Text, TextLayout, Translator, palette};
use bracken_position::Position;
use core::fmt;
use kurbo::Point;

use crate::input::MouseButton;
use crate::state::WidgetState;
use crate::widget::{RenderContext, Widget};

/// Action invoked when a label is clicked.
pub type LabelAction = Box<dyn FnMut(&mut Label)>;

/// A text label.
///
/// The text wraps at `max_width`; setting new text re-lays the label out in
/// place. A centered label keeps its position's relative X at
/// `base_x + max_width / 2 - text_width / 2`, where `base_x` is the
/// relative X the label was constructed with; a non-centered label keeps it
/// at `base_x` unconditionally.
///
/// Labels are inert unless given an action: only then do they consume
/// clicks and accept navigation focus.
pub struct Label {
    state: WidgetState,
    text: Text,
    lines: Vec<String>,
    max_width: f64,
    base_x: f64,
    centered: bool,
    action: Option<LabelAction>,
}

impl Label {
    /// Creates a label and lays its text out.
    #[must_use]
    pub fn new(
        position: Position,
        text: impl Into<Text>,
        max_width: f64,
        layout: &dyn TextLayout,
    ) -> Self {
        let base_x = position.relative_x();
        let mut label = Self {
            state: WidgetState::new(position, 0.0, 0.0),
            text: Text::default(),
            lines: Vec::new(),
            max_width,
            base_x,
            centered: false,
            action: None,
        };
        label.set_text(text, layout);
        label
    }

    /// The label's text.
    #[must_use]
    pub fn text(&self) -> &Text {
        &self.text
    }

    /// Sets the text and re-lays the label out in place.
    ///
    /// The width becomes the widest wrapped line (clamped to `max_width`),
    /// the height covers all lines, and the position's relative X is
    /// recomputed from the centering mode.
    pub fn set_text(&mut self, text: impl Into<Text>, layout: &dyn TextLayout) {
        self.text = text.into();
        self.lines = layout.wrap(&self.text.to_plain(), self.max_width);

        let widest = self
            .lines
            .iter()
            .map(|line| layout.line_width(line))
            .fold(0.0, f64::max);
        let width = if self.lines.is_empty() {
            self.max_width
        } else {
            widest.min(self.max_width)
        };

        if self.centered {
            self.state
                .position()
                .set_relative_x(self.base_x + self.max_width / 2.0 - width / 2.0);
        } else {
            self.state.position().set_relative_x(self.base_x);
        }
        self.state.set_width(width);
        self.state
            .set_height(self.lines.len() as f64 * layout.line_height() + 2.0);
    }

    /// Whether the label is centered within `max_width`.
    #[must_use]
    pub fn is_centered(&self) -> bool {
        self.centered
    }

    /// Changes the centering mode and re-lays the label out.
    pub fn set_centered(&mut self, centered: bool, layout: &dyn TextLayout) {
        self.centered = centered;
        let text = self.text.clone();
        self.set_text(text, layout);
    }

    /// Gives the label a click action, making it interactive.
    pub fn set_action(&mut self, action: impl FnMut(&mut Self) + 'static) {
        self.action = Some(Box::new(action));
    }

    /// Fires the label's action, if it has one.
    pub fn press(&mut self) {
        if let Some(mut action) = self.action.take() {
            action(self);
            // The action may have installed a replacement.
            if self.action.is_none() {
                self.action = Some(action);
            }
        }
    }

    /// X of the label's layout box (as opposed to its centered content).
    fn inner_x(&self) -> f64 {
        let anchor_x = self
            .state
            .position()
            .anchor()
            .map_or(0.0, |anchor| anchor.x());
        anchor_x + self.base_x
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Label")
            .field("state", &self.state)
            .field("text", &self.text)
            .field("max_width", &self.max_width)
            .field("base_x", &self.base_x)
            .field("centered", &self.centered)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

impl Widget for Label {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn render_widget(&mut self, ctx: &mut RenderContext<'_>, _mouse: Point, _delta: f64) {
        let mut y = self.state.y() + 2.0;
        for line in &self.lines {
            let x = if self.centered {
                self.inner_x() + self.max_width / 2.0 - ctx.text.line_width(line) / 2.0
            } else {
                self.inner_x()
            };
            ctx.surface
                .draw_text(line, Point::new(x, y), palette::TEXT, true);
            y += ctx.text.line_height();
        }
    }

    fn on_mouse_click(&mut self, _pos: Point, button: MouseButton) -> bool {
        if button.is_primary() && self.state.is_hovered() {
            self.press();
            return true;
        }
        false
    }

    fn requires_cursor(&self) -> bool {
        self.action.is_some()
    }

    fn narration_message(&self, _i18n: &dyn Translator) -> Option<String> {
        let plain = self.text.to_plain();
        (!plain.is_empty()).then_some(plain)
    }
}
