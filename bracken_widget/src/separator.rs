// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A horizontal separator with an optional centered title.

use alloc::string::String;
use bracken_backend::{Text, Translator, palette};
use bracken_position::Position;
use kurbo::{Point, Rect};

use crate::state::WidgetState;
use crate::widget::{RenderContext, Widget};

/// Localization key for separator narration; takes the title as `%s`.
pub const NARRATION_KEY: &str = "bracken.narrator.separator";

/// Fixed separator height.
const HEIGHT: f64 = 9.0;

/// A separator line, optionally interrupted by a centered title.
///
/// Separators are decoration: they never consume input. They accept
/// navigation focus only when they carry a tooltip, so keyboard users can
/// reach the tooltip.
#[derive(Debug)]
pub struct Separator {
    state: WidgetState,
    title: Option<Text>,
}

impl Separator {
    /// Creates a separator of the given width.
    #[must_use]
    pub fn new(position: Position, width: f64, title: Option<Text>) -> Self {
        Self {
            state: WidgetState::new(position, width, HEIGHT),
            title,
        }
    }

    /// The separator's title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&Text> {
        self.title.as_ref()
    }

    /// Sets or clears the title.
    pub fn set_title(&mut self, title: Option<Text>) {
        self.title = title;
    }
}

impl Widget for Separator {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn render_widget(&mut self, ctx: &mut RenderContext<'_>, _mouse: Point, _delta: f64) {
        let x = self.state.x();
        let y = self.state.y();
        let width = self.state.width();

        match &self.title {
            Some(title) if !title.is_empty() => {
                let plain = title.to_plain();
                let title_width = ctx.text.line_width(&plain);
                let title_x = x + (width / 2.0 - title_width / 2.0);
                if width > title_width {
                    // Line segments on both sides of the title, with a gap.
                    ctx.surface.fill_rect(
                        Rect::new(x, y + 4.0, title_x - 5.0, y + 6.0),
                        palette::TEXT,
                    );
                    ctx.surface.fill_rect(
                        Rect::new(title_x + title_width + 5.0, y + 4.0, x + width, y + 6.0),
                        palette::TEXT,
                    );
                }
                ctx.surface
                    .draw_text(&plain, Point::new(title_x, y), palette::WHITE, true);
            }
            _ => {
                ctx.surface
                    .fill_rect(Rect::new(x, y + 4.0, x + width, y + 6.0), palette::TEXT);
            }
        }
    }

    fn requires_cursor(&self) -> bool {
        self.state.tooltip().is_some()
    }

    fn narration_message(&self, i18n: &dyn Translator) -> Option<String> {
        let title = self.title.as_ref().map(Text::to_plain)?;
        (!title.is_empty()).then(|| i18n.translate_with(NARRATION_KEY, &[&title]))
    }
}
