// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget contract: render, input dispatch, navigation, narration.

use alloc::string::{String, ToString};
use bracken_backend::{DrawSurface, TextLayout, Translator};
use bracken_tooltip::TooltipQueue;
use core::fmt;
use kurbo::Point;

use crate::state::WidgetState;

/// Everything a widget may touch during one render call.
///
/// The host assembles one context per frame: its text and draw backends,
/// the screen's tooltip queue, and the current monotonic tick.
pub struct RenderContext<'a> {
    /// Host text measurement and wrapping.
    pub text: &'a dyn TextLayout,
    /// Host drawing primitives.
    pub surface: &'a mut dyn DrawSurface,
    /// The owning screen's tooltip queue.
    pub tooltips: &'a mut TooltipQueue,
    /// The host's monotonic frame tick, for tooltip delay timing.
    pub tick: u64,
}

impl fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("tick", &self.tick)
            .finish_non_exhaustive()
    }
}

/// An interactive, renderable UI element.
///
/// Implementations provide [`Widget::state`]/[`Widget::state_mut`] plus
/// their content rendering and input reactions; the provided methods supply
/// the shared per-frame plumbing (visibility gate, hover recomputation,
/// border pass, tooltip scheduling, enabled/visible input gating).
///
/// None of these operations can fail: invalid configurations are ruled out
/// at construction time, and every call is total over valid widgets.
pub trait Widget {
    /// The widget's shared state.
    fn state(&self) -> &WidgetState;

    /// Mutable access to the widget's shared state.
    fn state_mut(&mut self) -> &mut WidgetState;

    /// Draws the widget's content.
    ///
    /// Called by [`Widget::render`] after the hover flag has been updated;
    /// implementations draw through `ctx.surface` and may measure through
    /// `ctx.text`.
    fn render_widget(&mut self, ctx: &mut RenderContext<'_>, mouse: Point, delta: f64);

    /// Renders the widget for this frame.
    ///
    /// Updates `hovered` from the mouse position (idempotent per frame),
    /// draws content, then the border, then feeds the tooltip queue. A
    /// widget with no tooltip text has its tooltip timers reset instead. A
    /// hidden widget does nothing.
    fn render(&mut self, ctx: &mut RenderContext<'_>, mouse: Point, delta: f64) {
        if !self.state().is_visible() {
            return;
        }
        let hovered = self.state().contains(mouse);
        self.state_mut().set_hovered(hovered);

        self.render_widget(ctx, mouse, delta);

        let bounds = self.state().bounds();
        self.state().border().render(ctx, bounds, mouse, delta);

        if let Some(text) = self.state().tooltip().map(ToString::to_string) {
            let focused = self.state().is_focused();
            let tick = ctx.tick;
            ctx.tooltips.queue_for(
                self.state_mut().tooltip_timers_mut(),
                &text,
                hovered,
                focused,
                bounds,
                mouse,
                tick,
                ctx.text,
            );
        } else {
            // No tooltip means no accumulation: a text restored later must
            // wait out the full delay again.
            self.state_mut().tooltip_timers_mut().reset();
        }
    }

    /// Handles a mouse click, returning `true` if the widget consumed it.
    ///
    /// Hidden or disabled widgets never consume; otherwise the click is
    /// delegated to [`Widget::on_mouse_click`]. A `false` return lets the
    /// host fall through to sibling widgets or its default behavior.
    fn mouse_clicked(&mut self, pos: Point, button: crate::input::MouseButton) -> bool {
        if !self.state().is_visible() || !self.state().is_enabled() {
            return false;
        }
        self.on_mouse_click(pos, button)
    }

    /// Widget-specific click reaction. Defaults to not consuming.
    fn on_mouse_click(&mut self, _pos: Point, _button: crate::input::MouseButton) -> bool {
        false
    }

    /// Updates the hover flag from a mouse move.
    fn mouse_moved(&mut self, pos: Point) {
        let hovered = self.state().contains(pos);
        self.state_mut().set_hovered(hovered);
    }

    /// Handles a key press, returning `true` if the widget consumed it.
    ///
    /// Hidden or disabled widgets never consume; otherwise the key is
    /// delegated to [`Widget::on_key_press`].
    fn key_pressed(&mut self, key: crate::input::Key) -> bool {
        if !self.state().is_visible() || !self.state().is_enabled() {
            return false;
        }
        self.on_key_press(key)
    }

    /// Widget-specific key reaction. Defaults to not consuming.
    fn on_key_press(&mut self, _key: crate::input::Key) -> bool {
        false
    }

    /// Returns `true` if focus navigation may land on this widget.
    ///
    /// Purely informational widgets return `false` so keyboard and gamepad
    /// navigation skips them; widgets with an action, or with a tooltip a
    /// keyboard user would otherwise never see, return `true`.
    fn requires_cursor(&self) -> bool {
        true
    }

    /// The accessibility text narrated for this widget.
    ///
    /// `None` suppresses narration entirely (for example a separator with
    /// no title).
    fn narration_message(&self, _i18n: &dyn Translator) -> Option<String> {
        None
    }
}
