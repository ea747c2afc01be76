// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-screen tooltip queue.

use alloc::string::String;
use alloc::vec::Vec;
use bracken_backend::{DrawSurface, TextLayout, palette};
use kurbo::{Point, Rect};

use crate::timer::TooltipTimers;

/// Default delay before a tooltip shows, in host ticks.
pub const DEFAULT_DELAY_TICKS: u32 = 30;

/// Horizontal offset of a focus-triggered tooltip from its widget.
const FOCUS_OFFSET_X: f64 = -12.0;

/// Minimum wrap width for tooltip text.
const MIN_WRAP_WIDTH: f64 = 200.0;

/// Padding between the popup background and its text.
const PADDING: f64 = 4.0;

/// A tooltip ready for display: wrapped lines at a screen position.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// Top-left of the first text line.
    pub position: Point,
    /// Pre-wrapped text lines.
    pub lines: Vec<String>,
}

impl Tooltip {
    /// Creates a tooltip from a position and wrapped lines.
    #[must_use]
    pub fn new(position: Point, lines: Vec<String>) -> Self {
        Self { position, lines }
    }
}

/// Schedules at most one tooltip per render pass.
///
/// One queue serves one screen; widgets call [`TooltipQueue::queue_for`]
/// during their render, and the host draws (or takes) the surviving entry
/// after the widget pass. When several widgets qualify in one frame the
/// last writer wins; there is no arbitration beyond render order.
#[derive(Debug)]
pub struct TooltipQueue {
    delay: u32,
    pending: Option<Tooltip>,
}

impl Default for TooltipQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl TooltipQueue {
    /// Creates a queue with the default delay of [`DEFAULT_DELAY_TICKS`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_DELAY_TICKS)
    }

    /// Creates a queue with an explicit delay threshold, in host ticks.
    #[must_use]
    pub fn with_delay(delay: u32) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Returns the delay threshold, in host ticks.
    #[must_use]
    pub fn delay(&self) -> u32 {
        self.delay
    }

    /// Queues a tooltip for this render pass, replacing any earlier entry.
    pub fn queue(&mut self, tooltip: Tooltip) {
        self.pending = Some(tooltip);
    }

    /// Returns the entry queued so far this render pass.
    #[must_use]
    pub fn pending(&self) -> Option<&Tooltip> {
        self.pending.as_ref()
    }

    /// Removes and returns the pending entry.
    ///
    /// For hosts that draw their own popups instead of using
    /// [`TooltipQueue::render`].
    pub fn take(&mut self) -> Option<Tooltip> {
        self.pending.take()
    }

    /// Drives a widget's tooltip timers and queues its tooltip once due.
    ///
    /// Call once per widget render with the widget's current `hovered` and
    /// `focused` state and its screen `bounds`. The text wraps at half the
    /// widget width, but no narrower than [`MIN_WRAP_WIDTH`] units. A
    /// hover-due tooltip shows at the mouse; a focus-due tooltip shows at a
    /// fixed offset left of the widget, for keyboard navigation. An empty
    /// `text` resets both timers and queues nothing.
    pub fn queue_for(
        &mut self,
        timers: &mut TooltipTimers,
        text: &str,
        hovered: bool,
        focused: bool,
        bounds: Rect,
        mouse: Point,
        now: u64,
        layout: &dyn TextLayout,
    ) {
        if text.is_empty() {
            timers.reset();
            return;
        }
        let hover_ticks = timers.hover.update(hovered, now);
        let focus_ticks = timers.focus.update(focused, now);

        let wrap_width = (bounds.width() / 2.0).max(MIN_WRAP_WIDTH);
        if hovered && hover_ticks >= self.delay {
            self.queue(Tooltip::new(mouse, layout.wrap(text, wrap_width)));
        } else if focused && focus_ticks >= self.delay {
            let at = Point::new(bounds.x0 + FOCUS_OFFSET_X, bounds.y0);
            self.queue(Tooltip::new(at, layout.wrap(text, wrap_width)));
        }
    }

    /// Draws the pending tooltip, if any, and clears it.
    ///
    /// The popup is a background fill padded around shadowed text lines.
    /// Display state never persists: next frame the entry is rebuilt from
    /// the timers or not at all.
    pub fn render(&mut self, layout: &dyn TextLayout, surface: &mut dyn DrawSurface) {
        let Some(tip) = self.pending.take() else {
            return;
        };
        if tip.lines.is_empty() {
            return;
        }
        let line_advance = layout.line_height() + 1.0;
        let width = tip
            .lines
            .iter()
            .map(|line| layout.line_width(line))
            .fold(0.0, f64::max);
        let height = tip.lines.len() as f64 * line_advance - 1.0;
        surface.fill_rect(
            Rect::new(
                tip.position.x - PADDING,
                tip.position.y - PADDING,
                tip.position.x + width + PADDING,
                tip.position.y + height + PADDING,
            ),
            palette::TOOLTIP_BACKGROUND,
        );
        let mut y = tip.position.y;
        for line in &tip.lines {
            surface.draw_text(line, Point::new(tip.position.x, y), palette::WHITE, true);
            y += line_advance;
        }
    }
}
