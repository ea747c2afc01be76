// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared widget state: position, bounds, flags, tooltip, and border.

use alloc::boxed::Box;
use alloc::string::String;
use bracken_position::Position;
use bracken_tooltip::TooltipTimers;
use kurbo::{Point, Rect};

use crate::border::{Border, EmptyBorder};

bitflags::bitflags! {
    /// Widget state flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct WidgetFlags: u8 {
        /// Widget is rendered and hit-testable.
        const VISIBLE = 0b0000_0001;
        /// Widget accepts input.
        const ENABLED = 0b0000_0010;
        /// Mouse is currently within the widget's bounds.
        const HOVERED = 0b0000_0100;
        /// Widget holds focus within its dispatch scope.
        const FOCUSED = 0b0000_1000;
    }
}

impl Default for WidgetFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::ENABLED
    }
}

/// State common to every widget.
///
/// A widget owns exactly one `WidgetState`; the [`Widget`](crate::Widget)
/// trait exposes it through `state()`/`state_mut()` so the provided render
/// and input plumbing can operate on any widget.
///
/// `hovered` is recomputed from the mouse position on every render and
/// mouse move; its prior value never matters. `focused` is assigned by the
/// host, which keeps at most one widget focused per dispatch scope.
#[derive(Debug)]
pub struct WidgetState {
    position: Position,
    width: f64,
    height: f64,
    flags: WidgetFlags,
    tooltip: Option<String>,
    tooltip_timers: TooltipTimers,
    border: Box<dyn Border>,
}

impl WidgetState {
    /// Creates widget state with the given position and size.
    ///
    /// # Panics
    ///
    /// Panics if the width or height is negative.
    #[must_use]
    pub fn new(position: Position, width: f64, height: f64) -> Self {
        assert!(
            width >= 0.0 && height >= 0.0,
            "widget size must be non-negative"
        );
        Self {
            position,
            width,
            height,
            flags: WidgetFlags::default(),
            tooltip: None,
            tooltip_timers: TooltipTimers::default(),
            border: Box::new(EmptyBorder),
        }
    }

    /// Returns the widget's position.
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Absolute X of the widget's top-left corner.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x()
    }

    /// Absolute Y of the widget's top-left corner.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y()
    }

    /// Widget width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Widget height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Sets the widget width.
    ///
    /// # Panics
    ///
    /// Panics if `width` is negative.
    pub fn set_width(&mut self, width: f64) {
        assert!(width >= 0.0, "widget width must be non-negative");
        self.width = width;
    }

    /// Sets the widget height.
    ///
    /// # Panics
    ///
    /// Panics if `height` is negative.
    pub fn set_height(&mut self, height: f64) {
        assert!(height >= 0.0, "widget height must be non-negative");
        self.height = height;
    }

    /// The widget's bounds in absolute coordinates.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let origin = self.position.point();
        Rect::new(
            origin.x,
            origin.y,
            origin.x + self.width,
            origin.y + self.height,
        )
    }

    /// Returns `true` if `point` falls within `[x, x + width) × [y, y + height)`.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    /// Whether the widget is rendered and hit-testable.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.flags.contains(WidgetFlags::VISIBLE)
    }

    /// Shows or hides the widget.
    pub fn set_visible(&mut self, visible: bool) {
        self.flags.set(WidgetFlags::VISIBLE, visible);
    }

    /// Whether the widget accepts input.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.flags.contains(WidgetFlags::ENABLED)
    }

    /// Enables or disables input.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.flags.set(WidgetFlags::ENABLED, enabled);
    }

    /// Whether the mouse was within bounds at the last update.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.flags.contains(WidgetFlags::HOVERED)
    }

    /// Records the hover state. Called by the render/input plumbing.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.flags.set(WidgetFlags::HOVERED, hovered);
    }

    /// Whether the widget holds focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.flags.contains(WidgetFlags::FOCUSED)
    }

    /// Assigns or removes focus. The host keeps at most one widget focused
    /// per dispatch scope.
    pub fn set_focused(&mut self, focused: bool) {
        self.flags.set(WidgetFlags::FOCUSED, focused);
    }

    /// The widget's tooltip text, if any.
    #[must_use]
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// Sets or clears the tooltip text.
    pub fn set_tooltip(&mut self, tooltip: Option<String>) {
        self.tooltip = tooltip;
    }

    /// The widget's tooltip accumulation timers.
    #[must_use]
    pub fn tooltip_timers(&self) -> &TooltipTimers {
        &self.tooltip_timers
    }

    /// Mutable access to the tooltip timers, for the render plumbing.
    pub fn tooltip_timers_mut(&mut self) -> &mut TooltipTimers {
        &mut self.tooltip_timers
    }

    /// The widget's border.
    #[must_use]
    pub fn border(&self) -> &dyn Border {
        &*self.border
    }

    /// Replaces the widget's border.
    pub fn set_border(&mut self, border: Box<dyn Border>) {
        self.border = border;
    }
}
