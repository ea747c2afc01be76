// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Borders drawn around a widget's bounds.

use core::fmt::Debug;
use kurbo::{Point, Rect};
use peniko::Color;

use crate::widget::RenderContext;

/// A decorator drawn around a widget's bounds after its content.
///
/// The built-in variants are [`EmptyBorder`] (nothing) and [`LineBorder`]
/// (a solid outline); any other implementation is a custom border.
pub trait Border: Debug {
    /// Draws the border around `bounds`.
    fn render(&self, ctx: &mut RenderContext<'_>, bounds: Rect, mouse: Point, delta: f64);

    /// The border's thickness, in widget coordinates.
    fn thickness(&self) -> f64;
}

/// The absence of a border.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyBorder;

impl Border for EmptyBorder {
    fn render(&self, _ctx: &mut RenderContext<'_>, _bounds: Rect, _mouse: Point, _delta: f64) {}

    fn thickness(&self) -> f64 {
        0.0
    }
}

/// A solid single-color outline.
#[derive(Clone, Copy, Debug)]
pub struct LineBorder {
    /// Outline thickness.
    pub thickness: f64,
    /// Outline color.
    pub color: Color,
}

impl LineBorder {
    /// Creates a line border.
    #[must_use]
    pub fn new(thickness: f64, color: Color) -> Self {
        Self { thickness, color }
    }
}

impl Border for LineBorder {
    fn render(&self, ctx: &mut RenderContext<'_>, bounds: Rect, _mouse: Point, _delta: f64) {
        let t = self.thickness;
        // Top and bottom strips span the full width; the side strips fill
        // the remainder so corners are not drawn twice.
        ctx.surface.fill_rect(
            Rect::new(bounds.x0, bounds.y0, bounds.x1, bounds.y0 + t),
            self.color,
        );
        ctx.surface.fill_rect(
            Rect::new(bounds.x0, bounds.y1 - t, bounds.x1, bounds.y1),
            self.color,
        );
        ctx.surface.fill_rect(
            Rect::new(bounds.x0, bounds.y0 + t, bounds.x0 + t, bounds.y1 - t),
            self.color,
        );
        ctx.surface.fill_rect(
            Rect::new(bounds.x1 - t, bounds.y0 + t, bounds.x1, bounds.y1 - t),
            self.color,
        );
    }

    fn thickness(&self) -> f64 {
        self.thickness
    }
}
