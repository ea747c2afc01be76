// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bracken Reference Backend.
//!
//! This crate provides small, deterministic implementations of the
//! `bracken_backend` host traits for **tests and debugging**.
//!
//! It is intentionally *not* a renderer:
//! - It does **not** rasterize to pixels.
//! - It does **not** model any real font; [`RefTextLayout`] uses a fixed
//!   per-character advance so widths and wrap points are exactly
//!   predictable in assertions.
//! - [`RefSurface`] records the draw calls it receives, in order, so tests
//!   can assert on what a widget emitted.
//!
//! ## Minimal example
//!
//! ```
//! use bracken_backend::{DrawSurface, TextLayout};
//! use bracken_backend_ref::{RefSurface, RefTextLayout};
//!
//! let layout = RefTextLayout::default();
//! // 5 characters at the default 6.0 advance.
//! assert_eq!(layout.line_width("hello"), 30.0);
//!
//! let mut surface = RefSurface::default();
//! surface.fill_rect(kurbo::Rect::new(0.0, 0.0, 10.0, 10.0), bracken_backend::palette::TEXT);
//! assert_eq!(surface.cmds().len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use bracken_backend::{DrawSurface, TextLayout, Translator};
use hashbrown::HashMap;
use kurbo::{Point, Rect};
use peniko::Color;

/// Fixed-metric text layout.
///
/// Every character is `advance` wide and every line is `line_height` tall.
/// Wrapping is greedy on whitespace word boundaries; a single word wider
/// than the maximum width is emitted on its own (overlong) line, matching
/// the [`TextLayout::wrap`] contract.
#[derive(Clone, Copy, Debug)]
pub struct RefTextLayout {
    advance: f64,
    line_height: f64,
}

impl Default for RefTextLayout {
    fn default() -> Self {
        Self {
            advance: 6.0,
            line_height: 9.0,
        }
    }
}

impl RefTextLayout {
    /// Creates a layout with explicit metrics.
    #[must_use]
    pub fn with_metrics(advance: f64, line_height: f64) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl TextLayout for RefTextLayout {
    fn wrap(&self, text: &str, max_width: f64) -> Vec<String> {
        let mut lines = Vec::new();
        let mut line = String::new();
        for word in text.split_whitespace() {
            if line.is_empty() {
                line.push_str(word);
                continue;
            }
            let candidate_width = self.line_width(&line) + self.advance + self.line_width(word);
            if candidate_width <= max_width {
                line.push(' ');
                line.push_str(word);
            } else {
                lines.push(core::mem::take(&mut line));
                line.push_str(word);
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }
        lines
    }

    fn line_width(&self, line: &str) -> f64 {
        line.chars().count() as f64 * self.advance
    }

    fn line_height(&self) -> f64 {
        self.line_height
    }
}

/// A draw call recorded by [`RefSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// A `draw_text` call.
    Text {
        /// The line of text.
        line: String,
        /// Text origin.
        origin: Point,
        /// Text color.
        color: Color,
        /// Whether a drop shadow was requested.
        shadow: bool,
    },
    /// A `fill_rect` call.
    Rect {
        /// Filled rectangle.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
}

/// Recording draw surface.
///
/// Stores every draw call in application order for later assertions.
#[derive(Debug, Default)]
pub struct RefSurface {
    cmds: Vec<DrawCmd>,
}

impl RefSurface {
    /// Returns the recorded draw calls in order.
    #[must_use]
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// Returns just the text lines drawn, in order.
    #[must_use]
    pub fn drawn_text(&self) -> Vec<&str> {
        self.cmds
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Text { line, .. } => Some(line.as_str()),
                DrawCmd::Rect { .. } => None,
            })
            .collect()
    }

    /// Clears the recording.
    pub fn clear(&mut self) {
        self.cmds.clear();
    }
}

impl DrawSurface for RefSurface {
    fn draw_text(&mut self, line: &str, origin: Point, color: Color, shadow: bool) {
        self.cmds.push(DrawCmd::Text {
            line: line.to_string(),
            origin,
            color,
            shadow,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.cmds.push(DrawCmd::Rect { rect, color });
    }
}

/// Table-driven translator with key-echo fallback.
#[derive(Debug, Default)]
pub struct RefTranslator {
    table: HashMap<String, String>,
}

impl RefTranslator {
    /// Creates an empty translator; every lookup echoes its key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a translation, builder style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds a translation.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.table.insert(key.into(), value.into());
    }
}

impl Translator for RefTranslator {
    fn translate(&self, key: &str) -> String {
        self.table
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn wrap_respects_word_boundaries() {
        let layout = RefTextLayout::default();
        // "alpha beta" is 10 chars = 60.0 wide; limit below that splits it.
        assert_eq!(layout.wrap("alpha beta", 59.0), vec!["alpha", "beta"]);
        assert_eq!(layout.wrap("alpha beta", 60.0), vec!["alpha beta"]);
    }

    #[test]
    fn wrap_of_empty_text_yields_no_lines() {
        let layout = RefTextLayout::default();
        assert!(layout.wrap("", 100.0).is_empty());
        assert!(layout.wrap("   ", 100.0).is_empty());
    }

    #[test]
    fn overlong_word_gets_its_own_line() {
        let layout = RefTextLayout::default();
        let lines = layout.wrap("a incomprehensibilities b", 60.0);
        assert_eq!(lines, vec!["a", "incomprehensibilities", "b"]);
    }

    #[test]
    fn surface_records_in_order() {
        let mut surface = RefSurface::default();
        surface.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), bracken_backend::palette::TEXT);
        surface.draw_text(
            "hi",
            Point::new(2.0, 3.0),
            bracken_backend::palette::WHITE,
            true,
        );
        assert_eq!(surface.cmds().len(), 2);
        assert_eq!(surface.drawn_text(), vec!["hi"]);
        surface.clear();
        assert!(surface.cmds().is_empty());
    }

    #[test]
    fn translator_echoes_unknown_keys() {
        let i18n = RefTranslator::new().with("menu.done", "Done");
        assert_eq!(i18n.translate("menu.done"), "Done");
        assert_eq!(i18n.translate("menu.missing"), "menu.missing");
    }

    #[test]
    fn translate_with_substitutes_placeholders_in_order() {
        let i18n = RefTranslator::new().with("narrator.pair", "%s then %s");
        assert_eq!(i18n.translate_with("narrator.pair", &["a", "b"]), "a then b");
        // Extra arguments are appended rather than dropped.
        assert_eq!(i18n.translate_with("menu.missing", &["x"]), "menu.missing x");
    }
}
