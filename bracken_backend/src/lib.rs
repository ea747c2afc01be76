// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bracken Backend: the core-to-host contract.
//!
//! Bracken widgets do not rasterize pixels, shape text, or own an event
//! loop. Everything they need from the host application flows through the
//! three small traits in this crate:
//!
//! - [`TextLayout`]: measure a line and wrap text to a maximum width.
//! - [`DrawSurface`]: draw a line of text or fill a rectangle.
//! - [`Translator`]: resolve a localization key to display text.
//!
//! A host embedding Bracken implements these once over its own font and
//! render stack; the widget crates stay backend-agnostic. A deterministic
//! implementation for tests lives in `bracken_backend_ref`.
//!
//! The crate also carries the shared presentation vocabulary: the styled
//! [`Text`] type (per-span optional color, so an option button can color
//! only its value suffix) and the named color [`palette`].
//!
//! The host's monotonic frame tick (used for tooltip delay timing) is not a
//! trait here; it is passed into the widget render context each frame.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod text;

pub mod palette;

pub use text::{Span, Text};

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect};
use peniko::Color;

/// Host text measurement and wrapping.
///
/// Shaping, font resolution, and bidi handling are the host's business;
/// Bracken only asks for wrapped lines and their extents. All measurements
/// are in the same units as widget coordinates.
pub trait TextLayout {
    /// Wraps `text` into lines no wider than `max_width`.
    ///
    /// An empty input yields no lines. A single word wider than `max_width`
    /// may produce a line that exceeds it; callers clamp where they care.
    fn wrap(&self, text: &str, max_width: f64) -> Vec<String>;

    /// Returns the rendered width of a single line.
    fn line_width(&self, line: &str) -> f64;

    /// Returns the height of one line of text.
    fn line_height(&self) -> f64;
}

/// Host drawing primitives.
///
/// These are the only two draw calls the core emits. Coordinates are
/// absolute screen coordinates; the host applies whatever transform or
/// scaling its render stack needs.
pub trait DrawSurface {
    /// Draws a single line of text with its origin at `origin`.
    fn draw_text(&mut self, line: &str, origin: Point, color: Color, shadow: bool);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// Host localization lookup.
pub trait Translator {
    /// Resolves a localization key to display text.
    ///
    /// Unknown keys conventionally echo the key itself, which keeps
    /// narration and labels legible when a translation is missing.
    fn translate(&self, key: &str) -> String;

    /// Resolves a key and substitutes `%s` placeholders in order.
    ///
    /// Arguments beyond the available placeholders are appended, separated
    /// by a space, so narration never silently drops content.
    fn translate_with(&self, key: &str, args: &[&str]) -> String {
        let mut out = self.translate(key);
        for arg in args {
            if let Some(at) = out.find("%s") {
                out.replace_range(at..at + 2, arg);
            } else {
                out.push(' ');
                out.push_str(arg);
            }
        }
        out
    }
}
