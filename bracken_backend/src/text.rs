// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styled text: a run of spans with optional per-span colors.

use alloc::string::String;
use alloc::string::ToString;
use peniko::Color;
use smallvec::SmallVec;

use crate::TextLayout;

/// A run of text drawn in a single style.
///
/// `color: None` means "use the drawing widget's default color"; widgets
/// pick the concrete default (labels use [`palette::TEXT`], buttons use
/// [`palette::WHITE`]).
///
/// [`palette::TEXT`]: crate::palette::TEXT
/// [`palette::WHITE`]: crate::palette::WHITE
#[derive(Clone, Debug, PartialEq)]
pub struct Span {
    /// The span's text content.
    pub content: String,
    /// Optional color override for this span.
    pub color: Option<Color>,
}

impl Span {
    /// Creates an uncolored span.
    #[must_use]
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            color: None,
        }
    }

    /// Creates a colored span.
    #[must_use]
    pub fn colored(content: impl Into<String>, color: Color) -> Self {
        Self {
            content: content.into(),
            color: Some(color),
        }
    }
}

/// Styled display text: an ordered sequence of [`Span`]s.
///
/// Most text is a single uncolored span; the inline capacity avoids a heap
/// allocation for that case. Multi-span text exists so a widget can color
/// part of its message (a boolean option colors only the value suffix).
///
/// Wrapping and narration operate on the plain concatenation
/// ([`Text::to_plain`]); only single-line widgets honor span colors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Text {
    spans: SmallVec<[Span; 1]>,
}

impl Text {
    /// Creates text from a single uncolored span.
    #[must_use]
    pub fn plain(content: impl Into<String>) -> Self {
        Self::from_span(Span::plain(content))
    }

    /// Creates text from a single colored span.
    #[must_use]
    pub fn colored(content: impl Into<String>, color: Color) -> Self {
        Self::from_span(Span::colored(content, color))
    }

    fn from_span(span: Span) -> Self {
        let mut spans = SmallVec::new();
        spans.push(span);
        Self { spans }
    }

    /// Appends a span, builder style.
    #[must_use]
    pub fn with(mut self, span: Span) -> Self {
        self.push(span);
        self
    }

    /// Appends a span.
    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// Returns the spans in order.
    #[must_use]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Returns `true` if the concatenated content is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.content.is_empty())
    }

    /// Concatenates all spans into an unstyled string.
    #[must_use]
    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        for span in &self.spans {
            out.push_str(&span.content);
        }
        out
    }

    /// Total rendered width of the text as one line.
    #[must_use]
    pub fn width(&self, layout: &dyn TextLayout) -> f64 {
        self.spans
            .iter()
            .map(|s| layout.line_width(&s.content))
            .sum()
    }
}

impl From<&str> for Text {
    fn from(content: &str) -> Self {
        Self::plain(content.to_string())
    }
}

impl From<String> for Text {
    fn from(content: String) -> Self {
        Self::plain(content)
    }
}
