// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bracken Position: anchor-relative coordinates for widget layout.
//!
//! A [`Position`] stores an offset relative to an optional anchor (another
//! [`Position`]). Absolute coordinates are resolved lazily on read by walking
//! the anchor chain down to a root position, which has no anchor and whose
//! absolute coordinates equal its own offset.
//!
//! Positions are shared handles: cloning a `Position` yields another handle
//! to the same underlying coordinates. Mutating the offset of a non-leaf
//! position is therefore observed by every position anchored to it, with no
//! explicit propagation step.
//!
//! ## Minimal example
//!
//! ```
//! use bracken_position::Position;
//!
//! let root = Position::origin(10.0, 20.0);
//! let child = Position::anchored(&root, 5.0, 0.0);
//! assert_eq!(child.x(), 15.0);
//!
//! // Moving the root moves the child; resolution is lazy, on read.
//! root.set_relative_x(100.0);
//! assert_eq!(child.x(), 105.0);
//! ```
//!
//! ## Acyclicity
//!
//! The anchor chain must be acyclic: a position must never be anchored,
//! directly or transitively, to a position that resolves through it. This is
//! a caller-guaranteed precondition, not a runtime-checked invariant; a
//! cyclic chain makes coordinate reads diverge.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::rc::Rc;
use core::cell::RefCell;
use kurbo::{Point, Vec2};

/// An anchor-relative position.
///
/// The anchor is fixed at construction and never reassigned; only the
/// relative offset may change afterwards. Widgets own one `Position` each
/// and hand out anchored handles to dependent layout.
#[derive(Clone, Debug)]
pub struct Position {
    inner: Rc<RefCell<PositionData>>,
}

#[derive(Debug)]
struct PositionData {
    /// Anchor this offset is relative to; `None` for a root.
    anchor: Option<Position>,
    /// Offset relative to the anchor (or absolute, for a root).
    offset: Vec2,
}

impl Position {
    /// Creates a root position with the given absolute coordinates.
    #[must_use]
    pub fn origin(x: f64, y: f64) -> Self {
        Self::new(None, Vec2::new(x, y))
    }

    /// Creates a position anchored to `anchor` at the given relative offset.
    ///
    /// The returned position shares `anchor`: later changes to the anchor's
    /// offset are reflected in this position's absolute coordinates.
    #[must_use]
    pub fn anchored(anchor: &Self, relative_x: f64, relative_y: f64) -> Self {
        Self::new(Some(anchor.clone()), Vec2::new(relative_x, relative_y))
    }

    fn new(anchor: Option<Self>, offset: Vec2) -> Self {
        Self {
            inner: Rc::new(RefCell::new(PositionData { anchor, offset })),
        }
    }

    /// Returns a handle to the anchor, if this position has one.
    #[must_use]
    pub fn anchor(&self) -> Option<Self> {
        self.inner.borrow().anchor.clone()
    }

    /// Returns `true` if the two handles refer to the same position.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Absolute X coordinate, resolved through the anchor chain.
    #[must_use]
    pub fn x(&self) -> f64 {
        let (anchor, dx) = {
            let data = self.inner.borrow();
            (data.anchor.clone(), data.offset.x)
        };
        anchor.map_or(0.0, |a| a.x()) + dx
    }

    /// Absolute Y coordinate, resolved through the anchor chain.
    #[must_use]
    pub fn y(&self) -> f64 {
        let (anchor, dy) = {
            let data = self.inner.borrow();
            (data.anchor.clone(), data.offset.y)
        };
        anchor.map_or(0.0, |a| a.y()) + dy
    }

    /// Absolute coordinates as a point.
    #[must_use]
    pub fn point(&self) -> Point {
        Point::new(self.x(), self.y())
    }

    /// X offset relative to the anchor.
    #[must_use]
    pub fn relative_x(&self) -> f64 {
        self.inner.borrow().offset.x
    }

    /// Y offset relative to the anchor.
    #[must_use]
    pub fn relative_y(&self) -> f64 {
        self.inner.borrow().offset.y
    }

    /// Sets the X offset relative to the anchor.
    ///
    /// Layout that depends on this position (such as a widget's content
    /// placement) picks the change up on its next coordinate read.
    pub fn set_relative_x(&self, relative_x: f64) {
        self.inner.borrow_mut().offset.x = relative_x;
    }

    /// Sets the Y offset relative to the anchor.
    pub fn set_relative_y(&self, relative_y: f64) {
        self.inner.borrow_mut().offset.y = relative_y;
    }
}
