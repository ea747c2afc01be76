// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bracken Widget: the widget contract and the built-in widgets.
//!
//! A widget is an interactive, renderable UI element with bounds, hover and
//! focus state, and a render/input/narration contract. This crate provides:
//!
//! - [`WidgetState`]: the state every widget shares (one
//!   [`Position`](bracken_position::Position), size, flags, tooltip,
//!   border).
//! - [`Widget`]: the trait the host drives each frame — `render`,
//!   `mouse_clicked`, `mouse_moved`, `key_pressed`, `requires_cursor`,
//!   `narration_message`. The provided methods implement the shared
//!   plumbing: visibility gating, per-frame hover recomputation, border
//!   rendering, and tooltip scheduling.
//! - [`Border`]s: [`EmptyBorder`], [`LineBorder`], or any custom impl.
//! - The built-in widgets: [`Label`], [`Separator`], and [`Button`].
//! - The input vocabulary the host maps its events into: [`MouseButton`]
//!   and [`Key`].
//!
//! ## Frame protocol
//!
//! The host calls, in a fixed order per frame: input events first
//! (`mouse_clicked` / `mouse_moved` / `key_pressed`), then `render` for
//! each visible widget, then draws the tooltip queue. Everything runs on
//! the host's single UI thread; nothing here blocks, suspends, or fails.
//!
//! ## Minimal example
//!
//! ```
//! use bracken_backend_ref::{RefSurface, RefTextLayout};
//! use bracken_position::Position;
//! use bracken_tooltip::TooltipQueue;
//! use bracken_widget::{Label, RenderContext, Widget};
//! use kurbo::Point;
//!
//! let layout = RefTextLayout::default();
//! let mut label = Label::new(Position::origin(10.0, 10.0), "hello", 120.0, &layout);
//!
//! let mut surface = RefSurface::default();
//! let mut tooltips = TooltipQueue::new();
//! let mut ctx = RenderContext {
//!     text: &layout,
//!     surface: &mut surface,
//!     tooltips: &mut tooltips,
//!     tick: 0,
//! };
//! label.render(&mut ctx, Point::new(0.0, 0.0), 0.0);
//! assert_eq!(surface.drawn_text(), vec!["hello"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod border;
mod state;
mod widget;

pub mod button;
pub mod input;
pub mod label;
pub mod separator;

pub use border::{Border, EmptyBorder, LineBorder};
pub use button::Button;
pub use input::{Key, MouseButton};
pub use label::Label;
pub use separator::Separator;
pub use state::{WidgetFlags, WidgetState};
pub use widget::{RenderContext, Widget};
