// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bracken Tooltip: delayed tooltip scheduling.
//!
//! Tooltips in Bracken are not shown the instant a widget is hovered or
//! focused; they appear after the triggering condition has held for a
//! configurable number of host ticks. This crate provides the two pieces of
//! that behavior:
//!
//! - [`DelayTimer`] / [`TooltipTimers`]: per-widget accumulation state.
//!   Hover and focus each get an independent timer; a timer counts distinct
//!   ticks while its condition holds and snaps back to zero the moment it
//!   does not.
//! - [`TooltipQueue`]: the per-screen scheduler. At most one tooltip is
//!   pending per frame; when several widgets qualify in the same render
//!   pass, the last writer wins (render order is the arbiter). The pending
//!   entry lives for one render pass only and is recomputed from scratch
//!   next frame.
//!
//! The queue is an explicitly passed object rather than a process-wide
//! global, so tests and multi-screen hosts can run isolated instances.
//!
//! ## Minimal example
//!
//! ```
//! use bracken_tooltip::{TooltipQueue, TooltipTimers};
//! use bracken_backend_ref::RefTextLayout;
//! use kurbo::{Point, Rect};
//!
//! let layout = RefTextLayout::default();
//! let mut queue = TooltipQueue::with_delay(2);
//! let mut timers = TooltipTimers::default();
//! let bounds = Rect::new(0.0, 0.0, 100.0, 20.0);
//! let mouse = Point::new(5.0, 5.0);
//!
//! // One tick of hover: still accumulating.
//! queue.queue_for(&mut timers, "hint", true, false, bounds, mouse, 1, &layout);
//! assert!(queue.pending().is_none());
//!
//! // Second tick reaches the threshold: the tooltip is pending at the mouse.
//! queue.queue_for(&mut timers, "hint", true, false, bounds, mouse, 2, &layout);
//! assert_eq!(queue.pending().unwrap().position, mouse);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod queue;
mod timer;

pub use queue::{DEFAULT_DELAY_TICKS, Tooltip, TooltipQueue};
pub use timer::{DelayTimer, TooltipTimers};
