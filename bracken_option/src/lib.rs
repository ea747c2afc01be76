// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bracken Option: named, localizable values that materialize as widgets.
//!
//! An option wraps a piece of external state behind a getter/setter seam
//! and knows how to present itself: its `key` is both its identity and its
//! localization lookup, and [`OptionEntry::create_widget`] produces a fresh
//! widget showing the current value and editing it on interaction.
//!
//! Options are *factories*, not widgets: each `create_widget` call builds a
//! new widget bound to the same underlying state, and the widget updates
//! its own display text in place when the value changes, so sibling
//! widgets never re-layout.
//!
//! The state seam is [`BoolBinding`]: a tiny `{get, set}` interface the
//! core treats as trusted — a panicking binding propagates to the host's
//! own error boundary. Implementations exist for `Cell<bool>`, `Rc<B>`,
//! and closure pairs via [`FnBinding`].
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use bracken_option::BooleanOption;
//!
//! let value = Rc::new(Cell::new(false));
//! let option = BooleanOption::new("example.fancy_graphics", value.clone());
//!
//! option.toggle();
//! assert!(value.get());
//! option.set_from_str("anything-but-true");
//! assert!(!value.get());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod binding;
mod boolean;
mod entry;

pub use binding::{BoolBinding, FnBinding};
pub use boolean::BooleanOption;
pub use entry::{GENERIC_DISPLAY_KEY, OptionEntry, VALUE_OFF_KEY, VALUE_ON_KEY};
