// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bracken Screen: pre/post hooks around a host screen opening.
//!
//! External code often needs to reach into a screen it does not own: add a
//! widget before the first render, or inspect the final layout right after
//! setup. [`OpenScreenEvents`] carries two ordered subscriber lists for
//! exactly those moments:
//!
//! - **pre**: fired before a newly opened screen finishes initializing, so
//!   a subscriber may add or replace widgets before anything is drawn.
//! - **post**: fired after initialization, so a subscriber may react to
//!   the screen's final widget layout.
//!
//! Registration is additive and order-preserving: subscribers run in the
//! order they were registered, synchronously, on the host's UI thread.
//! There is no unregistration; a registry lives as long as the host wants
//! its subscribers to.
//!
//! The type is generic over the host's screen type, so it imposes nothing
//! on how a screen is structured:
//!
//! ```
//! use bracken_screen::OpenScreenEvents;
//!
//! struct Screen {
//!     widgets: Vec<&'static str>,
//! }
//!
//! let mut events = OpenScreenEvents::new();
//! events.register_pre(|screen: &mut Screen| screen.widgets.push("injected"));
//! events.register_post(|screen: &mut Screen| assert_eq!(screen.widgets.len(), 2));
//!
//! let mut screen = Screen { widgets: vec![] };
//! events.emit_pre(&mut screen);
//! screen.widgets.push("own"); // The screen's own setup.
//! events.emit_post(&mut screen);
//! assert_eq!(screen.widgets, ["injected", "own"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// A subscriber invoked with the opening screen.
pub type OpenScreenFn<S> = Box<dyn FnMut(&mut S)>;

/// Ordered pre/post subscriber lists for screen opening.
///
/// Both lists dispatch to every subscriber in registration order; a later
/// subscriber sees the effects of earlier ones.
pub struct OpenScreenEvents<S> {
    pre: Vec<OpenScreenFn<S>>,
    post: Vec<OpenScreenFn<S>>,
}

impl<S> OpenScreenEvents<S> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pre: Vec::new(),
            post: Vec::new(),
        }
    }

    /// Registers a subscriber for the pre-initialization moment.
    pub fn register_pre(&mut self, subscriber: impl FnMut(&mut S) + 'static) {
        self.pre.push(Box::new(subscriber));
    }

    /// Registers a subscriber for the post-initialization moment.
    pub fn register_post(&mut self, subscriber: impl FnMut(&mut S) + 'static) {
        self.post.push(Box::new(subscriber));
    }

    /// Registers a pre and a post subscriber in one call.
    pub fn on_open(
        &mut self,
        pre: impl FnMut(&mut S) + 'static,
        post: impl FnMut(&mut S) + 'static,
    ) {
        self.register_pre(pre);
        self.register_post(post);
    }

    /// Invokes every pre subscriber in registration order.
    pub fn emit_pre(&mut self, screen: &mut S) {
        for subscriber in &mut self.pre {
            subscriber(screen);
        }
    }

    /// Invokes every post subscriber in registration order.
    pub fn emit_post(&mut self, screen: &mut S) {
        for subscriber in &mut self.post {
            subscriber(screen);
        }
    }
}

impl<S> Default for OpenScreenEvents<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for OpenScreenEvents<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenScreenEvents")
            .field("pre", &self.pre.len())
            .field("post", &self.post.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    struct Screen;

    #[test]
    fn pre_runs_before_post_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut events = OpenScreenEvents::new();

        let log = order.clone();
        events.register_pre(move |_: &mut Screen| log.borrow_mut().push("pre-1"));
        let log = order.clone();
        events.register_pre(move |_: &mut Screen| log.borrow_mut().push("pre-2"));
        let log = order.clone();
        events.register_post(move |_: &mut Screen| log.borrow_mut().push("post-1"));

        let mut screen = Screen;
        events.emit_pre(&mut screen);
        events.emit_post(&mut screen);

        assert_eq!(*order.borrow(), vec!["pre-1", "pre-2", "post-1"]);
    }

    #[test]
    fn on_open_registers_both_phases() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut events = OpenScreenEvents::new();

        let pre_log = order.clone();
        let post_log = order.clone();
        events.on_open(
            move |_: &mut Screen| pre_log.borrow_mut().push("pre"),
            move |_: &mut Screen| post_log.borrow_mut().push("post"),
        );

        let mut screen = Screen;
        events.emit_pre(&mut screen);
        events.emit_post(&mut screen);
        assert_eq!(*order.borrow(), vec!["pre", "post"]);
    }

    #[test]
    fn subscribers_mutate_the_screen_they_receive() {
        struct Counted {
            opens: u32,
        }

        let mut events = OpenScreenEvents::new();
        events.register_pre(|screen: &mut Counted| screen.opens += 1);

        let mut screen = Counted { opens: 0 };
        events.emit_pre(&mut screen);
        events.emit_pre(&mut screen);
        assert_eq!(screen.opens, 2);
    }

    #[test]
    fn empty_registry_emits_nothing() {
        let mut events = OpenScreenEvents::<Screen>::new();
        let mut screen = Screen;
        events.emit_pre(&mut screen);
        events.emit_post(&mut screen);
    }
}
