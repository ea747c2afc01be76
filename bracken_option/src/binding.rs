// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The getter/setter seam between options and external state.

use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;

/// Access to an external boolean value.
///
/// The option core calls these as trusted host code: a panic inside a
/// binding is not caught here and propagates to the host's error boundary.
pub trait BoolBinding {
    /// Reads the current value.
    fn get(&self) -> bool;

    /// Writes a new value.
    fn set(&self, value: bool);
}

impl BoolBinding for Cell<bool> {
    fn get(&self) -> bool {
        Cell::get(self)
    }

    fn set(&self, value: bool) {
        Cell::set(self, value);
    }
}

impl<B: BoolBinding + ?Sized> BoolBinding for Rc<B> {
    fn get(&self) -> bool {
        (**self).get()
    }

    fn set(&self, value: bool) {
        (**self).set(value);
    }
}

/// A binding backed by a closure pair.
pub struct FnBinding<G, S> {
    getter: G,
    setter: S,
}

impl<G, S> FnBinding<G, S>
where
    G: Fn() -> bool,
    S: Fn(bool),
{
    /// Creates a binding from a getter and a setter.
    pub fn new(getter: G, setter: S) -> Self {
        Self { getter, setter }
    }
}

impl<G, S> BoolBinding for FnBinding<G, S>
where
    G: Fn() -> bool,
    S: Fn(bool),
{
    fn get(&self) -> bool {
        (self.getter)()
    }

    fn set(&self, value: bool) {
        (self.setter)(value);
    }
}

impl<G, S> fmt::Debug for FnBinding<G, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnBinding").finish_non_exhaustive()
    }
}
