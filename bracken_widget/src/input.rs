// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input vocabulary forwarded by the host.
//!
//! The host's windowing layer maps its own button and key codes into these
//! types before calling into widgets. Codes the core has no behavior for
//! travel as `Other` so hosts can still pattern-match them in custom
//! widgets.

/// A mouse button, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// The primary (usually left) button.
    Primary,
    /// The secondary (usually right) button.
    Secondary,
    /// The middle button.
    Middle,
    /// Any other button, by host code.
    Other(u8),
}

impl MouseButton {
    /// Returns `true` for the primary button.
    #[must_use]
    pub fn is_primary(self) -> bool {
        self == Self::Primary
    }
}

/// A key press, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Enter / Return.
    Enter,
    /// Space bar.
    Space,
    /// Tab.
    Tab,
    /// Escape.
    Escape,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Any other key, by host scancode.
    Other(u32),
}

impl Key {
    /// Returns `true` for keys that activate a focused widget.
    #[must_use]
    pub fn is_activation(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_detection() {
        assert!(MouseButton::Primary.is_primary());
        assert!(!MouseButton::Secondary.is_primary());
        assert!(!MouseButton::Other(0).is_primary());
    }

    #[test]
    fn activation_keys() {
        assert!(Key::Enter.is_activation());
        assert!(Key::Space.is_activation());
        assert!(!Key::Tab.is_activation());
        assert!(!Key::Other(57).is_activation());
    }
}
