// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named colors shared by the built-in widgets.
//!
//! Hosts are free to draw with their own colors; these are the defaults the
//! widget crates reach for so the toolkit looks coherent out of the box.

use peniko::Color;

/// Default body text color (light gray).
pub const TEXT: Color = Color::from_rgb8(0xA0, 0xA0, 0xA0);

/// Emphasized text color.
pub const WHITE: Color = Color::from_rgb8(0xFF, 0xFF, 0xFF);

/// Affirmative value color (boolean option "on" in colored mode).
pub const AFFIRMATIVE: Color = Color::from_rgb8(0x55, 0xFF, 0x55);

/// Negative value color (boolean option "off" in colored mode).
pub const NEGATIVE: Color = Color::from_rgb8(0xFF, 0x55, 0x55);

/// Tooltip popup background fill.
pub const TOOLTIP_BACKGROUND: Color = Color::from_rgba8(0x10, 0x00, 0x10, 0xF0);

/// Button background fill.
pub const BUTTON: Color = Color::from_rgb8(0x46, 0x46, 0x46);

/// Button background fill while hovered or focused.
pub const BUTTON_HIGHLIGHTED: Color = Color::from_rgb8(0x64, 0x64, 0x64);
