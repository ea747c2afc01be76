// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accumulation timers for tooltip triggers.

/// Counts distinct host ticks while a condition holds.
///
/// The timer has two states: idle (count zero) and accumulating. Each
/// [`DelayTimer::update`] with the condition true counts `now` once, even if
/// the widget is rendered several times within the same tick; an update with
/// the condition false resets the count to zero immediately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DelayTimer {
    /// Accumulated tick count.
    pub ticks: u32,
    /// Last tick that was counted, if any.
    pub last_tick: Option<u64>,
}

impl DelayTimer {
    /// Advances the timer and returns the accumulated tick count.
    ///
    /// `now` is the host's monotonic frame tick. Passing `active = false`
    /// resets the timer and returns zero.
    pub fn update(&mut self, active: bool, now: u64) -> u32 {
        if !active {
            self.reset();
            return 0;
        }
        if self.last_tick != Some(now) {
            self.ticks = self.ticks.saturating_add(1);
            self.last_tick = Some(now);
        }
        self.ticks
    }

    /// Resets the timer to idle.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Per-widget tooltip timers: one machine per trigger kind.
///
/// Hover and focus accumulate independently; losing one condition resets
/// only that machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TooltipTimers {
    /// Timer driven by the hover condition.
    pub hover: DelayTimer,
    /// Timer driven by the focus condition.
    pub focus: DelayTimer,
}

impl TooltipTimers {
    /// Resets both timers to idle.
    pub fn reset(&mut self) {
        self.hover.reset();
        self.focus.reset();
    }
}
