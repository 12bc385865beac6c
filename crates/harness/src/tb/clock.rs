//! Clock driver.
//!
//! One clock, toggled once per simulated time unit. A full clock period is
//! therefore two time units, and a rising edge happens on every other step.

/// Returns the next clock level.
pub const fn toggle(current: bool) -> bool {
    !current
}

/// Returns `true` for a low-to-high transition.
pub const fn is_rising_edge(previous: bool, current: bool) -> bool {
    !previous && current
}

/// Free-running clock that starts low.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockDriver {
    level: bool,
}

impl ClockDriver {
    /// Creates a clock at the low level.
    pub const fn new() -> Self {
        Self { level: false }
    }

    /// Current clock level.
    pub const fn level(&self) -> bool {
        self.level
    }

    /// Toggles the clock and returns `(new_level, rising_edge)`.
    #[inline]
    pub const fn step(&mut self) -> (bool, bool) {
        let previous = self.level;
        self.level = toggle(previous);
        (self.level, is_rising_edge(previous, self.level))
    }
}
