//! Reset sequencing.
//!
//! Reset is held from time zero for a fixed window and released afterwards.
//! Whether reset is in effect depends only on elapsed time; which level the
//! reset pin is driven to depends only on polarity.

use crate::config::{ResetConfig, ResetPolarity};

/// Returns `true` while reset should be in effect.
///
/// Reset is asserted for every `elapsed < window` and released from
/// `elapsed == window` onward. Polarity does not change the timing; it is
/// accepted here so callers holding all three values can use one entry point.
///
/// # Arguments
///
/// * `elapsed` - Current simulated time.
/// * `window` - Length of the reset window in time units.
/// * `_polarity` - Reset signal convention.
pub const fn is_reset_asserted(elapsed: u64, window: u64, _polarity: ResetPolarity) -> bool {
    elapsed < window
}

/// Pure reset policy: a window length and a polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetSequencer {
    window: u64,
    polarity: ResetPolarity,
}

impl ResetSequencer {
    /// Creates a sequencer for the given window and polarity.
    pub const fn new(window: u64, polarity: ResetPolarity) -> Self {
        Self { window, polarity }
    }

    /// Length of the reset window in time units.
    pub const fn window(&self) -> u64 {
        self.window
    }

    /// Reset signal convention.
    pub const fn polarity(&self) -> ResetPolarity {
        self.polarity
    }

    /// Whether reset is in effect at `elapsed`.
    pub const fn is_asserted(&self, elapsed: u64) -> bool {
        is_reset_asserted(elapsed, self.window, self.polarity)
    }

    /// Signal level to drive onto the reset pin at `elapsed`.
    pub const fn level(&self, elapsed: u64) -> bool {
        self.polarity.level(self.is_asserted(elapsed))
    }
}

impl From<ResetConfig> for ResetSequencer {
    fn from(config: ResetConfig) -> Self {
        Self::new(config.window, config.polarity)
    }
}
