//! Configuration system for the testbench.
//!
//! This module defines the configuration structures and enums used to parameterize
//! a run. It provides:
//! 1. **Defaults:** Baseline bounds (simulation length, reset window) and signal names.
//! 2. **Structures:** `TestbenchConfig` with nested reset and signal-name sections.
//! 3. **Enums:** Reset polarity (active-high or active-low).
//! 4. **Validation:** Rejection of degenerate bounds before a run starts.
//!
//! Configuration is deserialized from JSON (`TestbenchConfig::from_json`) or built with
//! `TestbenchConfig::default()` and adjusted field by field.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::HarnessError;

/// Default configuration constants for the testbench.
mod defaults {
    /// Number of simulated time units the loop runs for.
    ///
    /// Two time units make one clock cycle, so this is five million cycles.
    pub const MAX_SIM_TIME: u64 = 10_000_000;

    /// Number of time units reset is held asserted from time zero.
    pub const RESET_WINDOW: u64 = 100;

    /// Name of the clock input on the model's top-level port list.
    pub const CLOCK_SIGNAL: &str = "clk";

    /// Name of the reset input on the model's top-level port list.
    pub const RESET_SIGNAL: &str = "arst";
}

/// Reset signal conventions.
///
/// Selects which signal level means "in reset". The timing of the reset
/// window is the same for both conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ResetPolarity {
    /// Reset is asserted by driving the signal high (`arst`, `rst`).
    #[default]
    #[serde(alias = "high", alias = "active_high")]
    ActiveHigh,
    /// Reset is asserted by driving the signal low (`rst_n`, `aresetn`).
    #[serde(alias = "low", alias = "active_low")]
    ActiveLow,
}

impl ResetPolarity {
    /// Returns the signal level that corresponds to the given reset state.
    ///
    /// # Arguments
    ///
    /// * `asserted` - Whether reset is currently in effect.
    pub const fn level(self, asserted: bool) -> bool {
        match self {
            Self::ActiveHigh => asserted,
            Self::ActiveLow => !asserted,
        }
    }

    /// Interprets a sampled signal level as a reset state.
    pub const fn is_asserted_level(self, level: bool) -> bool {
        match self {
            Self::ActiveHigh => level,
            Self::ActiveLow => !level,
        }
    }
}

/// Root testbench configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TestbenchConfig {
    /// Exclusive upper bound on simulated time; the loop runs exactly this many steps.
    #[serde(default = "TestbenchConfig::default_max_sim_time")]
    pub max_sim_time: u64,

    /// Reset sequencing.
    #[serde(default)]
    pub reset: ResetConfig,

    /// Port names, used in log output.
    #[serde(default)]
    pub signals: SignalNames,

    /// Log every simulated step at `trace` level.
    #[serde(default)]
    pub trace_steps: bool,
}

impl TestbenchConfig {
    fn default_max_sim_time() -> u64 {
        defaults::MAX_SIM_TIME
    }

    /// Parses a configuration from a JSON document.
    ///
    /// Missing fields take their defaults. The result is not validated; call
    /// [`TestbenchConfig::validate`] or hand it to `Testbench::new`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::ConfigParse`] if the document is malformed or a
    /// field has the wrong type (including negative bounds).
    pub fn from_json(json: &str) -> Result<Self, HarnessError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Io`] if the file cannot be read, or
    /// [`HarnessError::ConfigParse`] if its contents are malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| HarnessError::io(path, e))?;
        Self::from_json(&text)
    }

    /// Checks that the configuration describes a meaningful run.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfiguration`] if `max_sim_time` or the
    /// reset window is zero.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.max_sim_time == 0 {
            return Err(HarnessError::invalid(
                "max_sim_time",
                "must be greater than zero",
            ));
        }
        if self.reset.window == 0 {
            return Err(HarnessError::invalid(
                "reset.window",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

impl Default for TestbenchConfig {
    fn default() -> Self {
        Self {
            max_sim_time: defaults::MAX_SIM_TIME,
            reset: ResetConfig::default(),
            signals: SignalNames::default(),
            trace_steps: false,
        }
    }
}

/// Reset window and polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ResetConfig {
    /// Number of time units, starting at zero, during which reset is asserted.
    #[serde(default = "ResetConfig::default_window")]
    pub window: u64,

    /// Signal convention for the reset input.
    #[serde(default)]
    pub polarity: ResetPolarity,
}

impl ResetConfig {
    fn default_window() -> u64 {
        defaults::RESET_WINDOW
    }
}

impl Default for ResetConfig {
    fn default() -> Self {
        Self {
            window: defaults::RESET_WINDOW,
            polarity: ResetPolarity::default(),
        }
    }
}

/// Names of the model's clock and reset inputs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignalNames {
    /// Clock input name.
    #[serde(default = "SignalNames::default_clock")]
    pub clock: String,

    /// Reset input name.
    #[serde(default = "SignalNames::default_reset")]
    pub reset: String,
}

impl SignalNames {
    fn default_clock() -> String {
        defaults::CLOCK_SIGNAL.to_string()
    }

    fn default_reset() -> String {
        defaults::RESET_SIGNAL.to_string()
    }
}

impl Default for SignalNames {
    fn default() -> Self {
        Self {
            clock: Self::default_clock(),
            reset: Self::default_reset(),
        }
    }
}
