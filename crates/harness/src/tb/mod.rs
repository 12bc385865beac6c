//! Testbench building blocks.
//!
//! The pieces the simulation loop composes each step:
//! 1. **Reset:** Time-based reset window mapped to a signal level by polarity.
//! 2. **Clock:** Single clock toggled once per time unit, with rising-edge detection.
//! 3. **Model:** The capability trait a device-under-test implements.
//! 4. **Probes:** Optional per-step observers (logging, periodic verdict sampling).

/// Clock driver and edge detection.
pub mod clock;
/// Device-under-test capability trait.
pub mod model;
/// Per-step observers.
pub mod probe;
/// Reset sequencing.
pub mod reset;

pub use clock::{ClockDriver, is_rising_edge, toggle};
pub use model::SimulationModel;
pub use probe::{NullProbe, Probe, StepInfo, TraceProbe, VerdictSample, VerdictSampler};
pub use reset::{ResetSequencer, is_reset_asserted};
