//! Cycle-driven testbench library for clocked RISC-V core models.
//!
//! This crate drives a device-under-test through reset and free-running clock
//! toggling, then turns its final trap state into a verdict. It provides:
//! 1. **Testbench:** Reset sequencing, clock driving, step probes, and the bounded simulation loop.
//! 2. **Verdicts:** Trap records sampled from the model and the total outcome classifier.
//! 3. **Models:** The `SimulationModel` capability trait and a scripted behavioral core.
//! 4. **Suites:** Named test manifests, batch runs, and `result.txt`-style reports.
//! 5. **Support:** Configuration, error types, and run statistics.

/// Common types shared across the crate (error taxonomy).
pub mod common;
/// Testbench configuration (defaults, reset polarity, signal names).
pub mod config;
/// Behavioral models implementing `SimulationModel`.
pub mod models;
/// Simulation loop and suite runner.
pub mod sim;
/// Run statistics collection and reporting.
pub mod stats;
/// Testbench building blocks (reset, clock, model trait, probes).
pub mod tb;
/// Trap records, cause codes, and outcome classification.
pub mod verdict;

/// Crate-wide error type.
pub use crate::common::HarnessError;
/// Root configuration type; use `TestbenchConfig::default()` or load it from JSON.
pub use crate::config::TestbenchConfig;
/// Bounded simulation loop; construct with `Testbench::new`.
pub use crate::sim::{RunOutcome, Testbench};
/// Device-under-test capability trait.
pub use crate::tb::SimulationModel;
/// Outcome classification.
pub use crate::verdict::{TrapRecord, Verdict, classify};
