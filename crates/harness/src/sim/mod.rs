//! Simulation loop and suite runner.
//!
//! Provides the bounded testbench loop that drives a model through reset and
//! clocking, and a batch runner that executes named cases and writes a
//! result report.

/// Named test cases, batch runs, and result reports.
pub mod suite;
/// Bounded reset/clock/evaluate loop.
pub mod simulator;

pub use simulator::{LoopState, RunOutcome, Testbench};
pub use suite::{CaseResult, SuiteCase, SuiteManifest, SuiteReport, SuiteSummary, run_suite};
