//! Behavioral models implementing `SimulationModel`.
//!
//! Compiled RTL models live outside this crate and plug in through the trait.
//! The scripted core here stands in for one when exercising the testbench
//! itself, from the CLI or from suite manifests.

/// Scripted core that traps after a fixed number of cycles.
pub mod scripted;

pub use scripted::{ScriptedCore, ScriptedProgram};
