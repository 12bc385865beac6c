//! Scripted core.
//!
//! A minimal synchronous model with the same port contract as a core under
//! test: it samples an asynchronous reset, counts rising clock edges once
//! reset is released, and after a configured number of cycles latches a
//! trap with a fixed result register and cause. Before trapping it reports
//! `cause = -1`, which classifies as an undefined error.

use serde::Deserialize;

use crate::config::ResetPolarity;
use crate::tb::{SimulationModel, is_rising_edge};
use crate::verdict::{TrapRecord, cause};

/// Default number of cycles after reset before the scripted trap.
const DEFAULT_LATENCY: u64 = 1000;

/// What the scripted core does once reset is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ScriptedProgram {
    /// Value left in the result register.
    #[serde(default)]
    pub result_code: i8,

    /// Cause of the trap taken at the end.
    #[serde(default = "ScriptedProgram::default_cause")]
    pub cause_code: i8,

    /// Rising edges after reset release before the trap is latched.
    ///
    /// Zero latches the trap on the first evaluation with reset released.
    #[serde(default = "ScriptedProgram::default_latency")]
    pub latency: u64,
}

impl ScriptedProgram {
    const fn default_cause() -> i8 {
        cause::ENVIRONMENT_CALL_FROM_M_MODE
    }

    const fn default_latency() -> u64 {
        DEFAULT_LATENCY
    }

    /// A program that traps with `cause_code` after `latency` cycles.
    pub const fn new(result_code: i8, cause_code: i8, latency: u64) -> Self {
        Self {
            result_code,
            cause_code,
            latency,
        }
    }

    /// A program that ends with `ecall` and result 0.
    pub const fn passing(latency: u64) -> Self {
        Self::new(cause::RESULT_PASS, cause::ENVIRONMENT_CALL_FROM_M_MODE, latency)
    }
}

impl Default for ScriptedProgram {
    fn default() -> Self {
        Self::passing(DEFAULT_LATENCY)
    }
}

/// Synchronous stand-in for a core under test.
#[derive(Debug, Clone)]
pub struct ScriptedCore {
    program: ScriptedProgram,
    polarity: ResetPolarity,
    clk: bool,
    rst: bool,
    last_clk: bool,
    cycles: u64,
    trapped: bool,
    outputs: TrapRecord,
}

impl ScriptedCore {
    /// Creates a core running `program`, reading reset with `polarity`.
    pub const fn new(program: ScriptedProgram, polarity: ResetPolarity) -> Self {
        Self {
            program,
            polarity,
            clk: false,
            rst: false,
            last_clk: false,
            cycles: 0,
            trapped: false,
            outputs: Self::idle(),
        }
    }

    const fn idle() -> TrapRecord {
        TrapRecord::new(0, cause::NO_TRAP)
    }

    /// Cycles counted since reset was last released.
    pub const fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Whether the scripted trap has been taken.
    pub const fn trapped(&self) -> bool {
        self.trapped
    }

    /// The program this core runs.
    pub const fn program(&self) -> &ScriptedProgram {
        &self.program
    }
}

impl SimulationModel for ScriptedCore {
    fn set_clock(&mut self, level: bool) {
        self.clk = level;
    }

    fn set_reset(&mut self, level: bool) {
        self.rst = level;
    }

    fn eval(&mut self) {
        let posedge = is_rising_edge(self.last_clk, self.clk);
        self.last_clk = self.clk;

        if self.polarity.is_asserted_level(self.rst) {
            self.cycles = 0;
            self.trapped = false;
            self.outputs = Self::idle();
            return;
        }
        if posedge {
            self.cycles += 1;
        }
        if self.cycles >= self.program.latency && !self.trapped {
            self.trapped = true;
            self.outputs = TrapRecord::new(self.program.result_code, self.program.cause_code);
        }
    }

    fn result_code(&self) -> i8 {
        self.outputs.result_code
    }

    fn cause_code(&self) -> i8 {
        self.outputs.cause_code
    }
}
