//! Trap records and outcome classification.
//!
//! When a run ends the testbench samples two outputs from the model, the
//! result register and the trap cause, into a [`TrapRecord`]. The classifier
//! maps every possible record to exactly one [`Verdict`]:
//! 1. **Test-end traps** (`ebreak`/`ecall`): the result register decides pass, fail, or undefined.
//! 2. **Known faults:** Illegal instruction and the three misaligned-address exceptions.
//! 3. **Everything else:** Undefined error.

/// Exception cause code constants.
pub mod cause;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Final classified outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Test-end trap with result 0.
    Pass,
    /// Test-end trap with result 1.
    Fail,
    /// Test-end trap with any other result value.
    UndefinedResult,
    /// Illegal instruction exception.
    IllegalInstruction,
    /// Instruction address misaligned exception.
    InstructionAddrMisaligned,
    /// Load address misaligned exception.
    LoadAddrMisaligned,
    /// Store address misaligned exception.
    StoreAddrMisaligned,
    /// Any cause not listed above, including "no trap yet".
    UndefinedError,
}

impl Verdict {
    /// Every verdict, in classification-table order.
    pub const ALL: [Self; 8] = [
        Self::Pass,
        Self::Fail,
        Self::UndefinedResult,
        Self::IllegalInstruction,
        Self::InstructionAddrMisaligned,
        Self::LoadAddrMisaligned,
        Self::StoreAddrMisaligned,
        Self::UndefinedError,
    ];

    /// Fixed human-readable label, as printed in result reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::UndefinedResult => "UNDEFINED RESULT",
            Self::IllegalInstruction => "ILLEGAL INSTRUCTION",
            Self::InstructionAddrMisaligned => "INSTRUCTION ADDR MISALIGNED",
            Self::LoadAddrMisaligned => "LOAD ADDR MISALIGNED",
            Self::StoreAddrMisaligned => "STORE ADDR MISALIGNED",
            Self::UndefinedError => "UNDEFINED ERROR",
        }
    }

    /// Returns `true` only for [`Verdict::Pass`].
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result register and trap cause sampled from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrapRecord {
    /// Result register value.
    pub result_code: i8,
    /// Trap cause code.
    pub cause_code: i8,
}

impl TrapRecord {
    /// Creates a record from the two sampled outputs.
    pub const fn new(result_code: i8, cause_code: i8) -> Self {
        Self {
            result_code,
            cause_code,
        }
    }

    /// Classifies this record.
    pub const fn classify(&self) -> Verdict {
        classify(self.result_code, self.cause_code)
    }
}

impl fmt::Display for TrapRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a0={} mcause={}", self.result_code, self.cause_code)
    }
}

/// Maps a result register value and trap cause to a verdict.
///
/// The test-end causes are checked first; the result register is only
/// consulted for them. Total over the whole `i8 x i8` domain.
pub const fn classify(result_code: i8, cause_code: i8) -> Verdict {
    if cause::is_test_end(cause_code) {
        return match result_code {
            cause::RESULT_PASS => Verdict::Pass,
            cause::RESULT_FAIL => Verdict::Fail,
            _ => Verdict::UndefinedResult,
        };
    }
    match cause_code {
        cause::ILLEGAL_INSTRUCTION => Verdict::IllegalInstruction,
        cause::INSTRUCTION_ADDRESS_MISALIGNED => Verdict::InstructionAddrMisaligned,
        cause::LOAD_ADDRESS_MISALIGNED => Verdict::LoadAddrMisaligned,
        cause::STORE_ADDRESS_MISALIGNED => Verdict::StoreAddrMisaligned,
        _ => Verdict::UndefinedError,
    }
}
