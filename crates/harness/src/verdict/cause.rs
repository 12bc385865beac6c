//! RISC-V exception cause codes as reported by the core under test.
//!
//! These are the exception codes of the `mcause` CSR (interrupt bit clear).
//! The testbench reads the cause through an eight-bit port, so the constants
//! are signed bytes; every standard exception code fits.

/// Instruction address misaligned (0).
pub const INSTRUCTION_ADDRESS_MISALIGNED: i8 = 0;
/// Instruction access fault (1).
pub const INSTRUCTION_ACCESS_FAULT: i8 = 1;
/// Illegal instruction (2).
pub const ILLEGAL_INSTRUCTION: i8 = 2;
/// Breakpoint (3). Raised by `ebreak`; one of the two test-end traps.
pub const BREAKPOINT: i8 = 3;
/// Load address misaligned (4).
pub const LOAD_ADDRESS_MISALIGNED: i8 = 4;
/// Load access fault (5).
pub const LOAD_ACCESS_FAULT: i8 = 5;
/// Store/AMO address misaligned (6).
pub const STORE_ADDRESS_MISALIGNED: i8 = 6;
/// Store/AMO access fault (7).
pub const STORE_ACCESS_FAULT: i8 = 7;
/// Environment call from U-mode (8).
pub const ENVIRONMENT_CALL_FROM_U_MODE: i8 = 8;
/// Environment call from S-mode (9).
pub const ENVIRONMENT_CALL_FROM_S_MODE: i8 = 9;
/// Environment call from M-mode (11). Raised by `ecall`; one of the two test-end traps.
pub const ENVIRONMENT_CALL_FROM_M_MODE: i8 = 11;

/// Value a core reports before it has taken any trap.
pub const NO_TRAP: i8 = -1;

/// Result register value a passing test program leaves behind.
pub const RESULT_PASS: i8 = 0;
/// Result register value a failing test program leaves behind.
pub const RESULT_FAIL: i8 = 1;

/// Returns `true` for the causes test programs use to signal completion.
pub const fn is_test_end(cause: i8) -> bool {
    matches!(cause, BREAKPOINT | ENVIRONMENT_CALL_FROM_M_MODE)
}
