//! Device-under-test capability trait.
//!
//! This module defines the `SimulationModel` trait implemented by anything the
//! testbench can drive. It provides:
//! 1. **Inputs:** Clock and reset pins, set as plain levels.
//! 2. **Evaluation:** One settle of combinational and sequential state per call.
//! 3. **Outputs:** The result register and trap-cause code, read as signed bytes.
//!
//! A compiled RTL model wraps its generated port accessors in this trait; the
//! crate's own `ScriptedCore` and the test mocks implement it directly.

use crate::verdict::TrapRecord;

/// A clocked model the testbench can drive.
///
/// The testbench borrows the model mutably for the length of a run and only
/// touches the two input pins; it never constructs or configures it.
pub trait SimulationModel {
    /// Drives the clock input.
    fn set_clock(&mut self, level: bool);
    /// Drives the reset input.
    fn set_reset(&mut self, level: bool);
    /// Settles the model's state given the current inputs.
    ///
    /// Evaluation is infallible from the testbench's point of view: a fault
    /// inside the design shows up in its outputs, not as an error here.
    fn eval(&mut self);
    /// Value of the result register (`a0` for the standard test programs).
    fn result_code(&self) -> i8;
    /// Trap cause reported by the core (`mcause`, truncated to eight bits).
    fn cause_code(&self) -> i8;

    /// Samples both outputs into a [`TrapRecord`].
    fn trap_record(&self) -> TrapRecord {
        TrapRecord::new(self.result_code(), self.cause_code())
    }
}

impl<M: SimulationModel + ?Sized> SimulationModel for Box<M> {
    fn set_clock(&mut self, level: bool) {
        (**self).set_clock(level);
    }

    fn set_reset(&mut self, level: bool) {
        (**self).set_reset(level);
    }

    fn eval(&mut self) {
        (**self).eval();
    }

    fn result_code(&self) -> i8 {
        (**self).result_code()
    }

    fn cause_code(&self) -> i8 {
        (**self).cause_code()
    }

    fn trap_record(&self) -> TrapRecord {
        (**self).trap_record()
    }
}
