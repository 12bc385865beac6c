//! Common types used throughout the testbench.
//!
//! The testbench performs almost no fallible work: the loop and the classifier
//! are total. What can fail is configuration (rejected before a run starts)
//! and the file handling done by the suite runner and report writer.

/// Error types.
pub mod error;

pub use error::HarnessError;
