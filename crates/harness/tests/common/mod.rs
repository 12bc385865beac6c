/// Testbench construction helpers.
pub mod harness;
/// Model mocks and fakes.
pub mod mocks;
