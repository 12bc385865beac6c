use rvtb_core::Testbench;
use rvtb_core::config::{ResetPolarity, TestbenchConfig};

/// Installs a test-friendly subscriber so `tracing` output shows up on failure.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("rvtb_core=debug")
        .try_init();
}

/// Builds a config with the given bounds and polarity.
pub fn config(max_sim_time: u64, window: u64, polarity: ResetPolarity) -> TestbenchConfig {
    let mut config = TestbenchConfig::default();
    config.max_sim_time = max_sim_time;
    config.reset.window = window;
    config.reset.polarity = polarity;
    config
}

/// Builds a testbench, panicking on invalid bounds.
pub fn testbench(max_sim_time: u64, window: u64, polarity: ResetPolarity) -> Testbench {
    init_tracing();
    Testbench::new(config(max_sim_time, window, polarity)).unwrap()
}
