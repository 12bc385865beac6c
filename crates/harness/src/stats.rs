//! Run statistics collection and reporting.
//!
//! This module tracks what a single testbench run did. It provides:
//! 1. **Time:** Simulated steps, clock cycles, and host wall time.
//! 2. **Reset:** Number of steps spent with reset asserted.
//! 3. **Reporting:** A fixed-width table printed to stdout after a run.

use std::time::{Duration, Instant};

use crate::common::HarnessError;

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"reset"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "reset"];

/// Statistics for one run.
#[derive(Debug, Clone)]
pub struct RunStats {
    start_time: Instant,
    host_time: Option<Duration>,
    /// Simulated time units elapsed.
    pub sim_time: u64,
    /// Rising clock edges observed.
    pub posedges: u64,
    /// Rising clock edges observed after reset was released.
    pub active_posedges: u64,
    /// Steps during which reset was asserted.
    pub reset_steps: u64,
}

impl Default for RunStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            host_time: None,
            sim_time: 0,
            posedges: 0,
            active_posedges: 0,
            reset_steps: 0,
        }
    }
}

impl RunStats {
    /// Freezes the host wall time; later calls keep the first value.
    pub fn finish(&mut self) {
        if self.host_time.is_none() {
            self.host_time = Some(self.start_time.elapsed());
        }
    }

    /// Host wall time of the run (up to now if the run has not finished).
    pub fn host_time(&self) -> Duration {
        self.host_time.unwrap_or_else(|| self.start_time.elapsed())
    }

    /// Checks that every name in `sections` is one of [`STATS_SECTIONS`].
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfiguration`] naming the first unknown section.
    pub fn check_sections(sections: &[String]) -> Result<(), HarnessError> {
        match sections.iter().find(|s| !STATS_SECTIONS.contains(&s.as_str())) {
            Some(unknown) => Err(HarnessError::invalid(
                "stats_sections",
                format!(
                    "unknown section '{unknown}' (expected one of: {})",
                    STATS_SECTIONS.join(", ")
                ),
            )),
            None => Ok(()),
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to print, or empty for all.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.host_time().as_secs_f64();
        let steps = self.sim_time.max(1);

        if want("summary") {
            let khz = if seconds > 0.0 {
                (self.posedges as f64 / seconds) / 1000.0
            } else {
                0.0
            };
            println!("\n==========================================================");
            println!("TESTBENCH RUN STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_time                 {}", self.sim_time);
            println!("sim_cycles               {}", self.posedges);
            println!("sim_freq                 {khz:.2} kHz");
            println!("----------------------------------------------------------");
        }
        if want("reset") {
            println!("RESET");
            println!(
                "  reset.steps            {} ({:.2}%)",
                self.reset_steps,
                (self.reset_steps as f64 / steps as f64) * 100.0
            );
            println!("  cycles.active          {}", self.active_posedges);
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
