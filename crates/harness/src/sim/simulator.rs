//! Testbench: drives a model for a fixed number of simulated time units.
//!
//! Each step applies the reset level for the current time, toggles the clock,
//! evaluates the model, counts rising edges, and advances time. The bound is
//! the only way a run ends; the verdict is taken from the outputs afterwards.

use crate::common::HarnessError;
use crate::config::TestbenchConfig;
use crate::stats::RunStats;
use crate::tb::{ClockDriver, NullProbe, Probe, ResetSequencer, SimulationModel, StepInfo};
use crate::verdict::{TrapRecord, Verdict};

/// Mutable state of one run: simulated time, the clock, and edge counts.
///
/// Owned by the caller of [`Testbench::step`], so independent runs never
/// share counters.
#[derive(Debug, Clone, Default)]
pub struct LoopState {
    /// Simulated time; only ever incremented.
    pub sim_time: u64,
    /// Rising clock edges observed so far.
    pub posedges: u64,
    clock: ClockDriver,
    /// Counters reported after the run.
    pub stats: RunStats,
}

impl LoopState {
    /// Fresh state at time zero with the clock low.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock level.
    pub const fn clock(&self) -> bool {
        self.clock.level()
    }
}

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Simulated time at termination (equals the configured bound).
    pub sim_time: u64,
    /// Rising clock edges over the whole run.
    pub posedges: u64,
    /// Outputs sampled once, after the last step.
    pub trap: TrapRecord,
    /// Run statistics.
    pub stats: RunStats,
}

impl RunOutcome {
    /// Classifies the sampled outputs.
    pub const fn verdict(&self) -> Verdict {
        self.trap.classify()
    }
}

/// Bounded reset/clock/evaluate loop over a validated configuration.
#[derive(Debug, Clone)]
pub struct Testbench {
    config: TestbenchConfig,
    reset: ResetSequencer,
}

impl Testbench {
    /// Creates a testbench.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfiguration`] if `max_sim_time` or the
    /// reset window is zero.
    pub fn new(config: TestbenchConfig) -> Result<Self, HarnessError> {
        config.validate()?;
        let reset = ResetSequencer::from(config.reset);
        Ok(Self { config, reset })
    }

    /// The configuration this testbench was built from.
    pub const fn config(&self) -> &TestbenchConfig {
        &self.config
    }

    /// The reset policy applied each step.
    pub const fn reset(&self) -> &ResetSequencer {
        &self.reset
    }

    /// Runs the model for the configured number of steps and samples its outputs.
    pub fn run<M: SimulationModel>(&self, model: &mut M) -> RunOutcome {
        self.run_with_probe(model, &mut NullProbe)
    }

    /// Like [`Testbench::run`], calling `probe` after every evaluation.
    pub fn run_with_probe<M, P>(&self, model: &mut M, probe: &mut P) -> RunOutcome
    where
        M: SimulationModel,
        P: Probe + ?Sized,
    {
        let max_sim_time = self.config.max_sim_time;
        tracing::info!(
            max_sim_time,
            reset_window = self.reset.window(),
            polarity = ?self.reset.polarity(),
            clock = %self.config.signals.clock,
            reset = %self.config.signals.reset,
            "testbench run started"
        );

        let mut state = LoopState::new();
        while state.sim_time < max_sim_time {
            let _ = self.step(&mut state, model, probe);
        }
        state.stats.finish();

        let trap = model.trap_record();
        tracing::info!(
            sim_time = state.sim_time,
            posedges = state.posedges,
            %trap,
            verdict = %trap.classify(),
            "testbench run finished"
        );

        RunOutcome {
            sim_time: state.sim_time,
            posedges: state.posedges,
            trap,
            stats: state.stats,
        }
    }

    /// Advances `state` by one time unit.
    ///
    /// Applies reset, then the toggled clock, then evaluates the model, so
    /// inputs are settled before evaluation. Does not check the time bound.
    pub fn step<M, P>(&self, state: &mut LoopState, model: &mut M, probe: &mut P) -> StepInfo
    where
        M: SimulationModel,
        P: Probe + ?Sized,
    {
        let time = state.sim_time;

        let reset_asserted = self.reset.is_asserted(time);
        let reset_level = self.reset.polarity().level(reset_asserted);
        model.set_reset(reset_level);
        if time == self.reset.window() {
            tracing::debug!(time, signal = %self.config.signals.reset, "reset released");
        }

        let (clock, rising_edge) = state.clock.step();
        model.set_clock(clock);

        model.eval();

        if rising_edge {
            state.posedges += 1;
            if !reset_asserted {
                state.stats.active_posedges += 1;
            }
        }
        if reset_asserted {
            state.stats.reset_steps += 1;
        }

        let info = StepInfo {
            time,
            clock,
            reset_level,
            reset_asserted,
            rising_edge,
        };
        if self.config.trace_steps {
            tracing::trace!(time, clock, reset = reset_level, "step");
        }
        probe.on_step(&info, &*model);

        state.sim_time += 1;
        state.stats.sim_time = state.sim_time;
        state.stats.posedges = state.posedges;
        info
    }
}
