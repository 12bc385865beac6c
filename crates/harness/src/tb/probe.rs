//! Per-step observers.
//!
//! A probe sees every step after the model has been evaluated. Probes only
//! observe: they get shared access to the model and cannot stop the run.

use crate::tb::SimulationModel;
use crate::verdict::{TrapRecord, Verdict};

/// What the testbench drove during one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    /// Simulated time of this step (before the increment).
    pub time: u64,
    /// Clock level applied this step.
    pub clock: bool,
    /// Reset level applied this step.
    pub reset_level: bool,
    /// Whether reset was in effect this step.
    pub reset_asserted: bool,
    /// Whether this step produced a rising clock edge.
    pub rising_edge: bool,
}

/// Observer called once per simulated step.
pub trait Probe {
    /// Called after the model has been evaluated for `step`.
    fn on_step(&mut self, step: &StepInfo, model: &dyn SimulationModel);
}

/// Probe that does nothing; used by `Testbench::run`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProbe;

impl Probe for NullProbe {
    #[inline]
    fn on_step(&mut self, _step: &StepInfo, _model: &dyn SimulationModel) {}
}

/// Logs rising edges at `trace` level and output changes at `debug` level.
#[derive(Debug, Default)]
pub struct TraceProbe {
    last: Option<TrapRecord>,
}

impl TraceProbe {
    /// Creates a probe with no outputs observed yet.
    pub const fn new() -> Self {
        Self { last: None }
    }
}

impl Probe for TraceProbe {
    fn on_step(&mut self, step: &StepInfo, model: &dyn SimulationModel) {
        let trap = model.trap_record();
        if step.rising_edge {
            tracing::trace!(
                time = step.time,
                reset = step.reset_asserted,
                a0 = trap.result_code,
                mcause = trap.cause_code,
                "posedge"
            );
        }
        if self.last != Some(trap) {
            tracing::debug!(time = step.time, %trap, verdict = %trap.classify(), "outputs changed");
            self.last = Some(trap);
        }
    }
}

/// A verdict taken mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerdictSample {
    /// Simulated time of the sampled step.
    pub time: u64,
    /// Outputs at that step.
    pub trap: TrapRecord,
    /// Classification of `trap`.
    pub verdict: Verdict,
}

/// Classifies the model's outputs every `period` rising edges.
#[derive(Debug, Clone)]
pub struct VerdictSampler {
    period: u64,
    edges: u64,
    samples: Vec<VerdictSample>,
}

impl VerdictSampler {
    /// Creates a sampler; a `period` of zero is treated as one.
    pub fn new(period: u64) -> Self {
        Self {
            period: period.max(1),
            edges: 0,
            samples: Vec::new(),
        }
    }

    /// Samples collected so far, in time order.
    pub fn samples(&self) -> &[VerdictSample] {
        &self.samples
    }

    /// Time of the first sample that classified as `verdict`, if any.
    pub fn first(&self, verdict: Verdict) -> Option<u64> {
        self.samples
            .iter()
            .find(|s| s.verdict == verdict)
            .map(|s| s.time)
    }
}

impl Probe for VerdictSampler {
    fn on_step(&mut self, step: &StepInfo, model: &dyn SimulationModel) {
        if !step.rising_edge {
            return;
        }
        self.edges += 1;
        if self.edges % self.period == 0 {
            let trap = model.trap_record();
            self.samples.push(VerdictSample {
                time: step.time,
                trap,
                verdict: trap.classify(),
            });
        }
    }
}
