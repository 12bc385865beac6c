use mockall::mock;
use rvtb_core::SimulationModel;

mock! {
    pub Model {}
    impl SimulationModel for Model {
        fn set_clock(&mut self, level: bool);
        fn set_reset(&mut self, level: bool);
        fn eval(&mut self);
        fn result_code(&self) -> i8;
        fn cause_code(&self) -> i8;
    }
}

/// Input levels seen by one `eval` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub clock: bool,
    pub reset: bool,
}

/// Fake model that records the inputs present at every evaluation.
#[derive(Debug, Default)]
pub struct RecordingModel {
    clock: bool,
    reset: bool,
    pub evaluations: Vec<Evaluation>,
    pub outputs: (i8, i8),
}

impl RecordingModel {
    pub fn with_outputs(result_code: i8, cause_code: i8) -> Self {
        Self {
            outputs: (result_code, cause_code),
            ..Self::default()
        }
    }

    /// Number of evaluations where reset was at `level`.
    pub fn reset_count(&self, level: bool) -> usize {
        self.evaluations.iter().filter(|e| e.reset == level).count()
    }
}

impl SimulationModel for RecordingModel {
    fn set_clock(&mut self, level: bool) {
        self.clock = level;
    }

    fn set_reset(&mut self, level: bool) {
        self.reset = level;
    }

    fn eval(&mut self) {
        self.evaluations.push(Evaluation {
            clock: self.clock,
            reset: self.reset,
        });
    }

    fn result_code(&self) -> i8 {
        self.outputs.0
    }

    fn cause_code(&self) -> i8 {
        self.outputs.1
    }
}

/// Fake model that logs every call in order.
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<&'static str>,
}

impl SimulationModel for EventLog {
    fn set_clock(&mut self, level: bool) {
        self.events.push(if level { "clock=1" } else { "clock=0" });
    }

    fn set_reset(&mut self, level: bool) {
        self.events.push(if level { "reset=1" } else { "reset=0" });
    }

    fn eval(&mut self) {
        self.events.push("eval");
    }

    fn result_code(&self) -> i8 {
        0
    }

    fn cause_code(&self) -> i8 {
        0
    }
}
