//! Named test suites and result reports.
//!
//! A suite manifest lists test cases by name, each tagged with a group
//! (`am`, `rv-arch-test`, `rv-tests`, ...) and the scripted program the
//! stand-in core runs. The runner executes each case on a fresh model with
//! the same testbench and collects one verdict per case. Reports are written
//! as one `name: LABEL` line per case.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde::Deserialize;

use crate::common::HarnessError;
use crate::models::{ScriptedCore, ScriptedProgram};
use crate::sim::Testbench;
use crate::verdict::{TrapRecord, Verdict};

/// One named test case.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuiteCase {
    /// Test name, as printed in the report.
    pub name: String,

    /// Group the case belongs to, if any.
    #[serde(default)]
    pub group: Option<String>,

    /// Behavior of the stand-in core for this case.
    #[serde(default)]
    pub program: ScriptedProgram,
}

/// A list of test cases loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SuiteManifest {
    /// Cases in manifest order.
    #[serde(default)]
    pub cases: Vec<SuiteCase>,
}

impl SuiteManifest {
    /// Parses a manifest from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::ConfigParse`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, HarnessError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Io`] if the file cannot be read, or
    /// [`HarnessError::ConfigParse`] if its contents are malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| HarnessError::io(path, e))?;
        Self::from_json(&text)
    }

    /// Case names in manifest order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(|c| c.name.as_str())
    }

    /// Looks up a case by name.
    pub fn get(&self, name: &str) -> Option<&SuiteCase> {
        self.cases.iter().find(|c| c.name == name)
    }

    /// Cases tagged with `group`.
    ///
    /// An unknown group selects nothing and logs a warning.
    pub fn group(&self, group: &str) -> Vec<&SuiteCase> {
        let selected: Vec<&SuiteCase> = self
            .cases
            .iter()
            .filter(|c| c.group.as_deref() == Some(group))
            .collect();
        if selected.is_empty() {
            tracing::warn!(group, "Unrecognized test group");
        }
        selected
    }
}

/// Outcome of one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseResult {
    /// Test name.
    pub name: String,
    /// Outputs sampled at the end of the run.
    pub trap: TrapRecord,
    /// Classification of `trap`.
    pub verdict: Verdict,
    /// Rising edges over the run.
    pub posedges: u64,
}

/// Runs each case on a fresh scripted core and collects the verdicts.
pub fn run_suite<'a, I>(testbench: &Testbench, cases: I) -> SuiteReport
where
    I: IntoIterator<Item = &'a SuiteCase>,
{
    let polarity = testbench.config().reset.polarity;
    let results = cases
        .into_iter()
        .map(|case| {
            let mut core = ScriptedCore::new(case.program, polarity);
            let outcome = testbench.run(&mut core);
            let verdict = outcome.verdict();
            tracing::info!(name = %case.name, %verdict, "case finished");
            CaseResult {
                name: case.name.clone(),
                trap: outcome.trap,
                verdict,
                posedges: outcome.posedges,
            }
        })
        .collect();
    SuiteReport { results }
}

/// Verdicts for a batch of cases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteReport {
    /// Per-case results in run order.
    pub results: Vec<CaseResult>,
}

/// Pass/fail counts for a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuiteSummary {
    /// Number of cases run.
    pub total: usize,
    /// Cases with a [`Verdict::Pass`].
    pub passed: usize,
}

impl SuiteSummary {
    /// Cases that did not pass.
    pub const fn failed(&self) -> usize {
        self.total - self.passed
    }
}

impl fmt::Display for SuiteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tests, {} passed, {} failed",
            self.total,
            self.passed,
            self.failed()
        )
    }
}

impl SuiteReport {
    /// Counts passes and failures.
    pub fn summary(&self) -> SuiteSummary {
        SuiteSummary {
            total: self.results.len(),
            passed: self.results.iter().filter(|r| r.verdict.is_pass()).count(),
        }
    }

    /// `true` when every case passed (vacuously true for an empty report).
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.verdict.is_pass())
    }

    /// Writes the report to `path`, replacing its contents.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Io`] if the file cannot be written.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), HarnessError> {
        let path = path.as_ref();
        fs::write(path, self.to_string()).map_err(|e| HarnessError::io(path, e))
    }

    /// Appends the report to `path`, creating the file if needed.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Io`] if the file cannot be opened or written.
    pub fn append_to(&self, path: impl AsRef<Path>) -> Result<(), HarnessError> {
        let path = path.as_ref();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| HarnessError::io(path, e))?;
        file.write_all(self.to_string().as_bytes())
            .map_err(|e| HarnessError::io(path, e))
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.results {
            writeln!(f, "{}: {}", result.name, result.verdict)?;
        }
        Ok(())
    }
}
