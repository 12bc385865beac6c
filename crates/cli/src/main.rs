//! Testbench command-line driver.
//!
//! This binary is a thin shell over `rvtb-core`. It provides:
//! 1. **Run:** Drive the scripted core through reset and clocking, then print the verdict.
//! 2. **Classify:** Map a result register value and trap cause to a verdict label.
//! 3. **Suite:** Run named cases from a JSON manifest and write a `result.txt`-style report.
//!
//! Exit status is 0 when every verdict is PASS, 1 otherwise, and 2 for
//! configuration or I/O errors.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rvtb_core::config::{ResetPolarity, TestbenchConfig};
use rvtb_core::models::{ScriptedCore, ScriptedProgram};
use rvtb_core::sim::{SuiteCase, SuiteManifest, Testbench, run_suite};
use rvtb_core::stats::RunStats;
use rvtb_core::tb::TraceProbe;
use rvtb_core::{HarnessError, classify};

#[derive(Parser, Debug)]
#[command(
    name = "rvtb",
    author,
    version,
    about = "Cycle-driven RISC-V core testbench",
    long_about = "Drive a core model through reset and clocking for a fixed number of steps, then classify its final trap.\n\nExamples:\n  rvtb run --cause 11 --result 0\n  rvtb run --config tb.json --active-low --stats\n  rvtb run --stats-sections reset\n  rvtb classify --result 1 --cause 3\n  rvtb suite tests.json --group rv-tests --out result.txt"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Testbench settings shared by `run` and `suite`.
#[derive(Args, Debug)]
struct BenchArgs {
    /// JSON testbench configuration; flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of simulated time units to run.
    #[arg(long)]
    max_sim_time: Option<u64>,

    /// Number of time units reset is held from time zero.
    #[arg(long)]
    reset_window: Option<u64>,

    /// Drive reset low while asserted.
    #[arg(long)]
    active_low: bool,

    /// Log every simulated step at trace level.
    #[arg(long)]
    trace_steps: bool,
}

impl BenchArgs {
    fn testbench(&self) -> Result<Testbench, HarnessError> {
        let mut config = match &self.config {
            Some(path) => TestbenchConfig::from_file(path)?,
            None => TestbenchConfig::default(),
        };
        if let Some(t) = self.max_sim_time {
            config.max_sim_time = t;
        }
        if let Some(w) = self.reset_window {
            config.reset.window = w;
        }
        if self.active_low {
            config.reset.polarity = ResetPolarity::ActiveLow;
        }
        config.trace_steps |= self.trace_steps;
        Testbench::new(config)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the scripted core once and print its verdict.
    Run {
        #[command(flatten)]
        bench: BenchArgs,

        /// Result register value the core leaves behind.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        result: i8,

        /// Trap cause the core ends with.
        #[arg(long, default_value_t = 11, allow_negative_numbers = true)]
        cause: i8,

        /// Cycles after reset release before the core traps.
        #[arg(long, default_value_t = 1000)]
        latency: u64,

        /// Log rising edges and output changes while running.
        #[arg(long)]
        probe: bool,

        /// Print run statistics.
        #[arg(long)]
        stats: bool,

        /// Print only these statistics sections (summary, reset); implies --stats.
        #[arg(long, value_delimiter = ',')]
        stats_sections: Vec<String>,
    },

    /// Print the verdict label for a result register value and trap cause.
    Classify {
        /// Result register value (a0).
        #[arg(long, allow_negative_numbers = true)]
        result: i8,

        /// Trap cause (mcause).
        #[arg(long, allow_negative_numbers = true)]
        cause: i8,
    },

    /// Run cases from a JSON suite manifest.
    Suite {
        /// Manifest path.
        manifest: PathBuf,

        #[command(flatten)]
        bench: BenchArgs,

        /// Run only the cases in this group (am, rv-arch-test, rv-tests, ...).
        #[arg(short, long, conflicts_with = "single")]
        group: Option<String>,

        /// Run a single case by name.
        #[arg(short, long)]
        single: Option<String>,

        /// List case names and exit.
        #[arg(short, long)]
        list: bool,

        /// Report file.
        #[arg(short, long, default_value = "result.txt")]
        out: PathBuf,

        /// Append to the report instead of replacing it.
        #[arg(long)]
        append: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = execute(cli.command);
    if let Err(e) = &result {
        eprintln!("[!] {e}");
    }
    ExitCode::from(exit_status(&result))
}

/// Runs one subcommand; `Ok(true)` means every verdict was PASS.
fn execute(command: Commands) -> Result<bool, HarnessError> {
    match command {
        Commands::Run {
            bench,
            result,
            cause,
            latency,
            probe,
            stats,
            stats_sections,
        } => {
            RunStats::check_sections(&stats_sections)?;
            let stats = (stats || !stats_sections.is_empty()).then_some(stats_sections);
            cmd_run(&bench, ScriptedProgram::new(result, cause, latency), probe, stats.as_deref())
        }
        Commands::Classify { result, cause } => {
            let verdict = classify(result, cause);
            println!("{verdict}");
            Ok(verdict.is_pass())
        }
        Commands::Suite {
            manifest,
            bench,
            group,
            single,
            list,
            out,
            append,
        } => cmd_suite(&manifest, &bench, group.as_deref(), single.as_deref(), list, &out, append),
    }
}

/// Process exit status: 0 when all passed, 1 on any other verdict, 2 on error.
const fn exit_status(result: &Result<bool, HarnessError>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs the scripted core once; returns whether it passed.
fn cmd_run(
    bench: &BenchArgs,
    program: ScriptedProgram,
    probe: bool,
    stats: Option<&[String]>,
) -> Result<bool, HarnessError> {
    let testbench = bench.testbench()?;
    let mut core = ScriptedCore::new(program, testbench.config().reset.polarity);

    let outcome = if probe {
        testbench.run_with_probe(&mut core, &mut TraceProbe::new())
    } else {
        testbench.run(&mut core)
    };

    let verdict = outcome.verdict();
    println!("{verdict}");
    if let Some(sections) = stats {
        println!("[*] {}  posedges={}", outcome.trap, outcome.posedges);
        outcome.stats.print_sections(sections);
    }
    Ok(verdict.is_pass())
}

/// Runs the selected manifest cases and writes the report; returns whether all passed.
fn cmd_suite(
    manifest_path: &Path,
    bench: &BenchArgs,
    group: Option<&str>,
    single: Option<&str>,
    list: bool,
    out: &Path,
    append: bool,
) -> Result<bool, HarnessError> {
    let manifest = SuiteManifest::from_file(manifest_path)?;
    if list {
        for name in manifest.names() {
            println!("{name}");
        }
        return Ok(true);
    }

    let selected: Vec<&SuiteCase> = match (group, single) {
        (Some(g), _) => manifest.group(g),
        (None, Some(name)) => match manifest.get(name) {
            Some(case) => vec![case],
            None => {
                return Err(HarnessError::invalid(
                    "single",
                    format!("no test named '{name}' in {}", manifest_path.display()),
                ));
            }
        },
        (None, None) => manifest.cases.iter().collect(),
    };
    if selected.is_empty() {
        eprintln!("[!] No test cases selected");
        return Ok(false);
    }

    let testbench = bench.testbench()?;
    let report = run_suite(&testbench, selected);
    if append {
        report.append_to(out)?;
    } else {
        report.write_to(out)?;
    }

    print!("{report}");
    println!("[*] {}", report.summary());
    Ok(report.all_passed())
}
