//! CLI entry point for the Hanoi timing harness.
//!
//! Usage:
//!   hanoi-bench single --algorithm <recursive|iterative> --disks <n>
//!   hanoi-bench suite --algorithm <recursive|iterative>
//!   hanoi-bench batch --algorithm <recursive|iterative> --max-disks <n>
//!
//! Options:
//!   --force    Allow runs above 30 disks (exponential runtime)
//!
//! Results are printed as pretty JSON, one object per timed run. The
//! process exits non-zero when any run's move count disagrees with the
//! 2^n - 1 oracle.

mod calibration;
mod peg;
mod runner;
mod solver;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use calibration::CalibrationContext;
use runner::{run_batch, run_single, run_standard_suite, RunResult};
use solver::Algorithm;

/// Runs above this many disks need --force; move counts grow as 2^n.
const LONG_RUN_WARNING_DISKS: u32 = 30;

#[derive(Parser)]
#[command(name = "hanoi-bench")]
#[command(about = "Timed recursive and iterative Tower of Hanoi solvers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Recursive,
    Iterative,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Recursive => Algorithm::Recursive,
            AlgorithmArg::Iterative => Algorithm::Iterative,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Time a single solve for a chosen disk count
    Single {
        /// Move engine to run
        #[arg(long, value_enum)]
        algorithm: AlgorithmArg,

        /// Number of disks (at least 1)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        disks: u32,

        /// Allow disk counts above 30
        #[arg(long)]
        force: bool,
    },

    /// Run the standard 5/10/15/20 disk suite
    Suite {
        /// Move engine to run
        #[arg(long, value_enum)]
        algorithm: AlgorithmArg,
    },

    /// Sweep disk counts 1..=max, one result row per count
    Batch {
        /// Move engine to run
        #[arg(long, value_enum)]
        algorithm: AlgorithmArg,

        /// Largest disk count in the sweep (at least 1)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        max_disks: u32,

        /// Allow disk counts above 30
        #[arg(long)]
        force: bool,
    },
}

/// Output format for one timed run
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RunOutput {
    disks: u32,
    algorithm: String,
    move_count: u64,
    elapsed_seconds: f64,
    moves_per_second: f64,
    estimated: bool,
    correct: bool,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Single {
            algorithm,
            disks,
            force,
        } => {
            check_long_run(disks, force);
            let mut ctx = CalibrationContext::new();
            let result = match run_single(&mut ctx, algorithm.into(), disks) {
                Ok(result) => result,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            let output = format_result(&result);
            println!("{}", serde_json::to_string_pretty(&output).unwrap());

            if !result.correct {
                std::process::exit(1);
            }
        }

        Commands::Suite { algorithm } => {
            let mut ctx = CalibrationContext::new();
            let results = match run_standard_suite(&mut ctx, algorithm.into()) {
                Ok(results) => results,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };
            print_results(&results);
        }

        Commands::Batch {
            algorithm,
            max_disks,
            force,
        } => {
            check_long_run(max_disks, force);
            let mut ctx = CalibrationContext::new();
            let results = match run_batch(&mut ctx, algorithm.into(), max_disks) {
                Ok(results) => results,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };
            print_results(&results);
        }
    }
}

/// Refuse exponential-length runs unless explicitly forced.
fn check_long_run(disks: u32, force: bool) {
    if disks > LONG_RUN_WARNING_DISKS && !force {
        eprintln!(
            "Warning: {} disks will take a very long time; pass --force to proceed",
            disks
        );
        std::process::exit(1);
    }
}

fn print_results(results: &[RunResult]) {
    let output: Vec<RunOutput> = results.iter().map(format_result).collect();
    println!("{}", serde_json::to_string_pretty(&output).unwrap());

    if results.iter().any(|r| !r.correct) {
        std::process::exit(1);
    }
}

fn format_result(result: &RunResult) -> RunOutput {
    RunOutput {
        disks: result.disks,
        algorithm: result.algorithm.to_string(),
        move_count: result.move_count,
        elapsed_seconds: result.elapsed_seconds,
        moves_per_second: result.moves_per_second,
        estimated: result.estimated,
        correct: result.correct,
    }
}
