//! Tower of Hanoi move-generation and timing engine.
//!
//! This crate provides two move engines, a recursive divide-and-conquer
//! counter and an iterative three-peg simulation, plus a calibrated
//! timing harness that reports move throughput even when solves finish
//! below the wall clock's useful resolution.

pub mod calibration;
pub mod peg;
pub mod runner;
pub mod solver;

// Re-export main types
pub use calibration::{
    CalibrationContext, BATCH_REFERENCE_DISKS, RELIABLE_CLOCK_SECS, SINGLE_RUN_REFERENCE_DISKS,
};
pub use peg::Peg;
pub use runner::{
    run_batch, run_single, run_standard_suite, RunError, RunResult, STANDARD_SUITE,
};
pub use solver::{
    expected_moves, solve, solve_iterative, solve_recursive, Algorithm, ExpectedMoves,
    SolveOutcome, MAX_DISKS,
};
