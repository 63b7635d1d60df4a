//! Experiment runner: timed single runs, standard suites, batch sweeps.
//!
//! Every mode times a solve with the wall clock, substitutes a
//! calibration-derived estimate when the measurement is unreliably
//! small, and checks the counted moves against the `2^n - 1` oracle.
//! Anomalies surface as fields on [`RunResult`], never as panics; the
//! only errors are out-of-range disk counts rejected up front.

use std::time::Instant;

use serde::Serialize;
use thiserror::Error;

use crate::calibration::{
    CalibrationContext, BATCH_REFERENCE_DISKS, RELIABLE_CLOCK_SECS, SINGLE_RUN_REFERENCE_DISKS,
};
use crate::solver::{self, expected_moves, Algorithm, MAX_DISKS};

/// Disk counts for the standard suite, in run order.
pub const STANDARD_SUITE: [u32; 4] = [5, 10, 15, 20];

/// Rejected disk counts. Everything else is reported on the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunError {
    #[error("disk count must be at least 1")]
    InvalidDiskCount,
    #[error("disk count {0} exceeds the supported maximum of {max}", max = MAX_DISKS)]
    DiskCountExceeded(u32),
}

/// Outcome of one timed run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunResult {
    pub disks: u32,
    pub algorithm: Algorithm,
    /// Moves actually performed by the engine.
    pub move_count: u64,
    /// Wall-clock seconds, or the calibration estimate when `estimated`.
    pub elapsed_seconds: f64,
    pub moves_per_second: f64,
    /// True when `elapsed_seconds` came from the calibrated rate rather
    /// than a direct measurement.
    pub estimated: bool,
    /// Counted moves matched the `2^n - 1` oracle.
    pub correct: bool,
}

fn validate_disks(disks: u32) -> Result<(), RunError> {
    if disks == 0 {
        return Err(RunError::InvalidDiskCount);
    }
    if disks > MAX_DISKS {
        return Err(RunError::DiskCountExceeded(disks));
    }
    Ok(())
}

/// Run one (algorithm, disk count) experiment.
///
/// Calibrates with the 25-disk reference on first need; an already
/// calibrated context (from an earlier run or an injected rate) is
/// reused as-is.
pub fn run_single(
    ctx: &mut CalibrationContext,
    algorithm: Algorithm,
    disks: u32,
) -> Result<RunResult, RunError> {
    validate_disks(disks)?;
    ctx.ensure_calibrated(algorithm, SINGLE_RUN_REFERENCE_DISKS);
    Ok(timed_run(ctx, algorithm, disks))
}

/// Run the fixed 5/10/15/20 disk suite in order.
pub fn run_standard_suite(
    ctx: &mut CalibrationContext,
    algorithm: Algorithm,
) -> Result<Vec<RunResult>, RunError> {
    STANDARD_SUITE
        .iter()
        .map(|&disks| run_single(ctx, algorithm, disks))
        .collect()
}

/// Sweep disk counts 1..=`max_disks`, one result row per count.
///
/// Uses the smaller 20-disk calibration reference; the substitution rule
/// for unmeasurable rows is identical to the single-run path.
pub fn run_batch(
    ctx: &mut CalibrationContext,
    algorithm: Algorithm,
    max_disks: u32,
) -> Result<Vec<RunResult>, RunError> {
    validate_disks(max_disks)?;
    ctx.ensure_calibrated(algorithm, BATCH_REFERENCE_DISKS);
    Ok((1..=max_disks)
        .map(|disks| timed_run(ctx, algorithm, disks))
        .collect())
}

/// Time one solve and fold in the estimate substitution. The context is
/// already calibrated by the callers above.
fn timed_run(ctx: &CalibrationContext, algorithm: Algorithm, disks: u32) -> RunResult {
    let start = Instant::now();
    let outcome = solver::solve(algorithm, disks);
    let mut elapsed_seconds = start.elapsed().as_secs_f64();

    let mut estimated = false;
    if elapsed_seconds < RELIABLE_CLOCK_SECS {
        if let Some(estimate) = ctx.estimate_seconds(outcome.move_count) {
            elapsed_seconds = estimate;
            estimated = true;
        }
    }

    let moves_per_second = if elapsed_seconds > 0.0 {
        outcome.move_count as f64 / elapsed_seconds
    } else {
        0.0
    };
    let correct = expected_moves(disks).matches(outcome.move_count);

    RunResult {
        disks,
        algorithm,
        move_count: outcome.move_count,
        elapsed_seconds,
        moves_per_second,
        estimated,
        correct,
    }
}
