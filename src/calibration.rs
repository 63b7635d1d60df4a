//! One-shot throughput calibration for runs too fast to time.
//!
//! Wall-clock resolution cannot resolve sub-millisecond solves, so the
//! first timed run pays for a reference-size computation and derives a
//! moves-per-second rate. Later runs whose measured time falls below the
//! reliable-clock threshold report `move_count / rate` instead of a
//! meaningless near-zero reading.

use std::time::Instant;

use crate::solver::{self, Algorithm};

/// Reference disk count for single runs and the standard suite.
pub const SINGLE_RUN_REFERENCE_DISKS: u32 = 25;

/// Smaller reference used by batch sweeps.
pub const BATCH_REFERENCE_DISKS: u32 = 20;

/// Measured times below this are replaced with estimates.
pub const RELIABLE_CLOCK_SECS: f64 = 0.001;

/// Below this the calibration measurement itself is unreliable.
const MIN_MEASURABLE_SECS: f64 = 0.0001;

/// Rate assumed when even the reference run is too fast to time.
const FALLBACK_MOVES_PER_SEC: f64 = 1e9;

/// Holds the process-lifetime throughput value.
///
/// One-way state machine: uncalibrated until the first
/// [`ensure_calibrated`](Self::ensure_calibrated) call, calibrated
/// forever after. The first calibration wins; the value is never
/// recomputed. Threaded explicitly through the runner rather than living
/// in a global, which also makes it injectable for tests.
#[derive(Debug, Clone, Default)]
pub struct CalibrationContext {
    moves_per_second: Option<f64>,
}

impl CalibrationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context pre-seeded with a known rate; skips the reference run.
    pub fn with_throughput(moves_per_second: f64) -> Self {
        Self {
            moves_per_second: Some(moves_per_second),
        }
    }

    pub fn is_calibrated(&self) -> bool {
        self.moves_per_second.is_some()
    }

    /// The calibrated rate in moves per second, if set.
    pub fn throughput(&self) -> Option<f64> {
        self.moves_per_second
    }

    /// Calibrate on first need and return the rate.
    ///
    /// Runs `algorithm` at `reference_disks`, times it, and derives
    /// moves/second. A reference run too fast to measure falls back to
    /// [`FALLBACK_MOVES_PER_SEC`] rather than dividing by near-zero.
    pub fn ensure_calibrated(&mut self, algorithm: Algorithm, reference_disks: u32) -> f64 {
        if let Some(rate) = self.moves_per_second {
            return rate;
        }

        let start = Instant::now();
        let outcome = solver::solve(algorithm, reference_disks);
        let elapsed = start.elapsed().as_secs_f64();

        let rate = if elapsed > MIN_MEASURABLE_SECS {
            outcome.move_count as f64 / elapsed
        } else {
            FALLBACK_MOVES_PER_SEC
        };
        self.moves_per_second = Some(rate);
        rate
    }

    /// Estimated elapsed seconds for a run of `move_count` moves, if
    /// calibrated.
    pub fn estimate_seconds(&self, move_count: u64) -> Option<f64> {
        self.moves_per_second.map(|rate| move_count as f64 / rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_uncalibrated() {
        let ctx = CalibrationContext::new();
        assert!(!ctx.is_calibrated());
        assert_eq!(ctx.throughput(), None);
        assert_eq!(ctx.estimate_seconds(100), None);
    }

    #[test]
    fn test_first_calibration_wins() {
        let mut ctx = CalibrationContext::new();
        // Small reference so the test pays almost nothing.
        let first = ctx.ensure_calibrated(Algorithm::Iterative, 10);
        assert!(ctx.is_calibrated());
        assert!(first > 0.0);

        // A second call, even for the other family and another size,
        // must return the stored value unchanged.
        let second = ctx.ensure_calibrated(Algorithm::Recursive, 12);
        assert_eq!(first, second);
        assert_eq!(ctx.throughput(), Some(first));
    }

    #[test]
    fn test_injected_rate_is_kept() {
        let mut ctx = CalibrationContext::with_throughput(1e6);
        assert!(ctx.is_calibrated());
        let rate = ctx.ensure_calibrated(Algorithm::Iterative, 10);
        assert_eq!(rate, 1e6);
        assert_eq!(ctx.throughput(), Some(1e6));
    }

    #[test]
    fn test_estimate_seconds() {
        let ctx = CalibrationContext::with_throughput(1e6);
        let estimate = ctx.estimate_seconds(31).unwrap();
        assert!((estimate - 31.0 / 1e6).abs() < 1e-12);
    }
}
