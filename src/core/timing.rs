//! # Micro-benchmarking
//!
//! Times a callable across repeated invocations and aggregates the samples.
//! Each call is measured on its own with the monotonic clock, so the
//! loop bookkeeping is not part of the recorded time. Optional warmup calls run
//! first and are discarded.
//!
//! ```no_run
//! use cutils::core::numeric::get_factors;
//! use cutils::core::timing::{time_func, TimingOptions};
//!
//! let stats = time_func(|| get_factors(500_000), &TimingOptions::new(100).warmups(3))?;
//! println!("{:.6}", stats.avg);
//! # Ok::<(), cutils::utils::error::Error>(())
//! ```

use std::hint::black_box;
use std::time::Instant;

use super::text::{display_time, format_thousands};
use super::types::TimingStats;
use crate::utils::error::{Error, Result};

/// Averages below this many seconds are reported in microseconds.
const MICROSECOND_DISPLAY_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingOptions {
    /// Number of timed calls.
    pub iterations: usize,
    /// Number of untimed calls made before measuring.
    pub warmups: usize,
    /// Suppress the printed summary.
    pub quiet: bool,
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self {
            iterations: 1,
            warmups: 0,
            quiet: false,
        }
    }
}

impl TimingOptions {
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    pub fn warmups(mut self, warmups: usize) -> Self {
        self.warmups = warmups;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

/// Runs `func` `options.iterations` times and returns the aggregated timings.
///
/// Unless `options.quiet` is set, a one-line summary is printed to stdout
/// and logged at info level.
///
/// # Errors
///
/// Returns an `Error` if `options.iterations` is zero.
pub fn time_func<F, R>(mut func: F, options: &TimingOptions) -> Result<TimingStats>
where
    F: FnMut() -> R,
{
    if options.iterations == 0 {
        return Err(Error::new("iterations must be a positive integer"));
    }

    debug!(
        "timing {} iterations after {} warmups",
        options.iterations, options.warmups
    );

    for _ in 0..options.warmups {
        black_box(func());
    }

    let times: Vec<f64> = (0..options.iterations)
        .map(|_| time_once(&mut func))
        .collect();

    let stats = TimingStats::from_samples(times)?;

    if !options.quiet {
        let summary = stats.summary();
        info!("{}", summary);
        println!("{}", summary);
    }

    Ok(stats)
}

fn time_once<F, R>(func: &mut F) -> f64
where
    F: FnMut() -> R,
{
    let start = Instant::now();
    black_box(func());
    start.elapsed().as_secs_f64()
}

impl TimingStats {
    /// Aggregates raw per-call durations (seconds).
    ///
    /// The standard deviation is the sample one (n - 1 denominator) and is
    /// `0.0` when only one sample exists.
    pub fn from_samples(raw_times: Vec<f64>) -> Result<Self> {
        if raw_times.is_empty() {
            return Err(Error::new("cannot aggregate an empty set of timings"));
        }

        let n = raw_times.len() as f64;
        let total: f64 = raw_times.iter().sum();
        let avg = total / n;
        let min = raw_times.iter().copied().fold(f64::INFINITY, f64::min);
        let max = raw_times.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let sd = if raw_times.len() > 1 {
            let variance = raw_times.iter().map(|t| (t - avg).powi(2)).sum::<f64>() / (n - 1.0);
            variance.sqrt()
        } else {
            0.0
        };

        Ok(TimingStats {
            avg,
            min,
            max,
            sd,
            total,
            raw_times,
        })
    }

    pub fn iterations(&self) -> usize {
        self.raw_times.len()
    }

    /// The average as `"<x> microseconds"` or `"<x> seconds"`.
    pub fn avg_display(&self) -> String {
        if self.avg < MICROSECOND_DISPLAY_THRESHOLD {
            format!("{:.3} microseconds", self.avg * 1_000_000.0)
        } else {
            format!("{:.2} seconds", self.avg)
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Function ran {} times and completed in {} for an average time of {}",
            format_thousands(self.iterations()),
            display_time(self.total),
            self.avg_display()
        )
    }
}
