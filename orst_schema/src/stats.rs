use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Timing and operation-count bookkeeping for a single algorithm run.
///
/// Timestamps are milliseconds, fractional as handed out by the browser's `performance.now()`.
/// A run that has an `end_time` always has a `start_time` no later than it;
/// [`RunStatistics::finish`] refuses to break that, and [`Validate`](crate::Validate) reports
/// values that were assembled by hand and do.
///
/// # Usage
///```
/// use orst_schema::RunStatistics;
///
/// let mut stats = RunStatistics::new();
/// stats.start(1_000.5);
/// stats.record_comparison();
/// stats.record_swap();
/// stats.finish(1_250.75).unwrap();
///
/// assert_eq!(stats.elapsed_ms(), Some(250.25));
/// assert_eq!((stats.comparisons, stats.swaps), (1, 1));
///```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStatistics {
    pub start_time: Option<f64>,
    pub end_time: Option<f64>,
    pub comparisons: u64,
    pub swaps: u64,

    // Only set once a comparison between two runs has been decided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_winner: Option<bool>,
}

impl RunStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the run as started at `at`, discarding anything recorded by a previous run.
    pub fn start(&mut self, at: f64) {
        *self = Self {
            start_time: Some(at),
            ..Self::default()
        };
    }

    /// Same as [`start`](Self::start) using the current wall clock.
    pub fn start_now(&mut self) {
        self.start(now_ms())
    }

    /// Marks the run as finished at `at`.
    ///
    /// Fails with [`Error::InconsistentTimestamps`] if the run never started or `at` lies before
    /// its start.
    pub fn finish(&mut self, at: f64) -> Result<()> {
        match self.start_time {
            Some(start) if start <= at => {
                self.end_time = Some(at);
                Ok(())
            }
            start => Err(Error::InconsistentTimestamps { start, end: at }),
        }
    }

    /// Same as [`finish`](Self::finish) using the current wall clock.
    pub fn finish_now(&mut self) -> Result<()> {
        self.finish(now_ms())
    }

    pub fn record_comparison(&mut self) {
        self.comparisons = self.comparisons.saturating_add(1);
    }

    pub fn record_swap(&mut self) {
        self.swaps = self.swaps.saturating_add(1);
    }

    pub fn is_running(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_none()
    }

    pub fn is_finished(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_some()
    }

    /// Milliseconds between start and end, if the run has finished.
    ///
    /// Runs far enough apart come out as `f64::INFINITY`.
    pub fn elapsed_ms(&self) -> Option<f64> {
        Some(self.end_time? - self.start_time?)
    }

    /// The start time read as milliseconds since the UNIX epoch.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        to_datetime(self.start_time?)
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        to_datetime(self.end_time?)
    }

    /// Checks the timestamp invariant.
    pub(crate) fn check_timestamps(&self) -> Result<()> {
        match (self.start_time, self.end_time) {
            (_, None) => Ok(()),
            (Some(start), Some(end)) if start <= end => Ok(()),
            (start, Some(end)) => Err(Error::InconsistentTimestamps { start, end }),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn now_ms() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1000.0
}

fn to_datetime(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() {
        return None;
    }
    // out of range values saturate and are then refused by chrono
    DateTime::from_timestamp_micros((ms * 1000.0).round() as i64)
}
