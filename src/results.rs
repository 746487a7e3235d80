use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The measured quantity of a trial.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    /// Shuffles or swaps until sorted.
    Iters,
    /// Wall-clock seconds.
    Times,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Iters, Metric::Times];

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Iters => "iters",
            Metric::Times => "times",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iters" => Ok(Metric::Iters),
            "times" => Ok(Metric::Times),
            other => Err(Error::UnknownMetric(other.to_owned())),
        }
    }
}

/// Outcome of one sorter invocation on one input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrialOutcome {
    pub iterations: u64,
    pub duration: f64,
}

/// Append-only store of trial outcomes, keyed by input size and then by metric.
///
/// Cells are created on first use and keep values in recording order.
#[derive(Clone, Debug, Default)]
pub struct ResultsStore {
    cells: BTreeMap<usize, BTreeMap<Metric, Vec<f64>>>,
}

impl ResultsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, size: usize, metric: Metric, value: f64) {
        debug_assert!(value >= 0.0, "negative {metric} value {value} for n={size}");

        self.cells
            .entry(size)
            .or_default()
            .entry(metric)
            .or_default()
            .push(value);
    }

    /// Records the iteration count and, if `timed`, the duration of `outcome`.
    pub fn record_outcome(&mut self, size: usize, outcome: TrialOutcome, timed: bool) {
        self.record(size, Metric::Iters, outcome.iterations as f64);
        if timed {
            self.record(size, Metric::Times, outcome.duration);
        }
    }

    /// Values recorded for `size` and `metric`, empty if none were.
    pub fn values(&self, size: usize, metric: Metric) -> &[f64] {
        self.cells
            .get(&size)
            .and_then(|metrics| metrics.get(&metric))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn trial_count(&self, size: usize, metric: Metric) -> usize {
        self.values(size, metric).len()
    }

    /// Sizes with at least one recorded value, ascending.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
