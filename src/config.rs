use std::ops::RangeInclusive;

use crate::{Error, Result};

/// Largest size for which a bogo sort run finishes in reasonable time on a typical machine.
/// Larger sizes are allowed but logged.
pub const BOGO_PRACTICAL_LIMIT: usize = 10;

/// Parameters of one comparison run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// Smallest input size, inclusive.
    pub down: usize,
    /// Largest input size, inclusive.
    pub up: usize,
    /// Trials per size.
    pub attempts: usize,
    /// Record wall-clock durations next to iteration counts.
    pub record_times: bool,
    /// Seed for the run, `None` draws one from the process-wide generator.
    pub seed: Option<u64>,
}

impl ExperimentConfig {
    pub fn new(down: usize, up: usize, attempts: usize) -> Result<Self> {
        if down > up {
            return Err(Error::InvalidRange { down, up });
        }
        if attempts == 0 {
            return Err(Error::NoAttempts);
        }

        Ok(Self {
            down,
            up,
            attempts,
            record_times: true,
            seed: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn without_times(mut self) -> Self {
        self.record_times = false;
        self
    }

    pub fn sizes(&self) -> RangeInclusive<usize> {
        self.down..=self.up
    }
}
