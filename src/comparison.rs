//! Runs bogo and bozo sort side by side over a range of sizes.

use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::aggregate::{self, Histogram};
use crate::config::{ExperimentConfig, BOGO_PRACTICAL_LIMIT};
use crate::random::{rust_bogosort, rust_bozosort};
use crate::results::{Metric, ResultsStore, TrialOutcome};
use crate::{patterns, Result, Sort};

/// Results of one comparison run, one store per sort.
#[derive(Clone, Debug)]
pub struct Comparison {
    pub config: ExperimentConfig,
    pub bogo: ResultsStore,
    pub bozo: ResultsStore,
}

impl Comparison {
    /// Runs the comparison with the configured seed, or one drawn from the process-wide generator.
    pub fn run(config: &ExperimentConfig) -> Result<Self> {
        let seed = match config.seed {
            Some(seed) => seed,
            None => patterns::with_rng(|rng| rng.gen()),
        };
        info!(
            "Comparing bogo and bozo for n in {}..={}, {} attempts each. Seed: {seed}",
            config.down, config.up, config.attempts
        );

        let mut rng = StdRng::seed_from_u64(seed);
        Self::run_with(config, &mut rng)
    }

    pub fn run_with<R: Rng + ?Sized>(config: &ExperimentConfig, rng: &mut R) -> Result<Self> {
        if config.up > BOGO_PRACTICAL_LIMIT {
            warn!(
                "n={} exceeds {BOGO_PRACTICAL_LIMIT}, bogo sort needs about n! shuffles per trial",
                config.up
            );
        }

        let mut bogo = ResultsStore::new();
        let mut bozo = ResultsStore::new();

        for n in config.sizes() {
            let mut items = patterns::ascending(n);

            for attempt in 0..config.attempts {
                items.shuffle(rng);

                let mut copy1 = items.clone();
                let mut copy2 = items.clone();

                let bogo_outcome = run_trial::<rust_bogosort::SortImpl, _>(&mut copy1, rng, config)?;
                bogo.record_outcome(n, bogo_outcome, config.record_times);

                let bozo_outcome = run_trial::<rust_bozosort::SortImpl, _>(&mut copy2, rng, config)?;
                bozo.record_outcome(n, bozo_outcome, config.record_times);

                trace!("n={n} attempt={attempt} bogo={bogo_outcome:?} bozo={bozo_outcome:?}");
            }

            debug!(
                "n={n} done, mean iters bogo={:.1} bozo={:.1}",
                mean(bogo.values(n, Metric::Iters)),
                mean(bozo.values(n, Metric::Iters)),
            );
        }

        Ok(Self {
            config: config.clone(),
            bogo,
            bozo,
        })
    }

    /// Dense per-size averages of `metric` over the configured range, `(bogo, bozo)`.
    pub fn averages(&self, metric: Metric) -> Result<(Vec<f64>, Vec<f64>)> {
        let (down, up) = (self.config.down, self.config.up);

        let bogo = aggregate::average(&self.bogo, metric)?;
        let bozo = aggregate::average(&self.bozo, metric)?;

        Ok((
            aggregate::to_dense(&bogo, down, up),
            aggregate::to_dense(&bozo, down, up),
        ))
    }

    /// Histograms of `metric` at `size`, `(bogo, bozo)`.
    pub fn histograms(&self, size: usize, metric: Metric, bins: usize) -> Result<(Histogram, Histogram)> {
        Ok((
            aggregate::histogram(self.bogo.values(size, metric), bins)?,
            aggregate::histogram(self.bozo.values(size, metric), bins)?,
        ))
    }
}

fn run_trial<S, R>(items: &mut [usize], rng: &mut R, config: &ExperimentConfig) -> Result<TrialOutcome>
where
    S: Sort,
    R: Rng + ?Sized,
{
    if config.record_times {
        let (iterations, duration) = S::sort_timed_with(items, rng)?;
        Ok(TrialOutcome {
            iterations,
            duration,
        })
    } else {
        Ok(TrialOutcome {
            iterations: S::sort_with(items, rng),
            duration: 0.0,
        })
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len().max(1) as f64
}
