//! Reductions of a [`ResultsStore`] into series and bins for plotting.

use std::collections::BTreeMap;

use crate::results::{Metric, ResultsStore};
use crate::{Error, Result};

/// Bin count used for the per-size histograms.
pub const DEFAULT_HISTOGRAM_BINS: usize = 25;

/// Arithmetic mean of `metric` for every size in `store`.
///
/// A size that has values only for other metrics is an error, not a zero.
pub fn average(store: &ResultsStore, metric: Metric) -> Result<BTreeMap<usize, f64>> {
    store
        .sizes()
        .map(|size| {
            let values = store.values(size, metric);
            if values.is_empty() {
                return Err(Error::EmptyMetric { size, metric });
            }

            let mean = values.iter().sum::<f64>() / values.len() as f64;
            Ok((size, mean))
        })
        .collect()
}

/// Lays out `aggregate` over `down..=up`, index `i` holding the value for size `down + i`.
///
/// Missing sizes are filled with `0.0`. Empty if `down > up`.
pub fn to_dense(aggregate: &BTreeMap<usize, f64>, down: usize, up: usize) -> Vec<f64> {
    if down > up {
        return Vec::new();
    }

    (down..=up)
        .map(|size| aggregate.get(&size).copied().unwrap_or(0.0))
        .collect()
}

/// Equal width bins over `[min, max]` of a set of values.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn bin_width(&self) -> f64 {
        (self.max - self.min) / self.counts.len() as f64
    }

    /// Left edges of all bins.
    pub fn edges(&self) -> impl Iterator<Item = f64> + '_ {
        let width = self.bin_width();
        (0..self.counts.len()).map(move |i| self.min + width * i as f64)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Sorts `values` into `bins` equal width bins. The last bin includes `max`.
///
/// If all values are equal the range is widened to `[v - 0.5, v + 0.5]`.
pub fn histogram(values: &[f64], bins: usize) -> Result<Histogram> {
    if values.is_empty() || bins == 0 {
        return Err(Error::EmptyHistogram {
            values: values.len(),
            bins,
        });
    }

    let (mut min, mut max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if min == max {
        min -= 0.5;
        max += 0.5;
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0; bins];
    for &v in values {
        let bin = (((v - min) / width) as usize).min(bins - 1);
        counts[bin] += 1;
    }

    Ok(Histogram { min, max, counts })
}
