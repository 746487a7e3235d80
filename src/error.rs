use crate::results::Metric;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid size range: down ({down}) is greater than up ({up})")]
    InvalidRange { down: usize, up: usize },

    #[error("attempts per size must be at least 1")]
    NoAttempts,

    #[error("no `{metric}` values recorded for n={size}")]
    EmptyMetric { size: usize, metric: Metric },

    #[error("clock went backwards while timing an operation")]
    ClockFault,

    #[error("cannot bin {values} values into {bins} bins")]
    EmptyHistogram { values: usize, bins: usize },

    #[error("unknown metric `{0}`, expected `iters` or `times`")]
    UnknownMetric(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
