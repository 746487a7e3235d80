//! Wall-clock timing of arbitrary operations.

use std::time::Instant;

use crate::{Error, Result};

/// Runs `op` once and returns its result together with the elapsed seconds.
///
/// The clock is read immediately before and immediately after the call, nothing else is
/// measured.
#[inline]
pub fn timed<R>(op: impl FnOnce() -> R) -> Result<(R, f64)> {
    let start = Instant::now();
    let result = op();
    let end = Instant::now();

    Ok((result, elapsed_secs(start, end)?))
}

/// Wraps `op` so that every call is timed, see [`timed`].
///
/// The wrapped operation receives its argument unchanged, use a tuple for several arguments.
pub fn timeit<A, R>(mut op: impl FnMut(A) -> R) -> impl FnMut(A) -> Result<(R, f64)> {
    move |arg| timed(|| op(arg))
}

/// `end - start` in seconds. An `end` before `start` is a clock fault, not a zero duration.
pub fn elapsed_secs(start: Instant, end: Instant) -> Result<f64> {
    end.checked_duration_since(start)
        .map(|elapsed| elapsed.as_secs_f64())
        .ok_or(Error::ClockFault)
}
