//! Input generation and the process-wide random source.
//!
//! All randomness without an explicitly injected generator flows through a thread local `StdRng`
//! seeded once per process. Set `BOGOZO_SEED` to reproduce a run.

use std::cell::RefCell;
use std::env;

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};

pub const SEED_ENV_VAR: &str = "BOGOZO_SEED";

static SEED: Lazy<u64> = Lazy::new(|| match env::var(SEED_ENV_VAR) {
    Ok(val) => val.trim().parse().unwrap_or_else(|_| {
        let seed = thread_rng().gen();
        log::warn!("Ignoring unparsable {SEED_ENV_VAR}={val:?}, using seed {seed}");
        seed
    }),
    Err(_) => thread_rng().gen(),
});

thread_local! {
    static RNG: RefCell<StdRng> = RefCell::new(StdRng::seed_from_u64(random_init_seed()));
}

/// The seed of the process-wide generator. Stable for the lifetime of the process.
pub fn random_init_seed() -> u64 {
    *SEED
}

/// Runs `f` with exclusive access to the process-wide generator.
pub fn with_rng<R>(f: impl FnOnce(&mut StdRng) -> R) -> R {
    RNG.with(|rng| f(&mut rng.borrow_mut()))
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// `0..len` in order.
pub fn ascending(len: usize) -> Vec<usize> {
    (0..len).collect()
}

/// `0..len` in reverse order.
pub fn descending(len: usize) -> Vec<usize> {
    (0..len).rev().collect()
}

/// Uniformly random permutation of `0..len`.
pub fn permutation(len: usize) -> Vec<usize> {
    with_rng(|rng| permutation_with(len, rng))
}

pub fn permutation_with<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut v = ascending(len);
    v.shuffle(rng);
    v
}
