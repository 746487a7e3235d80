use rand::seq::SliceRandom;
use rand::Rng;

use crate::is_sorted;

sort_impl!("rust_bogosort");

/// Shuffles `arr` until it is sorted and returns the number of shuffles performed.
///
/// Sorted input is returned untouched with a count of 0. Every shuffle is an unbiased
/// Fisher-Yates permutation, so the expected number of shuffles for `n` distinct elements is
/// `n!`. Callers have to bound `n`. The elements must be distinct, otherwise the slice never
/// becomes strictly ascending.
pub fn sort_with<T, R>(arr: &mut [T], rng: &mut R) -> u64
where
    T: Ord,
    R: Rng + ?Sized,
{
    let mut iters = 0;
    while !is_sorted(arr) {
        arr.shuffle(rng);
        iters += 1;
    }

    iters
}
