use rand::seq::index;
use rand::Rng;

use crate::is_sorted;

sort_impl!("rust_bozosort");

/// Swaps two distinct, uniformly chosen positions of `arr` until it is sorted and returns the
/// number of swaps performed.
///
/// Sorted input, which includes every slice shorter than 2, is returned untouched with a count
/// of 0. The elements must be distinct, otherwise the slice never becomes strictly ascending.
pub fn sort_with<T, R>(arr: &mut [T], rng: &mut R) -> u64
where
    T: Ord,
    R: Rng + ?Sized,
{
    let len = arr.len();
    if len < 2 {
        return 0;
    }

    let mut iters = 0;
    while !is_sorted(arr) {
        let (a, b) = pick_pair(len, rng);
        arr.swap(a, b);
        iters += 1;
    }

    iters
}

/// Samples two distinct indices in `0..len` without replacement.
///
/// `len` must be at least 2.
pub fn pick_pair<R: Rng + ?Sized>(len: usize, rng: &mut R) -> (usize, usize) {
    debug_assert!(len >= 2);

    let idxs = index::sample(rng, len, 2);
    (idxs.index(0), idxs.index(1))
}
