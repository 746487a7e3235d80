//! Empirical comparison of bogo sort (random shuffles) and bozo sort (random swaps).

use rand::Rng;

#[doc(hidden)]
pub use paste;

pub mod aggregate;
pub mod comparison;
pub mod config;
pub mod error;
pub mod patterns;
pub mod results;
pub mod timing;

pub use error::{Error, Result};

/// Common interface of the randomized sorts, used by the driver, the benchmarks and the generated
/// tests.
pub trait Sort {
    fn name() -> String;

    /// Sorts `arr` in place drawing randomness from `rng`, returns the number of iterations.
    fn sort_with<T, R>(arr: &mut [T], rng: &mut R) -> u64
    where
        T: Ord,
        R: Rng + ?Sized;

    /// Same as [`Sort::sort_with`], paired with the elapsed seconds.
    fn sort_timed_with<T, R>(arr: &mut [T], rng: &mut R) -> Result<(u64, f64)>
    where
        T: Ord,
        R: Rng + ?Sized,
    {
        timing::timed(|| Self::sort_with(arr, rng))
    }
}

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl $crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn sort_with<T, R>(arr: &mut [T], rng: &mut R) -> u64
            where
                T: Ord,
                R: rand::Rng + ?Sized,
            {
                sort_with(arr, rng)
            }
        }

        /// Sorts `arr` using the process-wide generator, see [`crate::patterns::with_rng`].
        pub fn sort<T: Ord>(arr: &mut [T]) -> u64 {
            $crate::patterns::with_rng(|rng| sort_with(arr, rng))
        }

        /// Sorts `arr` using the process-wide generator and measures the wall-clock time.
        pub fn sort_timed<T: Ord>(arr: &mut [T]) -> $crate::Result<(u64, f64)> {
            $crate::timing::timed(|| sort(arr))
        }

        pub fn sort_timed_with<T, R>(arr: &mut [T], rng: &mut R) -> $crate::Result<(u64, f64)>
        where
            T: Ord,
            R: rand::Rng + ?Sized,
        {
            <SortImpl as $crate::Sort>::sort_timed_with(arr, rng)
        }
    };
}

pub mod random;

/// Returns `true` if every element is strictly greater than its predecessor.
///
/// Stops at the first inversion. Empty and single element slices are sorted.
pub fn is_sorted<T: PartialOrd>(v: &[T]) -> bool {
    v.windows(2).all(|w| w[0] < w[1])
}

#[cfg(not(feature = "large_test_sizes"))]
pub const TEST_SIZES: [usize; 6] = [0, 1, 2, 3, 4, 5];

#[cfg(feature = "large_test_sizes")]
pub const TEST_SIZES: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 7];

/// Generates the shared test suite for a [`Sort`] implementation.
///
/// `instantiate_sort_tests!(bogo => bogozo_rs::random::rust_bogosort::SortImpl);` expands to
/// `bogo_basic`, `bogo_random`, etc.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($prefix:ident => $sort_impl:ty) => {
        $crate::paste::paste! {
            #[test]
            fn [<$prefix _basic>]() {
                let mut rng = $crate::patterns::seeded_rng($crate::patterns::random_init_seed());

                let mut empty: [i32; 0] = [];
                assert_eq!(<$sort_impl as $crate::Sort>::sort_with(&mut empty, &mut rng), 0);

                let mut single = [42];
                assert_eq!(<$sort_impl as $crate::Sort>::sort_with(&mut single, &mut rng), 0);
                assert_eq!(single, [42]);

                let mut pair = [2, 1];
                assert!(<$sort_impl as $crate::Sort>::sort_with(&mut pair, &mut rng) >= 1);
                assert_eq!(pair, [1, 2]);

                let mut neg = [3, -7, 0];
                <$sort_impl as $crate::Sort>::sort_with(&mut neg, &mut rng);
                assert_eq!(neg, [-7, 0, 3]);
            }

            #[test]
            fn [<$prefix _ascending>]() {
                let mut rng = $crate::patterns::seeded_rng($crate::patterns::random_init_seed());

                for test_size in $crate::TEST_SIZES {
                    let mut v = $crate::patterns::ascending(test_size);
                    let iters = <$sort_impl as $crate::Sort>::sort_with(&mut v, &mut rng);

                    assert_eq!(iters, 0, "size: {test_size}");
                    assert_eq!(v, $crate::patterns::ascending(test_size));
                }
            }

            #[test]
            fn [<$prefix _descending>]() {
                let mut rng = $crate::patterns::seeded_rng($crate::patterns::random_init_seed());

                for test_size in $crate::TEST_SIZES {
                    let mut v = $crate::patterns::descending(test_size);
                    let iters = <$sort_impl as $crate::Sort>::sort_with(&mut v, &mut rng);

                    assert!($crate::is_sorted(&v));
                    assert_eq!(v, $crate::patterns::ascending(test_size));
                    if test_size >= 2 {
                        assert!(iters >= 1, "size: {test_size}");
                    }
                }
            }

            #[test]
            fn [<$prefix _random>]() {
                let seed = $crate::patterns::random_init_seed();
                let mut rng = $crate::patterns::seeded_rng(seed);

                for test_size in $crate::TEST_SIZES {
                    for _ in 0..10 {
                        let original = $crate::patterns::permutation_with(test_size, &mut rng);
                        let mut v = original.clone();
                        let was_sorted = $crate::is_sorted(&v);
                        let iters = <$sort_impl as $crate::Sort>::sort_with(&mut v, &mut rng);

                        assert!($crate::is_sorted(&v), "seed: {seed} input: {original:?}");
                        assert_eq!(was_sorted, iters == 0, "seed: {seed} input: {original:?}");

                        let mut expected = original;
                        expected.sort_unstable();
                        assert_eq!(v, expected, "seed: {seed}");
                    }
                }
            }

            #[test]
            fn [<$prefix _random_str>]() {
                let mut rng = $crate::patterns::seeded_rng($crate::patterns::random_init_seed());

                let mut v = $crate::patterns::permutation_with(5, &mut rng)
                    .into_iter()
                    .map(|val| format!("{val}"))
                    .collect::<Vec<_>>();
                <$sort_impl as $crate::Sort>::sort_with(&mut v, &mut rng);

                assert_eq!(v, ["0", "1", "2", "3", "4"]);
            }

            #[test]
            fn [<$prefix _fixed_seed>]() {
                let run = |seed: u64| {
                    let mut rng = $crate::patterns::seeded_rng(seed);
                    let mut v = $crate::patterns::permutation_with(5, &mut rng);
                    let iters = <$sort_impl as $crate::Sort>::sort_with(&mut v, &mut rng);
                    (iters, v)
                };

                assert_eq!(run(1357), run(1357));
            }

            #[test]
            fn [<$prefix _timed>]() {
                let mut rng = $crate::patterns::seeded_rng($crate::patterns::random_init_seed());

                let mut v = $crate::patterns::permutation_with(4, &mut rng);
                let mut expected = v.clone();
                expected.sort_unstable();
                let was_sorted = $crate::is_sorted(&v);

                let (iters, secs) =
                    <$sort_impl as $crate::Sort>::sort_timed_with(&mut v, &mut rng).unwrap();

                assert_eq!(v, expected);
                assert_eq!(was_sorted, iters == 0);
                assert!(secs >= 0.0 && secs.is_finite());
            }

            #[test]
            fn [<$prefix _name>]() {
                assert!(!<$sort_impl as $crate::Sort>::name().is_empty());
            }
        }
    };
}
