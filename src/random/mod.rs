// Shuffles the whole slice until it is sorted.
pub mod rust_bogosort;

// Swaps two distinct random positions until the slice is sorted.
pub mod rust_bozosort;
