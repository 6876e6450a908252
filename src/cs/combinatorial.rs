//! String permutation generators.
//!
//! - [`backtracking`]: recursive choice-of-next-character generation into a
//!   [`PermutationSet`] with a caller-selected [`DuplicatePolicy`]
//! - [`heap_permutation`]: iterative Heap's algorithm, always `n!` results
//! - [`comparison`]: runs and times both on the same input

pub mod backtracking;
pub mod comparison;
pub mod heap_permutation;

pub use backtracking::{permutations, permute_recursive, DuplicatePolicy, PermutationSet};
pub use comparison::{compare, Comparison, Verdict};
pub use heap_permutation::permute_iterative;

/// Number of permutations of `n` distinct items, or `None` if `n!` overflows `u128`.
///
/// ```
/// use recursive_algos::cs::combinatorial::permutation_count;
///
/// assert_eq!(permutation_count(0), Some(1));
/// assert_eq!(permutation_count(5), Some(120));
/// assert_eq!(permutation_count(100), None);
/// ```
pub fn permutation_count(n: usize) -> Option<u128> {
    (1..=n as u128).try_fold(1u128, |acc, k| acc.checked_mul(k))
}
