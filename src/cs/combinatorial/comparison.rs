use std::fmt;
use std::time::{Duration, Instant};

use log::debug;

use super::backtracking::{permutations, DuplicatePolicy, PermutationSet};
use super::heap_permutation::permute_iterative;

/// Which generator finished first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    RecursiveFaster,
    IterativeFaster,
    Tie,
}

impl Verdict {
    pub fn from_durations(recursive: Duration, iterative: Duration) -> Self {
        match recursive.cmp(&iterative) {
            std::cmp::Ordering::Less => Verdict::RecursiveFaster,
            std::cmp::Ordering::Greater => Verdict::IterativeFaster,
            std::cmp::Ordering::Equal => Verdict::Tie,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Verdict::RecursiveFaster => "Recursive version was faster!",
            Verdict::IterativeFaster => "Iterative version was faster!",
            Verdict::Tie => "Both took roughly the same time!",
        };
        f.write_str(msg)
    }
}

/// Results and wall-clock timings of both permutation generators on one input.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub recursive: PermutationSet,
    pub recursive_elapsed: Duration,
    pub iterative: Vec<String>,
    pub iterative_elapsed: Duration,
}

impl Comparison {
    pub fn verdict(&self) -> Verdict {
        Verdict::from_durations(self.recursive_elapsed, self.iterative_elapsed)
    }
}

/// Runs the recursive generator (under `policy`) and then Heap's algorithm on `input`,
/// timing each run.
///
/// Timings are observational; the outcome of [`Comparison::verdict`] varies between runs.
///
/// # Example
/// ```
/// use recursive_algos::cs::combinatorial::{compare, DuplicatePolicy};
///
/// let cmp = compare("abcd", DuplicatePolicy::Unique);
/// assert_eq!(cmp.recursive.len(), 24);
/// assert_eq!(cmp.iterative.len(), 24);
/// ```
pub fn compare(input: &str, policy: DuplicatePolicy) -> Comparison {
    let start = Instant::now();
    let recursive = permutations(input, policy);
    let recursive_elapsed = start.elapsed();

    let start = Instant::now();
    let iterative = permute_iterative(input);
    let iterative_elapsed = start.elapsed();

    debug!(
        "compared {} chars: recursive {:?} ({} kept), iterative {:?} ({} total)",
        input.chars().count(),
        recursive_elapsed,
        recursive.len(),
        iterative_elapsed,
        iterative.len()
    );

    Comparison {
        recursive,
        recursive_elapsed,
        iterative,
        iterative_elapsed,
    }
}
