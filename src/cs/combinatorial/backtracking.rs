//! Recursive backtracking permutations of a string.
//!
//! Each level of the recursion picks the next character of the permutation from
//! the characters still remaining, appends it to the prefix and recurses on the
//! rest. Results are collected into a [`PermutationSet`] whose duplicate handling
//! is chosen by the caller through a [`DuplicatePolicy`].
//!
//! # Examples
//! ```
//! use recursive_algos::cs::combinatorial::backtracking::{permutations, DuplicatePolicy};
//!
//! let perms = permutations("aab", DuplicatePolicy::Unique);
//! assert_eq!(perms.to_vec(), vec!["aab", "aba", "baa"]);
//!
//! let perms = permutations("aab", DuplicatePolicy::Keep);
//! assert_eq!(perms.len(), 6);
//! ```
use std::collections::BTreeSet;

/// How a [`PermutationSet`] treats equal strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Insertion order, every emitted permutation retained.
    Keep,
    /// Lexicographic order, equal permutations collapse to one entry.
    #[default]
    Unique,
}

#[derive(Debug, Clone)]
enum Entries {
    Ordered(Vec<String>),
    Sorted(BTreeSet<String>),
}

/// Accumulator for recursively generated permutations.
#[derive(Debug, Clone)]
pub struct PermutationSet {
    entries: Entries,
    emissions: usize,
}

impl PermutationSet {
    pub fn new(policy: DuplicatePolicy) -> Self {
        let entries = match policy {
            DuplicatePolicy::Keep => Entries::Ordered(Vec::new()),
            DuplicatePolicy::Unique => Entries::Sorted(BTreeSet::new()),
        };
        Self {
            entries,
            emissions: 0,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        match self.entries {
            Entries::Ordered(_) => DuplicatePolicy::Keep,
            Entries::Sorted(_) => DuplicatePolicy::Unique,
        }
    }

    /// Adds a permutation. Returns `false` if the policy discarded it as a duplicate.
    pub fn insert(&mut self, permutation: String) -> bool {
        self.emissions += 1;
        match &mut self.entries {
            Entries::Ordered(list) => {
                list.push(permutation);
                true
            }
            Entries::Sorted(set) => set.insert(permutation),
        }
    }

    /// Number of stored permutations.
    pub fn len(&self) -> usize {
        match &self.entries {
            Entries::Ordered(list) => list.len(),
            Entries::Sorted(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of insertions attempted, including discarded duplicates.
    pub fn emissions(&self) -> usize {
        self.emissions
    }

    pub fn contains(&self, permutation: &str) -> bool {
        match &self.entries {
            Entries::Ordered(list) => list.iter().any(|p| p == permutation),
            Entries::Sorted(set) => set.contains(permutation),
        }
    }

    /// Iterates in the order defined by the policy.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match &self.entries {
            Entries::Ordered(list) => Box::new(list.iter().map(String::as_str)),
            Entries::Sorted(set) => Box::new(set.iter().map(String::as_str)),
        }
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
    }
}

impl Default for PermutationSet {
    fn default() -> Self {
        Self::new(DuplicatePolicy::default())
    }
}

/// Returns all permutations of `input` collected under `policy`.
pub fn permutations(input: &str, policy: DuplicatePolicy) -> PermutationSet {
    let mut acc = PermutationSet::new(policy);
    permute_recursive(input, "", &mut acc);
    acc
}

/// Adds to `acc` every string formed by `prefix` followed by a permutation of `remaining`.
///
/// Characters are Unicode scalar values. An empty `remaining` adds `prefix` itself,
/// so an empty input produces the single empty permutation.
pub fn permute_recursive(remaining: &str, prefix: &str, acc: &mut PermutationSet) {
    let mut chars: Vec<char> = remaining.chars().collect();
    let mut current = String::from(prefix);
    backtrack(&mut chars, &mut current, acc);
}

fn backtrack(remaining: &mut Vec<char>, prefix: &mut String, acc: &mut PermutationSet) {
    if remaining.is_empty() {
        acc.insert(prefix.clone());
        return;
    }
    for i in 0..remaining.len() {
        let ch = remaining.remove(i);
        prefix.push(ch);
        backtrack(remaining, prefix, acc);
        prefix.pop();
        remaining.insert(i, ch);
    }
}
