//! Filesystem search.

pub mod file_tree;

pub use file_tree::{search, NameMatcher, SearchConfig};
