use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};

/// Configuration for [`search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Compare file names exactly when true, ignoring case otherwise
    pub case_sensitive: bool,
}

impl SearchConfig {
    pub fn case_insensitive() -> Self {
        Self {
            case_sensitive: false,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

/// Decides whether a file name equals a target name.
#[derive(Debug, Clone)]
pub struct NameMatcher<'a> {
    target: &'a str,
    case_sensitive: bool,
}

impl<'a> NameMatcher<'a> {
    pub fn new(target: &'a str, case_sensitive: bool) -> Self {
        Self {
            target,
            case_sensitive,
        }
    }

    /// Case-insensitive comparison folds each character independently, without
    /// locale rules. Names that are not valid UTF-8 only match exactly.
    pub fn matches(&self, name: &OsStr) -> bool {
        if self.case_sensitive {
            return name == OsStr::new(self.target);
        }
        match name.to_str() {
            Some(name) => eq_ignore_case(name, self.target),
            None => name == OsStr::new(self.target),
        }
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Recursively searches `root` for files named `target`.
///
/// Returns the absolute path of every match, depth-first, with the entries of
/// each directory visited in file-name order. A `root` that is not an existing
/// directory yields an empty result. Subdirectories that cannot be listed are
/// skipped. Symbolic links are never descended into; they are compared by name
/// like regular files.
///
/// # Example
/// ```
/// use recursive_algos::cs::search::{search, SearchConfig};
///
/// let found = search("/definitely/not/here", "notes.txt", &SearchConfig::default());
/// assert!(found.is_empty());
/// ```
pub fn search<P: AsRef<Path>>(root: P, target: &str, config: &SearchConfig) -> Vec<PathBuf> {
    let root = root.as_ref();
    let mut found = Vec::new();
    if !root.is_dir() {
        debug!("search root {} is not a directory", root.display());
        return found;
    }

    // Matches are reported relative to an absolute root; a relative root is
    // resolved against the working directory without resolving links.
    let root = match std::path::absolute(root) {
        Ok(path) => path,
        Err(err) => {
            debug!("cannot resolve {}: {}", root.display(), err);
            return found;
        }
    };

    let matcher = NameMatcher::new(target, config.case_sensitive);
    search_dir(&root, &matcher, &mut found);
    debug!(
        "found {} match(es) for {:?} under {}",
        found.len(),
        target,
        root.display()
    );
    found
}

fn search_dir(dir: &Path, matcher: &NameMatcher<'_>, found: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!("skipping {}: {}", dir.display(), err);
            return;
        }
    };

    let mut entries: Vec<_> = entries.flatten().collect();
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let path = entry.path();
        if file_type.is_dir() {
            search_dir(&path, matcher, found);
        } else if matcher.matches(&entry.file_name()) {
            trace!("match: {}", path.display());
            found.push(path);
        }
    }
}
