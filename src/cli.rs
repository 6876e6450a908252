//! Interactive front ends for the file search and permutation programs.
//!
//! Both runners read answers line by line from any [`BufRead`] and write to any
//! [`Write`], so the binaries pass stdin/stdout and tests pass in-memory buffers.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use log::warn;

use crate::cs::combinatorial::{compare, permutation_count, DuplicatePolicy};
use crate::cs::search::{search, SearchConfig};
use crate::error::{Error, Result};

/// Inputs longer than this produce more than 3.6 million permutations per generator.
pub const LONG_INPUT_WARNING: usize = 10;

/// Writes `message`, then reads one line without its line terminator.
/// End of input reads as an empty line.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

/// Only `yes`, ignoring surrounding whitespace and case, counts as agreement.
pub fn parse_yes_no(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

/// Splits a comma-separated list of file names, trimming each and dropping empty ones.
pub fn parse_name_list(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Accepts `path` as a search root only if it is an existing directory.
pub fn search_root(path: &str) -> Result<PathBuf> {
    let root = Path::new(path);
    if root.is_dir() {
        Ok(root.to_path_buf())
    } else {
        Err(Error::InvalidDirectory(root.to_path_buf()))
    }
}

/// Rejects the empty string, which the generators accept but the program does not.
pub fn permutation_input(line: String) -> Result<String> {
    if line.is_empty() {
        Err(Error::EmptyInput)
    } else {
        Ok(line)
    }
}

/// Prompts for a directory, file names and case sensitivity, then reports each name.
pub fn run_file_search<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    let directory = prompt(input, output, "Enter directory path: ")?;
    let names = prompt(input, output, "Enter file names to search (comma-separated): ")?;
    let answer = prompt(input, output, "Case-sensitive search? (yes/no): ")?;
    let case_sensitive = parse_yes_no(&answer);

    let root = match search_root(&directory) {
        Ok(root) => root,
        Err(err @ Error::InvalidDirectory(_)) => {
            writeln!(output, "Error: {}", err)?;
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    let config = SearchConfig { case_sensitive };
    for name in parse_name_list(&names) {
        let found = search(&root, &name, &config);
        if found.is_empty() {
            writeln!(output, "File not found: {}", name)?;
        } else {
            writeln!(output, "Found {} {} time(s):", name, found.len())?;
            for path in &found {
                writeln!(output, " → {}", path.display())?;
            }
        }
    }
    Ok(())
}

/// Prompts for a string and duplicate policy, then prints both generators' output
/// and timings.
pub fn run_permutations<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    let line = prompt(input, output, "Enter a string: ")?;
    let text = match permutation_input(line) {
        Ok(text) => text,
        Err(err @ Error::EmptyInput) => {
            writeln!(output, "Error: {}", err)?;
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    let n = text.chars().count();
    if n > LONG_INPUT_WARNING {
        match permutation_count(n) {
            Some(count) => warn!("{} characters yield {} permutations per generator", n, count),
            None => warn!("{} characters yield more permutations than fit in a u128", n),
        }
    }

    let answer = prompt(input, output, "Include duplicate permutations? (yes/no): ")?;
    let policy = if parse_yes_no(&answer) {
        DuplicatePolicy::Keep
    } else {
        DuplicatePolicy::Unique
    };

    let cmp = compare(&text, policy);

    writeln!(output)?;
    writeln!(
        output,
        "=== Recursive Permutations ({} total) ===",
        cmp.recursive.len()
    )?;
    for perm in cmp.recursive.iter() {
        writeln!(output, "{}", perm)?;
    }
    writeln!(
        output,
        "Recursive execution time: {:.6} ms",
        cmp.recursive_elapsed.as_secs_f64() * 1_000.0
    )?;

    writeln!(output)?;
    writeln!(
        output,
        "=== Iterative Permutations ({} total) ===",
        cmp.iterative.len()
    )?;
    for perm in &cmp.iterative {
        writeln!(output, "{}", perm)?;
    }
    writeln!(
        output,
        "Iterative execution time: {:.6} ms",
        cmp.iterative_elapsed.as_secs_f64() * 1_000.0
    )?;

    writeln!(output)?;
    writeln!(output, "Performance Comparison:")?;
    writeln!(output, "{}", cmp.verdict())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Cursor;

    fn run<F>(script: &str, f: F) -> String
    where
        F: FnOnce(&mut Cursor<Vec<u8>>, &mut Vec<u8>) -> Result<()>,
    {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        f(&mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_prompt_strips_line_ending() {
        let mut input = Cursor::new(b"hello\r\nrest\n".to_vec());
        let mut output = Vec::new();
        let line = prompt(&mut input, &mut output, "> ").unwrap();
        assert_eq!(line, "hello");
        assert_eq!(output, b"> ");
    }

    #[test]
    fn test_prompt_at_eof_is_empty() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        assert_eq!(prompt(&mut input, &mut output, "> ").unwrap(), "");
    }

    #[test]
    fn test_parse_yes_no() {
        assert!(parse_yes_no("yes"));
        assert!(parse_yes_no("  YeS \t"));
        assert!(!parse_yes_no("y"));
        assert!(!parse_yes_no("no"));
        assert!(!parse_yes_no(""));
    }

    #[test]
    fn test_parse_name_list() {
        assert_eq!(
            parse_name_list(" a.txt, b.rs ,,c "),
            vec!["a.txt", "b.rs", "c"]
        );
        assert!(parse_name_list("").is_empty());
    }

    #[test]
    fn test_permutation_input_rejects_empty() {
        assert!(matches!(permutation_input(String::new()), Err(Error::EmptyInput)));
        assert_eq!(permutation_input(" ".to_string()).unwrap(), " ");
    }

    #[test]
    fn test_file_search_invalid_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let script = format!("{}\nfoo.txt\nyes\n", missing.display());
        let out = run(&script, |i, o| run_file_search(i, o));
        assert!(out.ends_with("Error: Directory does not exist!\n"));
        assert!(!out.contains("File not found"));
    }

    #[test]
    fn test_file_search_reports_each_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("foo.txt")).unwrap();
        File::create(dir.path().join("sub/FOO.txt")).unwrap();

        let script = format!("{}\nfoo.txt, nothing.md\nno\n", dir.path().display());
        let out = run(&script, |i, o| run_file_search(i, o));

        let root = std::path::absolute(dir.path()).unwrap();
        let expected = format!(
            "Found foo.txt 2 time(s):\n → {}\n → {}\nFile not found: nothing.md\n",
            root.join("foo.txt").display(),
            root.join("sub/FOO.txt").display()
        );
        assert!(out.ends_with(&expected), "unexpected output:\n{}", out);
    }

    #[test]
    fn test_file_search_case_sensitive_answer() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("FOO.txt")).unwrap();
        let script = format!("{}\nfoo.txt\nyes\n", dir.path().display());
        let out = run(&script, |i, o| run_file_search(i, o));
        assert!(out.ends_with("File not found: foo.txt\n"));
    }

    #[test]
    fn test_permutations_empty_string() {
        let out = run("\nyes\n", |i, o| run_permutations(i, o));
        assert_eq!(out, "Enter a string: Error: String cannot be empty!\n");
    }

    #[test]
    fn test_permutations_unique_output() {
        let out = run("aab\nno\n", |i, o| run_permutations(i, o));
        assert!(out.contains("=== Recursive Permutations (3 total) ===\naab\naba\nbaa\n"));
        assert!(out.contains("=== Iterative Permutations (6 total) ===\naab\naab\nbaa\naba\naba\nbaa\n"));
        assert!(out.contains("Recursive execution time: "));
        assert!(out.contains("Iterative execution time: "));
        assert!(out.contains("Performance Comparison:\n"));

        let verdict = out.lines().last().unwrap();
        assert!([
            "Recursive version was faster!",
            "Iterative version was faster!",
            "Both took roughly the same time!",
        ]
        .contains(&verdict));
    }

    #[test]
    fn test_permutations_keep_duplicates() {
        let out = run("aab\nYES\n", |i, o| run_permutations(i, o));
        assert!(out.contains("=== Recursive Permutations (6 total) ===\naab\naba\naab\naba\nbaa\nbaa\n"));
    }
}
