use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the interactive boundary of the crate.
///
/// The algorithms themselves are infallible: an invalid search root yields an
/// empty result and an empty string has exactly one permutation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("String cannot be empty!")]
    EmptyInput,

    #[error("Directory does not exist!")]
    InvalidDirectory(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
