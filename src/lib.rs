pub mod cli;
pub mod cs;
pub mod error;

pub use cs::{combinatorial, search};
pub use error::{Error, Result};
