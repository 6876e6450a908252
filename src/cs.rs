pub mod combinatorial;
pub mod search;

// Re-export all modules
pub use combinatorial::*;
pub use search::*;
