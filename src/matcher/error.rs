//! Error types for pattern automaton operations.

use thiserror::Error;

/// Errors that can occur when changing the pattern dictionary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    /// The pattern is empty.
    ///
    /// An empty pattern would match at every position of every haystack, so
    /// it is rejected and the automaton is left unchanged.
    #[error("Pattern is empty")]
    EmptyPattern,
}

/// A specialized `Result` type for pattern automaton operations.
pub type Result<T> = std::result::Result<T, AutomatonError>;
