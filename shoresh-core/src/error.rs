//! Core error types.

use thiserror::Error;

/// Errors produced while parsing a root field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RootParseError {
    /// The root field yielded zero Hebrew consonants.
    #[error("no Hebrew consonants found in root field")]
    NoConsonantsFound,
}

/// Result type for root parsing.
pub type Result<T> = std::result::Result<T, RootParseError>;
