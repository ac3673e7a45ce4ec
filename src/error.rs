//! Typed errors for case conversion.
//!
//! Callers can match on [`CaseError`] to tell malformed input apart from
//! input that is well-formed but holds no words.

use thiserror::Error;

/// Why an input was rejected before tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The value was null / absent.
    #[error("input cannot be null or undefined")]
    Missing,

    /// The value was present but not a string.
    #[error("input must be a string, found {found}")]
    NotAString {
        /// JSON type name of the rejected value.
        found: &'static str,
    },

    /// The string holds a character outside letters, digits, whitespace,
    /// underscore and hyphen.
    #[error("input contains invalid character {ch:?} at byte {index}")]
    DisallowedChar { ch: char, index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// Input passed validation but contained only delimiters.
    #[error("input contains no valid words")]
    EmptyResult,
}

pub type Result<T> = std::result::Result<T, CaseError>;
