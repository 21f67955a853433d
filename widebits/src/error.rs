//! Error types for fallible conversions into [`crate::Bits`].

use thiserror::Error as ThisError;

/// Represents all possible conversion errors that can occur.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum BitsError {
    /// The incoming value contains no digits.
    #[error("Empty value")]
    EmptyValue,

    /// The incoming value contains a character that is not a binary digit.
    #[error("Invalid digit: {0}")]
    InvalidDigit(char),

    /// The incoming value has set bits at or above the declared width.
    #[error("Value too large for {bits} bits")]
    ValueTooLarge { bits: usize },

    /// The incoming word slice does not have one word per backing word.
    #[error("Expected {expected} words, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}
