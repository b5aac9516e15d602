use super::{scale_name::MAX_GROUP_COUNT, OutOfRange, ScaleError};

/// Errors that can occur while converting a digit string to words.
///
/// The messages match what the command-line tool prints after `Error:`.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum Error {
    /// The input was empty.
    #[error("(not supported)")]
    EmptyInput,

    /// The input contained something other than the ASCII digits 0-9.
    #[error("Invalid input")]
    InvalidCharacter {
        /// The first offending character.
        character: char,
        /// Its position in the input, counted in characters.
        position: usize,
    },

    /// The number has more digits than the configured group limit allows.
    #[error("(number too large)! Number must be less than 10^{max_digits}")]
    TooLarge {
        /// Exclusive upper bound on the decimal exponent.
        max_digits: usize,
    },

    /// An internal inconsistency in the lexicon or the generator.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ScaleError> for Error {
    fn from(err: ScaleError) -> Self {
        match err {
            ScaleError::TooLarge(_) => Self::TooLarge {
                max_digits: 3 * MAX_GROUP_COUNT,
            },
            ScaleError::Internal { .. } => Self::Internal(err.to_string()),
        }
    }
}

impl From<OutOfRange> for Error {
    fn from(err: OutOfRange) -> Self {
        Self::Internal(err.to_string())
    }
}
