use std::{fmt, ops::Deref, str::FromStr};

use non_empty_string::NonEmptyString;

use super::Error;

/// A validated string containing only ASCII decimal digits (`[0-9]+`).
///
/// Leading zeros are allowed and there is no upper bound on the length; the
/// word assembler decides whether a number is too large to name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DigitString(NonEmptyString);

impl DigitString {
    /// Creates a new `DigitString` from a string.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] if the string is empty.
    /// - [`Error::InvalidCharacter`] for the first character that is not an
    ///   ASCII digit.
    pub fn new(s: String) -> Result<Self, Error> {
        if let Some((position, character)) = s
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_digit())
        {
            return Err(Error::InvalidCharacter {
                character,
                position,
            });
        }

        NonEmptyString::new(s)
            .map(Self)
            .map_err(|_| Error::EmptyInput)
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Number of digits, leading zeros included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.as_str().len()
    }

    /// Always `false`; a `DigitString` holds at least one digit.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Validates user input as a digit string.
///
/// # Errors
///
/// See [`DigitString::new`].
pub fn validate(s: &str) -> Result<DigitString, Error> {
    DigitString::new(s.to_string())
}

impl TryFrom<String> for DigitString {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for DigitString {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        validate(value)
    }
}

impl FromStr for DigitString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for DigitString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
