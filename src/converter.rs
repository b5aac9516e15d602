use tracing::{debug, instrument};

use crate::domain::{assemble, split_groups, Config, DigitString, Error};

/// Converts digit strings to German words using a fixed [`Config`].
///
/// A `Converter` holds no state besides its configuration, so the same value
/// can be reused for any number of inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Converter {
    config: Config,
}

impl Converter {
    /// Creates a converter with the given configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Converts a digit string to German words.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] if `input` is empty.
    /// - [`Error::InvalidCharacter`] if `input` contains anything but ASCII
    ///   digits.
    /// - [`Error::TooLarge`] if the number has too many significant digits.
    /// - [`Error::Internal`] on an inconsistency in the word tables.
    #[instrument(level = "debug", skip(self, input), fields(len = input.len()))]
    pub fn convert(&self, input: &str) -> Result<String, Error> {
        let digits: DigitString = input.parse().inspect_err(|e| debug!(%e, "invalid input"))?;

        assemble(split_groups(&digits), &self.config)
            .inspect_err(|e| debug!(%e, "conversion failed"))
    }
}

/// Converts a digit string to German words with the default configuration.
///
/// Trailing whitespace is trimmed and numbers must be below 10^6000.
///
/// # Errors
///
/// See [`Converter::convert`].
///
/// # Examples
///
/// ```
/// use zahlwort::{convert, Error};
///
/// assert_eq!(convert("0").unwrap(), "null");
/// assert_eq!(convert("1001").unwrap(), "eintausendeins");
/// assert_eq!(convert("1000000000").unwrap(), "eine Milliarde");
/// assert_eq!(convert(""), Err(Error::EmptyInput));
/// ```
pub fn convert(input: &str) -> Result<String, Error> {
    Converter::default().convert(input)
}
