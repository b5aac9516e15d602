//! German number words
//!
//! Spells out arbitrarily large non-negative integers, given as decimal digit
//! strings, in German using the long scale (Million, Milliarde, Billion,
//! Billiarde, ...). Scale units beyond the Nonilliarde are generated with a
//! Conway-Wechsler-style Latin naming scheme, up to numbers below 10^6000.
//!
//! ```
//! assert_eq!(zahlwort::convert("1234").unwrap(), "eintausendzweihundertvierunddreißig");
//! assert_eq!(zahlwort::convert("2000000").unwrap(), "zwei Millionen");
//! ```

pub mod domain;
pub use domain::{
    assemble, scale_name, small_number_to_words, split_groups, validate, Config, DigitString,
    Error, Group, ScaleError, ScaleName,
};

mod converter;
pub use converter::{convert, Converter};
