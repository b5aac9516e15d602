//! Domain model for spelling out numbers in German.
//!
//! The pipeline runs validator -> group splitter -> word assembler, with the
//! small-number namer and the scale-name generator doing the naming and the
//! lexicon holding every fixed word fragment.

mod assembler;
pub use assembler::assemble;

mod config;
pub use config::Config;

/// Validated digit strings.
pub mod digit_string;
pub use digit_string::{validate, DigitString};

mod error;
pub use error::Error;

/// Base-1000 groups.
pub mod group;
pub use group::{split_groups, Group, Groups};

/// Fixed German and Latin word fragments.
pub mod lexicon;

/// Scale-unit name generation.
pub mod scale_name;
pub use scale_name::{scale_name, Family, ScaleError, ScaleName, MAX_GROUP_COUNT};

mod small_number;
pub use small_number::{small_number_to_words, OutOfRange};
