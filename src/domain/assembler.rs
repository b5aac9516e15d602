//! Joining group words and scale units into the final German text.

use tracing::trace;

use super::{
    lexicon::{ONE_FEMININE, ONE_PREFIX, THOUSAND, UNITS},
    scale_name, small_number_to_words, Config, Error, Group,
};

/// Assembles the German words for a sequence of groups.
///
/// Groups are expected most significant first, as produced by
/// [`split_groups`](super::split_groups). The rules per group are:
///
/// - zero groups above the ones are skipped;
/// - the ones group is written as is, and contributes `"null"` only when
///   nothing else was written;
/// - the thousands compound directly: `"eintausend"`, `"zweitausend"`;
/// - larger groups use a separate, capitalised scale name with `"eine"` in
///   the singular and a plural ending otherwise (`"eine Million "`,
///   `"zwei Milliarden "`).
///
/// Either the complete text is returned or an error; never partial output.
///
/// # Errors
///
/// - [`Error::TooLarge`] if a non-zero group lies at or beyond
///   [`Config::max_group_count`], or the scale name cannot be generated.
/// - [`Error::Internal`] if a group value is above 999 or the generator fails
///   unexpectedly.
pub fn assemble<I>(groups: I, config: &Config) -> Result<String, Error>
where
    I: IntoIterator<Item = Group>,
{
    let mut words = String::new();

    for Group { value, index } in groups {
        if value == 0 && index > 0 {
            continue;
        }
        if index >= config.max_group_count() {
            return Err(Error::TooLarge {
                max_digits: config.max_digits(),
            });
        }

        trace!(value, index, "naming group");

        match (index, value) {
            (0, 0) => {
                if words.is_empty() {
                    words.push_str(UNITS[0]);
                }
            }
            (0, _) => words.push_str(&small_number_to_words(value)?),
            (1, 1) => {
                words.push_str(ONE_PREFIX);
                words.push_str(THOUSAND);
            }
            (1, _) => {
                words.push_str(&small_number_to_words(value)?);
                words.push_str(THOUSAND);
            }
            (_, 1) => {
                let name = scale_name(index)?;
                words.push_str(ONE_FEMININE);
                words.push(' ');
                words.push_str(name.as_str());
                words.push(' ');
            }
            _ => {
                let name = scale_name(index)?;
                words.push_str(&small_number_to_words(value)?);
                words.push(' ');
                words.push_str(&name.plural());
                words.push(' ');
            }
        }
    }

    if config.trim_trailing_whitespace {
        words.truncate(words.trim_end().len());
    }

    Ok(words)
}
