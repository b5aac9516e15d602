use super::lexicon::{AND, HUNDRED, ONE_PREFIX, TEENS, TENS, UNITS};

/// Error returned when a number does not fit into a single three-digit group.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
#[error("{0} is not in the range 0..=999")]
pub struct OutOfRange(pub u16);

/// Spells out a number in the range 0-999.
///
/// Hundreds, tens and units are joined without separators, as German writes
/// numbers below one million as a single word.
///
/// # Errors
///
/// Returns [`OutOfRange`] if `n` is greater than 999.
///
/// # Examples
///
/// ```
/// use zahlwort::small_number_to_words;
///
/// assert_eq!(small_number_to_words(0).unwrap(), "null");
/// assert_eq!(small_number_to_words(21).unwrap(), "einundzwanzig");
/// assert_eq!(small_number_to_words(111).unwrap(), "einhundertelf");
/// ```
pub fn small_number_to_words(n: u16) -> Result<String, OutOfRange> {
    if n > 999 {
        return Err(OutOfRange(n));
    }
    if n == 0 {
        return Ok(UNITS[0].to_string());
    }

    let hundred = usize::from(n / 100);
    let remainder = usize::from(n % 100);
    let mut words = String::new();

    match hundred {
        0 => {}
        1 => {
            words.push_str(ONE_PREFIX);
            words.push_str(HUNDRED);
        }
        _ => {
            words.push_str(UNITS[hundred]);
            words.push_str(HUNDRED);
        }
    }

    match remainder {
        0 => {}
        // "eins" keeps its final s after a hundred as well: "einhunderteins"
        1..=9 => words.push_str(UNITS[remainder]),
        10..=19 => words.push_str(TEENS[remainder - 10]),
        _ => {
            let ten = remainder / 10;
            let unit = remainder % 10;
            match unit {
                0 => {}
                1 => {
                    words.push_str(ONE_PREFIX);
                    words.push_str(AND);
                }
                _ => {
                    words.push_str(UNITS[unit]);
                    words.push_str(AND);
                }
            }
            words.push_str(TENS[ten]);
        }
    }

    Ok(words)
}
