//! Fixed German and Latin word fragments.
//!
//! Everything here is read-only data shared by the small-number namer and
//! the scale-name generator.

/// Names of the digits 0-9 as standalone words.
pub const UNITS: [&str; 10] = [
    "null", "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun",
];

/// Names of 10-19.
pub const TEENS: [&str; 10] = [
    "zehn",
    "elf",
    "zwölf",
    "dreizehn",
    "vierzehn",
    "fünfzehn",
    "sechzehn",
    "siebzehn",
    "achtzehn",
    "neunzehn",
];

/// Names of the multiples of ten, indexed by the tens digit.
pub const TENS: [&str; 10] = [
    "", "zehn", "zwanzig", "dreißig", "vierzig", "fünfzig", "sechzig", "siebzig", "achtzig",
    "neunzig",
];

/// Suffix appended to the hundreds digit (`"einhundert"`, `"zweihundert"`).
pub const HUNDRED: &str = "hundert";

/// Suffix for the thousands group.
pub const THOUSAND: &str = "tausend";

/// Joins the unit and the tens in two-digit numbers (`"zweiundzwanzig"`).
pub const AND: &str = "und";

/// Combining form of one, used before `"und"`, `"hundert"` and `"tausend"`.
pub const ONE_PREFIX: &str = "ein";

/// Feminine singular article used in front of a scale name (`"eine Million"`).
pub const ONE_FEMININE: &str = "eine";

/// Stems of the first nine `-illion` orders. Index 0 is never used.
pub const FIRST_ILLIONS: [&str; 10] = [
    "-", "Mi", "Bi", "Tri", "Quadri", "Quinti", "Sexti", "Septi", "Okti", "Noni",
];

/// Latin unit prefixes for `-illion` orders of ten and above.
pub const NAME_UNIT: [&str; 10] = [
    "", "un", "do", "tre", "quattuor", "quin", "se", "septe", "okto", "nove",
];

/// Latin tens fragments.
pub const NAME_TEN: [&str; 10] = [
    "",
    "dezi",
    "viginti",
    "triginta",
    "quadraginta",
    "quinquaginta",
    "sexaginta",
    "septuaginta",
    "oktoginta",
    "nonaginta",
];

/// Latin hundreds fragments.
pub const NAME_HUNDRED: [&str; 10] = [
    "",
    "zenti",
    "duzenti",
    "trezenti",
    "quadringenti",
    "quingenti",
    "seszenti",
    "septingenti",
    "oktingenti",
    "nongenti",
];

const NO_CHANGE: [&str; 10] = ["", "", "", "", "", "", "", "", "", ""];

/// Euphonic letter inserted after the unit prefix when a tens fragment
/// follows, indexed `[unit][ten]`.
///
/// Only `tre`, `se`, `septe` and `nove` ever change.
pub const CHANGE_AT_TEN: [[&str; 10]; 10] = [
    NO_CHANGE,
    NO_CHANGE,
    NO_CHANGE,
    ["", "", "s", "s", "s", "s", "", "", "s", ""],
    NO_CHANGE,
    NO_CHANGE,
    ["", "", "s", "s", "s", "s", "", "", "x", ""],
    ["", "n", "m", "n", "n", "n", "n", "n", "m", ""],
    NO_CHANGE,
    ["", "n", "m", "n", "n", "n", "n", "n", "m", ""],
];

/// Euphonic letter inserted after the unit prefix when a hundreds fragment
/// follows directly (tens digit zero), indexed `[unit][hundred]`.
pub const CHANGE_AT_HUNDRED: [[&str; 10]; 10] = [
    NO_CHANGE,
    NO_CHANGE,
    NO_CHANGE,
    ["", "s", "", "s", "s", "s", "", "", "s", ""],
    NO_CHANGE,
    NO_CHANGE,
    ["", "x", "", "s", "s", "s", "", "", "x", ""],
    ["", "n", "n", "n", "n", "n", "n", "n", "m", ""],
    NO_CHANGE,
    ["", "n", "n", "n", "n", "n", "n", "n", "m", ""],
];

/// Ending of scale names for even group indices.
pub const ILLION: &str = "illion";

/// Ending of scale names for odd group indices.
pub const ILLIARDE: &str = "illiarde";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_is_eins() {
        assert_eq!(UNITS[1], "eins");
        assert!(UNITS[1].starts_with(ONE_PREFIX));
    }

    #[test]
    fn only_four_units_have_euphonic_changes() {
        for unit in 0..10 {
            let changes = CHANGE_AT_TEN[unit]
                .iter()
                .chain(CHANGE_AT_HUNDRED[unit].iter())
                .any(|change| !change.is_empty());
            assert_eq!(changes, matches!(unit, 3 | 6 | 7 | 9), "unit {unit}");
        }
    }

    #[test]
    fn euphonic_changes_are_single_letters() {
        for change in CHANGE_AT_TEN.iter().chain(CHANGE_AT_HUNDRED.iter()).flatten() {
            assert!(["", "s", "x", "n", "m"].contains(change));
        }
    }
}
