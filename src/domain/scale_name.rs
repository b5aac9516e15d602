//! Names of the long-scale units (Million, Milliarde, Billion, ...).
//!
//! Group index `i` (counting base-1000 groups from the least significant one)
//! belongs to the `-illion` order `i / 2`. Even indices take the `-illion`
//! ending, odd indices the `-illiarde` ending:
//!
//! | index | name        |
//! |-------|-------------|
//! | 2     | Million     |
//! | 3     | Milliarde   |
//! | 4     | Billion     |
//! | 5     | Billiarde   |
//! | 40    | Vigintillion |
//!
//! The first nine orders come from a fixed list. Orders 10 to 999 are built
//! from Latin unit, ten and hundred fragments in the style of the
//! Conway-Wechsler system, with a euphonic letter between the unit and the
//! following fragment where Latin requires one (`tres`, `sex`, `septen`,
//! `novem`).

use std::fmt;

use super::lexicon::{
    CHANGE_AT_HUNDRED, CHANGE_AT_TEN, FIRST_ILLIONS, ILLIARDE, ILLION, NAME_HUNDRED, NAME_TEN,
    NAME_UNIT,
};

/// Number of base-1000 groups the generator can name.
///
/// Index 1999 is the last group with a name (`-illion` order 999), so numbers
/// must have fewer than `3 * MAX_GROUP_COUNT` digits.
pub const MAX_GROUP_COUNT: usize = 2000;

/// Errors raised by the scale-name generator.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum ScaleError {
    /// The group index lies beyond the last nameable `-illion` order.
    #[error("no scale name for group {0}: the -illion order must be below 1000")]
    TooLarge(usize),

    /// The generator produced no usable name. This signals a defect in the
    /// lexicon or a caller asking for a group below the Million.
    #[error("scale name generator failed for group {group_index}: {reason}")]
    Internal {
        /// The requested group index.
        group_index: usize,
        /// What went wrong.
        reason: &'static str,
    },
}

/// The ending family of a scale name, decided by the parity of the group
/// index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// Even group indices: Million, Billion, ...
    Illion,
    /// Odd group indices: Milliarde, Billiarde, ...
    Illiarde,
}

impl Family {
    /// Returns the family for the given group index.
    #[must_use]
    pub const fn of(group_index: usize) -> Self {
        if group_index % 2 == 0 {
            Self::Illion
        } else {
            Self::Illiarde
        }
    }

    /// The singular ending.
    #[must_use]
    pub const fn ending(self) -> &'static str {
        match self {
            Self::Illion => ILLION,
            Self::Illiarde => ILLIARDE,
        }
    }

    /// What is appended to the singular to form the plural.
    #[must_use]
    pub const fn plural_suffix(self) -> &'static str {
        match self {
            Self::Illion => "en",
            Self::Illiarde => "n",
        }
    }
}

/// A generated scale name such as `Million` or `Quattuorquinquagintilliarde`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleName {
    name: String,
    family: Family,
}

impl ScaleName {
    /// The singular form, e.g. `Milliarde`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// The ending family of this name.
    #[must_use]
    pub const fn family(&self) -> Family {
        self.family
    }

    /// The plural form, e.g. `Milliarden`.
    #[must_use]
    pub fn plural(&self) -> String {
        format!("{}{}", self.name, self.family.plural_suffix())
    }
}

impl AsRef<str> for ScaleName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ScaleName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Generates the scale name of a base-1000 group.
///
/// # Errors
///
/// - [`ScaleError::TooLarge`] if `group_index / 2` is 1000 or more.
/// - [`ScaleError::Internal`] if `group_index` is below 2 (ones and
///   thousands have no generated name).
///
/// # Examples
///
/// ```
/// use zahlwort::scale_name;
///
/// assert_eq!(scale_name(2).unwrap().as_str(), "Million");
/// assert_eq!(scale_name(3).unwrap().plural(), "Milliarden");
/// assert_eq!(scale_name(40).unwrap().as_str(), "Vigintillion");
/// ```
pub fn scale_name(group_index: usize) -> Result<ScaleName, ScaleError> {
    if group_index < 2 {
        return Err(ScaleError::Internal {
            group_index,
            reason: "groups below the Million have no generated name",
        });
    }

    let stem = illion_stem(group_index / 2).ok_or(ScaleError::TooLarge(group_index))?;

    // The last letter of every stem is a vowel that the ending replaces.
    let mut chars = stem.chars();
    let (Some(first), Some(_)) = (chars.next(), chars.next_back()) else {
        return Err(ScaleError::Internal {
            group_index,
            reason: "stem is too short",
        });
    };

    let family = Family::of(group_index);
    let mut name = String::with_capacity(stem.len() + ILLIARDE.len());
    name.extend(first.to_uppercase());
    name.push_str(chars.as_str());
    name.push_str(family.ending());

    Ok(ScaleName { name, family })
}

/// Builds the stem of an `-illion` order, still carrying its final vowel.
/// Returns `None` from order 1000 onwards.
fn illion_stem(order: usize) -> Option<String> {
    match order {
        0..10 => Some(FIRST_ILLIONS[order].to_string()),
        10..1000 => {
            let unit = order % 10;
            let ten = (order / 10) % 10;
            let hundred = order / 100;

            let change = if ten == 0 {
                CHANGE_AT_HUNDRED[unit][hundred]
            } else {
                CHANGE_AT_TEN[unit][ten]
            };

            Some([NAME_UNIT[unit], change, NAME_TEN[ten], NAME_HUNDRED[hundred]].concat())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(2, "Million")]
    #[test_case(3, "Milliarde")]
    #[test_case(4, "Billion")]
    #[test_case(5, "Billiarde")]
    #[test_case(6, "Trillion")]
    #[test_case(8, "Quadrillion")]
    #[test_case(10, "Quintillion")]
    #[test_case(12, "Sextillion")]
    #[test_case(14, "Septillion")]
    #[test_case(16, "Oktillion")]
    #[test_case(18, "Nonillion")]
    #[test_case(19, "Nonilliarde")]
    #[test_case(20, "Dezillion")]
    #[test_case(21, "Dezilliarde")]
    #[test_case(22, "Undezillion")]
    #[test_case(24, "Dodezillion")]
    #[test_case(26, "Tredezillion")]
    #[test_case(34, "Septendezillion")]
    #[test_case(38, "Novendezillion")]
    #[test_case(40, "Vigintillion")]
    #[test_case(46, "Tresvigintillion")]
    #[test_case(52, "Sesvigintillion")]
    #[test_case(54, "Septemvigintillion")]
    #[test_case(60, "Trigintillion")]
    #[test_case(109, "Quattuorquinquagintilliarde")]
    #[test_case(120, "Sexagintillion")]
    #[test_case(172, "Sexoktogintillion")]
    #[test_case(200, "Zentillion")]
    #[test_case(202, "Unzentillion")]
    #[test_case(206, "Treszentillion")]
    #[test_case(212, "Sexzentillion")]
    #[test_case(214, "Septenzentillion")]
    #[test_case(400, "Duzentillion")]
    #[test_case(1614, "Septemoktingentillion")]
    #[test_case(1616, "Oktooktingentillion")]
    #[test_case(1998, "Novenonagintanongentillion")]
    #[test_case(1999, "Novenonagintanongentilliarde")]
    fn generates(group_index: usize, expected: &str) {
        assert_eq!(scale_name(group_index).unwrap().as_str(), expected);
    }

    #[test_case(2, "Millionen")]
    #[test_case(3, "Milliarden")]
    #[test_case(40, "Vigintillionen")]
    #[test_case(41, "Vigintilliarden")]
    fn pluralises(group_index: usize, expected: &str) {
        assert_eq!(scale_name(group_index).unwrap().plural(), expected);
    }

    #[test]
    fn ending_follows_parity() {
        for group_index in 2..=20 {
            let name = scale_name(group_index).unwrap();
            let ending = if group_index % 2 == 0 { ILLION } else { ILLIARDE };
            assert!(name.as_str().ends_with(ending), "{name}");
            assert!(name.as_str().starts_with(char::is_uppercase), "{name}");
        }
    }

    #[test]
    fn every_supported_index_has_a_capitalised_name() {
        for group_index in 2..MAX_GROUP_COUNT {
            let name = scale_name(group_index).unwrap();
            assert!(name.as_str().starts_with(char::is_uppercase), "{name}");
            assert!(name.as_str().ends_with(Family::of(group_index).ending()));
        }
    }

    #[test]
    fn both_families_share_a_stem() {
        for group_index in (2..MAX_GROUP_COUNT).step_by(2) {
            let illion = scale_name(group_index).unwrap();
            let illiarde = scale_name(group_index + 1).unwrap();
            assert_eq!(
                illion.as_str().trim_end_matches(ILLION),
                illiarde.as_str().trim_end_matches(ILLIARDE)
            );
        }
    }

    #[test_case(MAX_GROUP_COUNT)]
    #[test_case(MAX_GROUP_COUNT + 1)]
    #[test_case(usize::MAX)]
    fn too_large(group_index: usize) {
        assert_eq!(scale_name(group_index), Err(ScaleError::TooLarge(group_index)));
    }

    #[test_case(0)]
    #[test_case(1)]
    fn below_the_million_is_internal_error(group_index: usize) {
        assert!(matches!(
            scale_name(group_index),
            Err(ScaleError::Internal { .. })
        ));
    }

    #[test]
    fn family_of_index() {
        assert_eq!(Family::of(2), Family::Illion);
        assert_eq!(Family::of(3), Family::Illiarde);
        assert_eq!(scale_name(7).unwrap().family(), Family::Illiarde);
    }
}
