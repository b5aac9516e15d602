//! Splitting a digit string into base-1000 groups.

use std::iter::FusedIterator;

use super::DigitString;

/// One three-digit group of a number.
///
/// `index` 0 is the least significant group (ones), 1 the thousands, 2 the
/// millions and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    /// Value of the group, 0-999.
    pub value: u16,
    /// Position of the group counted from the least significant end.
    pub index: usize,
}

impl Group {
    /// Creates a group.
    #[must_use]
    pub const fn new(value: u16, index: usize) -> Self {
        Self { value, index }
    }
}

/// Iterator over the groups of a [`DigitString`], most significant first.
///
/// Created by [`split_groups`].
#[derive(Debug, Clone)]
pub struct Groups<'a> {
    rest: &'a [u8],
    next_len: usize,
}

/// Splits a digit string into base-1000 groups, most significant first.
///
/// The first group holds the 1-3 leftover leading digits, every following
/// group exactly three. Leading zeros simply produce zero-valued groups.
///
/// # Examples
///
/// ```
/// use zahlwort::{split_groups, DigitString, Group};
///
/// let digits: DigitString = "1234567".parse().unwrap();
/// let groups: Vec<Group> = split_groups(&digits).collect();
///
/// assert_eq!(
///     groups,
///     [Group::new(1, 2), Group::new(234, 1), Group::new(567, 0)]
/// );
/// ```
#[must_use]
pub fn split_groups(digits: &DigitString) -> Groups<'_> {
    Groups {
        rest: digits.as_bytes(),
        next_len: (digits.len() - 1) % 3 + 1,
    }
}

impl Iterator for Groups<'_> {
    type Item = Group;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let (head, rest) = self.rest.split_at(self.next_len);
        self.rest = rest;
        self.next_len = 3;

        let value = head
            .iter()
            .fold(0, |acc, digit| acc * 10 + u16::from(digit - b'0'));

        Some(Group::new(value, self.rest.len() / 3))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for Groups<'_> {
    fn len(&self) -> usize {
        self.rest.len().div_ceil(3)
    }
}

impl FusedIterator for Groups<'_> {}
