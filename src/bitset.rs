//! Fixed-size bitset of candidate digits
//!
//! Candidate bookkeeping is all mask manipulation, but raw `u16`s are easy to
//! mix up with cell states. `DigitSet` wraps the candidate portion of a cell
//! state in a small type-safe set: bit `d` set ⇔ digit `d` still possible.
//! Bit 0 is never part of a `DigitSet`; it belongs to the cell's confirmed
//! flag.

use crate::board::Digit;
use crate::helper::Unsolvable;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// Set of digits, one bit per digit at the bit position of its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct DigitSet(u16);

/// Iterator over the digits in a [`DigitSet`], in ascending order.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Iter(DigitSet);

/// Return value of [`DigitSet::unique`] for sets with no element left.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Empty;

impl From<Empty> for Unsolvable {
    fn from(_: Empty) -> Unsolvable {
        Unsolvable
    }
}

macro_rules! impl_bitops {
    ( $( $trait:ident, $fn_name:ident);* $(;)* ) => {
        $(
            impl $trait for DigitSet {
                type Output = Self;

                #[inline(always)]
                fn $fn_name(self, other: Self) -> Self {
                    DigitSet($trait::$fn_name(self.0, other.0))
                }
            }
        )*
    };
}

macro_rules! impl_bitops_assign {
    ( $( $trait:ident, $fn_name:ident);* $(;)* ) => {
        $(
            impl $trait for DigitSet {
                #[inline(always)]
                fn $fn_name(&mut self, other: Self) {
                    $trait::$fn_name(&mut self.0, other.0)
                }
            }
        )*
    };
}

impl_bitops!(
    BitAnd, bitand;
    BitOr, bitor;
);

impl_bitops_assign!(
    BitAndAssign, bitand_assign;
    BitOrAssign, bitor_assign;
);

impl Not for DigitSet {
    type Output = Self;
    fn not(self) -> Self {
        Self::ALL.without(self)
    }
}

impl DigitSet {
    /// Set containing all nine digits.
    pub(crate) const ALL: DigitSet = DigitSet(0b11_1111_1110);

    /// Empty set.
    pub(crate) const NONE: DigitSet = DigitSet(0);

    /// Construct a set from a raw candidate mask.
    ///
    /// # Panic
    /// Panics, if the mask contains bits outside [`DigitSet::ALL`]
    pub(crate) fn from_bits(mask: u16) -> Self {
        assert!(mask & !Self::ALL.0 == 0);
        DigitSet(mask)
    }

    /// Returns the raw integer backing the set.
    pub(crate) fn bits(self) -> u16 {
        self.0
    }

    /// Returns the digits in this set that aren't present in `other`.
    pub(crate) fn without(self, other: Self) -> Self {
        DigitSet(self.0 & !other.0)
    }

    /// Checks if `self` contains `digit`.
    #[allow(unused)]
    pub(crate) fn contains(self, digit: Digit) -> bool {
        self.0 & digit.as_set().0 != 0
    }

    /// Returns the number of digits in this set.
    pub(crate) fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    pub(crate) fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the only digit in this set, iff exactly 1 digit exists.
    /// `Err(Empty)` for no digits, `Ok(None)` for more than one.
    pub(crate) fn unique(self) -> Result<Option<Digit>, Empty> {
        match self.len() {
            0 => Err(Empty),
            1 => Ok(Some(Digit::new(self.0.trailing_zeros() as u8))),
            _ => Ok(None),
        }
    }

    /// Removes and returns the smallest digit in the set, if any.
    pub(crate) fn pop_lowest(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        let lowest_bit = self.0 & self.0.wrapping_neg();
        self.0 ^= lowest_bit;
        Some(Digit::new(lowest_bit.trailing_zeros() as u8))
    }
}

impl Digit {
    /// Returns a `DigitSet` with only the bit of this digit set.
    pub(crate) fn as_set(self) -> DigitSet {
        DigitSet(1 << self.get())
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self)
    }
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        (self.0).pop_lowest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_lowest_ascending() {
        let mut set = DigitSet::from_bits(0b10_0101_0010);
        let digits: Vec<u8> = std::iter::from_fn(|| set.pop_lowest())
            .map(Digit::get)
            .collect();
        assert_eq!(digits, [1, 4, 6, 9]);
        assert!(set.is_empty());
    }

    #[test]
    fn unique_distinguishes_cardinalities() {
        assert_eq!(DigitSet::NONE.unique(), Err(Empty));
        assert_eq!(Digit::new(7).as_set().unique(), Ok(Some(Digit::new(7))));
        assert_eq!(DigitSet::ALL.unique(), Ok(None));
    }

    #[test]
    fn without_strips_only_shared_digits() {
        let set = DigitSet::ALL.without(Digit::new(3).as_set());
        assert_eq!(set.len(), 8);
        assert!(!set.contains(Digit::new(3)));
        assert!(set.contains(Digit::new(4)));
    }
}
