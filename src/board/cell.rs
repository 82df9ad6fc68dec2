use crate::bitset::DigitSet;
use crate::board::Digit;

const CONFIRMED_FLAG: u16 = 0b1;

/// A single sudoku cell, encoded as a bitmask.
///
/// Bit 0 is the confirmed flag, bits 1–9 are the candidate digits. A cell
/// with the flag set must have exactly one candidate bit; a cell without any
/// candidate bit is a contradiction regardless of the flag.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub(crate) struct Cell(u16);

impl Cell {
    /// An empty cell: no flag, all nine candidate bits.
    pub(crate) fn unconstrained() -> Cell {
        Cell(DigitSet::ALL.bits())
    }

    /// A cell confirmed to `digit`.
    pub(crate) fn from_digit(digit: Digit) -> Cell {
        Cell(digit.as_set().bits() | CONFIRMED_FLAG)
    }

    /// An unconfirmed cell restricted to `candidates`.
    ///
    /// The caller must have ruled out the empty and single-candidate cases
    /// beforehand; those become a contradiction or a confirmed cell instead.
    pub(crate) fn with_candidates(candidates: DigitSet) -> Cell {
        debug_assert!(candidates.len() > 1);
        Cell(candidates.bits())
    }

    pub(crate) fn is_confirmed(self) -> bool {
        self.0 & CONFIRMED_FLAG != 0
    }

    /// The candidate set, i.e. the state with the confirmed flag masked off.
    pub(crate) fn candidates(self) -> DigitSet {
        DigitSet::from_bits(self.0 & !CONFIRMED_FLAG)
    }

    /// Checks the cell-local invariants.
    pub(crate) fn is_valid(self) -> bool {
        if self.0 == 0 || self.0 == CONFIRMED_FLAG {
            return false;
        }
        !(self.is_confirmed() && self.candidates().len() > 1)
    }

    /// Returns the confirmed digit, if any.
    ///
    /// Verifies that exactly one candidate bit is set before scanning for its
    /// position; a confirmed cell with zero or several candidates yields
    /// `None` rather than a bogus digit.
    pub(crate) fn digit(self) -> Option<Digit> {
        if !self.is_confirmed() {
            return None;
        }
        match self.candidates().unique() {
            Ok(digit) => digit,
            Err(_) => None,
        }
    }
}
