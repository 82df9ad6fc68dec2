//! Errors that may be encountered when constructing a [`Sudoku`](crate::Sudoku)

use crate::board::positions::{block, col, row};

/// An invalid sudoku entry encountered during parsing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidEntry {
    /// Cell number goes from 0..=80, 0..=8 for the first row, 9..=17 for the 2nd and so on
    pub cell: u8,
    /// The parsed invalid char
    pub ch: char,
}

impl InvalidEntry {
    /// Row index from 0..=8, topmost row is 0
    #[inline]
    pub fn row(self) -> u8 {
        row(self.cell)
    }

    /// Column index from 0..=8, leftmost col is 0
    #[inline]
    pub fn col(self) -> u8 {
        col(self.cell)
    }

    /// Block index from 0..=8, numbering from left to right, top to bottom
    #[inline]
    pub fn block(self) -> u8 {
        block(self.cell)
    }
}

/// An error caused when parsing a sudoku in line format
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LineParseError {
    /// Accepted values are the numbers 1..=9 and '0', '.' or '_' for empty cells
    #[error("cell {} contains invalid character '{}'", .0.cell, .0.ch)]
    InvalidEntry(InvalidEntry),
    /// Fewer than 81 cells were supplied. Contains the number of cells found.
    #[error("line contains {0} cells instead of required 81")]
    NotEnoughCells(u8),
    /// 82 or more valid cell characters were supplied
    #[error("line contains more than 81 cells or is missing the comment delimiter")]
    TooManyCells,
    /// Comments must be separated from the cells by a space or tab
    #[error("missing comment delimiter")]
    MissingCommentDelimiter,
}

/// Error for [`Sudoku::from_bytes`](crate::Sudoku::from_bytes)
#[derive(Debug, thiserror::Error)]
#[error("byte array contains entries >9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Sudoku::from_bytes_slice`](crate::Sudoku::from_bytes_slice)
#[derive(Debug, thiserror::Error)]
pub enum FromBytesSliceError {
    /// Slice is not 81 long
    #[error("byte slice should have length 81, found {0}")]
    WrongLength(usize),
    /// Slice contains invalid entries
    #[error(transparent)]
    FromBytesError(#[from] FromBytesError),
}
