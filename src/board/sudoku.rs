use crate::consts::N_CELLS;
use crate::errors::{FromBytesError, FromBytesSliceError, InvalidEntry, LineParseError};
use crate::solver::CandidateBoard;
use std::fmt;

/// The main structure exposing all the functionality of the library.
///
/// A `Sudoku` holds 81 cell values in row-major order, `0` for an empty cell
/// and `1..=9` for a given or solved digit. It says nothing about candidates;
/// those live in the solving engine.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Sudoku(pub(crate) [u8; N_CELLS]);

impl Sudoku {
    /// Creates a sudoku from a byte array. Empty cells are denoted by 0, clues by the digits 1..=9.
    pub fn from_bytes(bytes: [u8; N_CELLS]) -> Result<Sudoku, FromBytesError> {
        if bytes.iter().any(|&byte| byte > 9) {
            return Err(FromBytesError(()));
        }
        Ok(Sudoku(bytes))
    }

    /// Creates a sudoku from a byte slice. The slice must have length 81.
    /// Empty cells are denoted by 0, clues by the digits 1..=9.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Sudoku, FromBytesSliceError> {
        if bytes.len() != N_CELLS {
            return Err(FromBytesSliceError::WrongLength(bytes.len()));
        }
        let mut array = [0; N_CELLS];
        array.copy_from_slice(bytes);
        Ok(Sudoku::from_bytes(array)?)
    }

    /// Reads a sudoku in line format: 81 characters, row by row, where the
    /// digits 1..=9 are clues and `'0'`, `'.'` or `'_'` mark empty cells.
    /// Anything after the 81st cell is treated as a comment, if separated by
    /// a space or tab.
    pub fn from_str_line(s: &str) -> Result<Sudoku, LineParseError> {
        let mut grid = [0; N_CELLS];
        let mut n_cells = 0;
        let mut chars = s.chars();
        while n_cells < N_CELLS {
            let ch = match chars.next() {
                Some(ch) => ch,
                None => return Err(LineParseError::NotEnoughCells(n_cells as u8)),
            };
            grid[n_cells] = match ch {
                '1'..='9' => ch as u8 - b'0',
                '0' | '.' | '_' => 0,
                _ => {
                    return Err(LineParseError::InvalidEntry(InvalidEntry {
                        cell: n_cells as u8,
                        ch,
                    }))
                }
            };
            n_cells += 1;
        }
        match chars.next() {
            None | Some(' ') | Some('\t') => Ok(Sudoku(grid)),
            Some('0'..='9') | Some('.') | Some('_') => Err(LineParseError::TooManyCells),
            Some(_) => Err(LineParseError::MissingCommentDelimiter),
        }
    }

    /// Returns the cell values in row-major order, 0 for empty cells.
    pub fn to_bytes(self) -> [u8; N_CELLS] {
        self.0
    }

    /// Returns the number of clues, i.e. non-empty cells.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|&&byte| byte != 0).count() as u8
    }

    /// Try to find a solution to the sudoku and fill it in. Returns true if a solution was found.
    /// This is a convenience interface. Use [`solve_one`](Sudoku::solve_one) to keep the original.
    pub fn solve(&mut self) -> bool {
        match self.solve_one() {
            Some(solution) => {
                *self = solution;
                true
            }
            None => false,
        }
    }

    /// Finds a solution to the sudoku. If multiple solutions exist, it stops at the first.
    /// Returns `None` if the clues conflict directly or no completion exists.
    pub fn solve_one(self) -> Option<Sudoku> {
        let board = CandidateBoard::from_sudoku(&self);
        board.check_all_houses().ok()?;
        board.solve_one().map(|solved| solved.extract_solution())
    }

    /// Checks whether the sudoku is completely and correctly filled.
    pub fn is_solved(&self) -> bool {
        let board = CandidateBoard::from_sudoku(self);
        board.is_solved() && board.check_all_houses().is_ok()
    }

    /// Returns a value that formats the sudoku as a 9-line grid with `.` for
    /// empty cells.
    pub fn display_block(&self) -> BlockDisplay<'_> {
        BlockDisplay(self)
    }
}

/// Line format: 81 characters, `.` for empty cells.
impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &value in self.0.iter() {
            match value {
                0 => f.write_str(".")?,
                digit => write!(f, "{}", digit)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Sudoku({})", self)
    }
}

/// Helper struct for printing a [`Sudoku`] in block format. See [`Sudoku::display_block`].
pub struct BlockDisplay<'a>(&'a Sudoku);

impl fmt::Display for BlockDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (cell, &value) in (self.0).0.iter().enumerate() {
            if cell != 0 {
                match cell % 9 {
                    0 => f.write_str("\n")?,
                    _ => f.write_str(" ")?,
                }
            }
            match value {
                0 => f.write_str(".")?,
                digit => write!(f, "{}", digit)?,
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Sudoku {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Sudoku {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LineVisitor;

        impl<'de> serde::de::Visitor<'de> for LineVisitor {
            type Value = Sudoku;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a sudoku in line format")
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Sudoku, E> {
                Sudoku::from_str_line(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(LineVisitor)
    }
}
