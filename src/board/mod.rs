//! Types for cells, digits and other things on a sudoku board
mod cell;
mod digit;
pub(crate) mod positions;
mod sudoku;

pub(crate) use self::{cell::Cell, digit::Digit};

pub use self::sudoku::Sudoku;
