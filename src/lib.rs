#![warn(missing_docs)]
//! An iterative backtracking sudoku solver.
//!
//! ## Overview
//!
//! `sudok` solves standard 9×9 sudokus with a bitmask board representation:
//! every cell is a 10-bit state (a confirmed flag plus one candidate bit per
//! digit), constraints are propagated to a fixpoint across all rows, columns
//! and blocks, and remaining choices are searched with an explicit,
//! depth-bounded stack instead of recursion.
//!
//! ## Example
//!
//! ```
//! use sudok::{solve_buffer, SolveOutcome, Sudoku};
//!
//! let line = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
//!
//! // Value-level API
//! let sudoku = Sudoku::from_str_line(line).unwrap();
//! if let Some(solution) = sudoku.solve_one() {
//!     println!("{}", solution.display_block());
//! }
//!
//! // In-place buffer API with a discrete outcome instead of errors
//! let mut buffer = Sudoku::from_str_line(line).unwrap().to_bytes();
//! assert_eq!(solve_buffer(&mut buffer), SolveOutcome::Solved);
//! ```

mod bitset;
mod board;
mod consts;
mod helper;
mod outcome;
mod solver;

/// Contains errors returned when constructing a [`Sudoku`]
pub mod errors;

pub use crate::board::Sudoku;
pub use crate::outcome::{solve_buffer, SolveOutcome};
