//! In-place solving of raw cell buffers with a discrete result taxonomy.

use crate::consts::N_CELLS;
use crate::solver::CandidateBoard;

/// Every way a call to [`solve_buffer`] can end.
///
/// The `Display` and `&'static str` conversions produce the traditional
/// constant strings, e.g. `"Invalid puzzle"`, so callers that report results
/// as text never format anything themselves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
pub enum SolveOutcome {
    /// The buffer now holds the first-found completion.
    #[strum(serialize = "Solved")]
    Solved,
    /// Two given digits share a row, column or block.
    #[strum(serialize = "Invalid puzzle")]
    InvalidPuzzle,
    /// The buffer does not contain exactly 81 cells.
    #[strum(serialize = "Invalid size")]
    InvalidSize,
    /// The givens are locally consistent, but no completion exists.
    #[strum(serialize = "No solution found")]
    NoSolution,
}

impl SolveOutcome {
    /// Returns the constant result string for this outcome.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Solves a sudoku in place.
///
/// `buffer` holds 81 cell values in row-major order, 0 (or any value outside
/// 1..=9) for empty cells. Three checks short-circuit in strict order: a
/// buffer whose length is not exactly 81 is rejected before anything is read,
/// directly conflicting givens are rejected before any search, and only then
/// does the solver run. On [`SolveOutcome::Solved`] the 81 confirmed digits
/// are written back into `buffer`; on every other outcome the buffer is left
/// untouched.
///
/// ```
/// use sudok::{solve_buffer, SolveOutcome};
///
/// let mut buffer = [0; 81]; // the empty grid has plenty of solutions
/// assert_eq!(solve_buffer(&mut buffer), SolveOutcome::Solved);
/// assert!(buffer.iter().all(|&value| (1..=9).contains(&value)));
/// ```
pub fn solve_buffer(buffer: &mut [u8]) -> SolveOutcome {
    if buffer.len() != N_CELLS {
        return SolveOutcome::InvalidSize;
    }
    let board = CandidateBoard::from_digits(buffer);
    if board.check_all_houses().is_err() {
        return SolveOutcome::InvalidPuzzle;
    }
    match board.solve_one() {
        Some(solution) => {
            buffer.copy_from_slice(&solution.extract_solution().to_bytes());
            SolveOutcome::Solved
        }
        None => SolveOutcome::NoSolution,
    }
}
