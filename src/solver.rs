//! The solving engine: constraint propagation over candidate bitmasks plus
//! iterative backtracking.
//!
//! Solving alternates two phases. Deduction strips confirmed digits from the
//! candidate sets of their house neighbors until nothing changes anymore;
//! cells left with a single candidate become confirmed on the spot (naked
//! singles). When deduction stalls, the search guesses a digit in the
//! unconfirmed cell with the fewest candidates and repeats, keeping its
//! alternatives in an explicit stack of board snapshots rather than on the
//! call stack. Contradictions unwind by popping; they are never errors.

use crate::bitset::DigitSet;
use crate::board::positions::house_cells;
use crate::board::{Cell, Digit, Sudoku};
use crate::consts::{MAX_SEARCH_DEPTH, N_CELLS, N_HOUSES};
use crate::helper::Unsolvable;
use crunchy::unroll;

/// Result of running deduction to its fixpoint: either every cell is
/// confirmed, or search has to branch on the returned cell index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Deduction {
    Solved,
    Branch(u8),
}

/// One level of the backtracking stack: the board as it looked when the
/// guess was made, the cell guessed on and the candidates not yet tried
/// there. Frames exist only for guesses, never for deduced digits.
#[derive(Copy, Clone)]
struct Frame {
    snapshot: CandidateBoard,
    target: u8,
    untried: DigitSet,
}

/// An 81-cell board in bitmask representation.
#[derive(Copy, Clone, PartialEq, Eq)]
pub(crate) struct CandidateBoard {
    cells: [Cell; N_CELLS],
}

impl CandidateBoard {
    /// Loads a board from validated cell values (0 = empty).
    pub(crate) fn from_sudoku(sudoku: &Sudoku) -> Self {
        Self::from_digits(&sudoku.0)
    }

    /// Loads a board from raw cell values. Values outside 1..=9 are treated
    /// as empty cells with the full candidate set.
    pub(crate) fn from_digits(digits: &[u8]) -> Self {
        debug_assert!(digits.len() == N_CELLS);
        let mut cells = [Cell::unconstrained(); N_CELLS];
        for (cell, &value) in cells.iter_mut().zip(digits.iter()) {
            if let Some(digit) = Digit::new_checked(value) {
                *cell = Cell::from_digit(digit);
            }
        }
        CandidateBoard { cells }
    }

    /// Returns the solved grid. Unconfirmed or broken cells read as 0;
    /// callers only extract after a successful solve.
    pub(crate) fn extract_solution(&self) -> Sudoku {
        let mut solution = [0; N_CELLS];
        for (value, cell) in solution.iter_mut().zip(self.cells.iter()) {
            if let Some(digit) = cell.digit() {
                *value = digit.get();
            }
        }
        Sudoku(solution)
    }

    /// Fails if two confirmed cells of the house share a digit.
    fn check_house(&self, house: u8) -> Result<(), Unsolvable> {
        let mut confirmed = DigitSet::NONE;
        for &cell in house_cells(house) {
            let state = self.cells[cell as usize];
            if state.is_confirmed() {
                let mask = state.candidates();
                if !(confirmed & mask).is_empty() {
                    return Err(Unsolvable);
                }
                confirmed |= mask;
            }
        }
        Ok(())
    }

    /// Runs the duplicate check over all 27 houses. Used to reject
    /// conflicting clues before any search and to audit boards after
    /// propagation, which confirms naked singles without cross-checking them.
    pub(crate) fn check_all_houses(&self) -> Result<(), Unsolvable> {
        for house in 0..N_HOUSES as u8 {
            self.check_house(house)?;
        }
        Ok(())
    }

    /// Eliminates the house's confirmed digits from its unconfirmed cells.
    ///
    /// A cell reduced to one candidate is confirmed immediately and its digit
    /// joins the elimination mask for the cells after it in the same pass.
    /// A cell reduced to zero candidates is a contradiction.
    fn deduce_house(&mut self, house: u8) -> Result<bool, Unsolvable> {
        let mut confirmed = DigitSet::NONE;
        for &cell in house_cells(house) {
            let state = self.cells[cell as usize];
            if state.is_confirmed() {
                confirmed |= state.candidates();
            }
        }

        let mut changed = false;
        for &cell in house_cells(house) {
            let state = self.cells[cell as usize];
            if state.is_confirmed() {
                continue;
            }
            let remaining = state.candidates().without(confirmed);
            match remaining.unique()? {
                Some(digit) => {
                    // naked single
                    self.cells[cell as usize] = Cell::from_digit(digit);
                    confirmed |= remaining;
                    changed = true;
                }
                None => {
                    if remaining != state.candidates() {
                        self.cells[cell as usize] = Cell::with_candidates(remaining);
                        changed = true;
                    }
                }
            }
        }
        Ok(changed)
    }

    /// One deduction sweep over all houses: row, column and block for each
    /// index in turn. Returns whether any cell changed.
    fn deduce_once(&mut self) -> Result<bool, Unsolvable> {
        let mut changed = false;
        unroll! {
            for i in 0..9 {
                changed |= self.deduce_house(i as u8)?;
                changed |= self.deduce_house(i as u8 + 9)?;
                changed |= self.deduce_house(i as u8 + 18)?;
            }
        }
        Ok(changed)
    }

    /// Propagates constraints to the fixpoint, then re-validates every cell.
    fn deduce_full(&mut self) -> Result<(), Unsolvable> {
        while self.deduce_once()? {}
        for cell in self.cells.iter() {
            if !cell.is_valid() {
                return Err(Unsolvable);
            }
        }
        Ok(())
    }

    pub(crate) fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_confirmed())
    }

    /// Deduces as far as possible and reports how to continue: solved,
    /// contradictory, or branch on the unconfirmed cell with the fewest
    /// remaining candidates (ties broken by the lowest index).
    fn deduce(&mut self) -> Result<Deduction, Unsolvable> {
        self.deduce_full()?;

        if self.is_solved() {
            return Ok(Deduction::Solved);
        }

        let mut min_candidates = 10;
        let mut target = 0;
        for (cell, state) in self.cells.iter().enumerate() {
            if state.is_confirmed() {
                continue;
            }
            let n_candidates = state.candidates().len();
            if n_candidates < min_candidates {
                min_candidates = n_candidates;
                target = cell as u8;
            }
        }
        Ok(Deduction::Branch(target))
    }

    /// Searches for a completion of this board by iterative backtracking.
    ///
    /// The stack is pre-allocated for the worst case of one frame per cell
    /// and never reallocates. Candidates are tried smallest digit first, so
    /// the search is fully deterministic.
    pub(crate) fn solve_one(mut self) -> Option<CandidateBoard> {
        let target = match self.deduce() {
            Ok(Deduction::Solved) => {
                return self.check_all_houses().ok().map(|()| self);
            }
            Err(Unsolvable) => return None,
            Ok(Deduction::Branch(target)) => target,
        };

        let mut stack: Vec<Frame> = Vec::with_capacity(MAX_SEARCH_DEPTH);
        stack.push(Frame {
            snapshot: self,
            target,
            untried: self.cells[target as usize].candidates(),
        });

        while let Some(frame) = stack.last_mut() {
            let digit = match frame.untried.pop_lowest() {
                Some(digit) => digit,
                None => {
                    // every candidate at this depth is exhausted
                    stack.pop();
                    continue;
                }
            };

            let mut trial = frame.snapshot;
            trial.cells[frame.target as usize] = Cell::from_digit(digit);

            let deduction = trial.deduce();
            // Propagation confirms naked singles without comparing them
            // against already confirmed peers, so every trial is audited
            // before it is accepted or extended. A duplicate discards only
            // this trial; the untried candidates at this depth stay in play.
            if trial.check_all_houses().is_err() {
                continue;
            }
            match deduction {
                Ok(Deduction::Solved) => return Some(trial),
                // contradiction: next candidate at the same depth
                Err(Unsolvable) => {}
                Ok(Deduction::Branch(next_target)) => {
                    let untried = trial.cells[next_target as usize].candidates();
                    stack.push(Frame {
                        snapshot: trial,
                        target: next_target,
                        untried,
                    });
                }
            }
        }

        None
    }
}
