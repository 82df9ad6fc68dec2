use sudok::{solve_buffer, SolveOutcome, Sudoku};

// Project Euler problem 96, grid 01. The puzzle has a unique solution.
const BENCHMARK_PUZZLE: &str =
    "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
const BENCHMARK_SOLUTION: &str =
    "483921657967345821251876493548132976729564138136798245372689514814253769695417382";

// Row 0 holds 1..=8, so its last cell can only be a 9, but column 8 already
// has one further down. No group contains a direct duplicate, yet no
// completion exists.
fn jointly_unsatisfiable_grid() -> [u8; 81] {
    let mut digits = [0; 81];
    for cell in 0..8 {
        digits[cell] = cell as u8 + 1;
    }
    digits[17] = 9;
    digits
}

/// Checks that every row, column and block contains each digit exactly once
/// and that all clues of `original` survived unchanged.
fn assert_valid_solution(original: &[u8; 81], solution: &[u8; 81]) {
    for (cell, (&given, &solved)) in original.iter().zip(solution.iter()).enumerate() {
        assert!(
            (1..=9).contains(&solved),
            "cell {} is not filled with a digit: {}",
            cell,
            solved
        );
        if given != 0 {
            assert_eq!(given, solved, "clue in cell {} was changed", cell);
        }
    }
    for group in 0..9 {
        let row: Vec<usize> = (0..9).map(|col| group * 9 + col).collect();
        let col: Vec<usize> = (0..9).map(|row| row * 9 + group).collect();
        let block: Vec<usize> = (0..9)
            .map(|i| (group / 3 * 3 + i / 3) * 9 + group % 3 * 3 + i % 3)
            .collect();
        for cells in &[row, col, block] {
            let mut seen = [false; 10];
            for &cell in cells.iter() {
                let digit = solution[cell] as usize;
                assert!(!seen[digit], "digit {} twice in group {:?}", digit, cells);
                seen[digit] = true;
            }
        }
    }
}

fn parse(line: &str) -> [u8; 81] {
    Sudoku::from_str_line(line).unwrap().to_bytes()
}

#[test]
fn solves_benchmark_puzzle_exactly() {
    let mut buffer = parse(BENCHMARK_PUZZLE);
    assert_eq!(solve_buffer(&mut buffer), SolveOutcome::Solved);
    assert_eq!(buffer, parse(BENCHMARK_SOLUTION));
}

#[test]
fn solve_one_matches_buffer_api() {
    let sudoku = Sudoku::from_str_line(BENCHMARK_PUZZLE).unwrap();
    let solution = sudoku.solve_one().expect("benchmark puzzle is solvable");
    assert_eq!(solution.to_string(), BENCHMARK_SOLUTION);
    assert!(solution.is_solved());

    let mut in_place = Sudoku::from_str_line(BENCHMARK_PUZZLE).unwrap();
    assert!(!in_place.is_solved());
    assert!(in_place.solve());
    assert_eq!(in_place, solution);
}

#[test]
fn empty_grid_has_a_completion() {
    let mut buffer = [0; 81];
    assert_eq!(solve_buffer(&mut buffer), SolveOutcome::Solved);
    assert_valid_solution(&[0; 81], &buffer);
}

#[test]
fn solved_grids_are_returned_unchanged() {
    let solved = parse(BENCHMARK_SOLUTION);
    let mut buffer = solved;
    assert_eq!(solve_buffer(&mut buffer), SolveOutcome::Solved);
    assert_eq!(buffer, solved);
}

#[test]
fn wrong_buffer_length_is_invalid_size() {
    assert_eq!(solve_buffer(&mut []), SolveOutcome::InvalidSize);
    assert_eq!(solve_buffer(&mut [0; 80]), SolveOutcome::InvalidSize);
    assert_eq!(solve_buffer(&mut [0; 82]), SolveOutcome::InvalidSize);
    // content does not matter, even a solved grid is rejected
    let mut oversized = [0; 82];
    oversized[..81].copy_from_slice(&parse(BENCHMARK_SOLUTION));
    assert_eq!(solve_buffer(&mut oversized), SolveOutcome::InvalidSize);
}

#[test]
fn duplicate_givens_are_invalid_puzzle() {
    // same digit twice in a row
    let mut buffer = [0; 81];
    buffer[0] = 5;
    buffer[8] = 5;
    let before = buffer;
    assert_eq!(solve_buffer(&mut buffer), SolveOutcome::InvalidPuzzle);
    assert_eq!(buffer, before, "buffer must stay untouched");

    // same digit twice in a column
    let mut buffer = [0; 81];
    buffer[3] = 2;
    buffer[3 + 72] = 2;
    assert_eq!(solve_buffer(&mut buffer), SolveOutcome::InvalidPuzzle);

    // same digit twice in a block, but in different rows and columns
    let mut buffer = [0; 81];
    buffer[30] = 8;
    buffer[40] = 8;
    assert_eq!(solve_buffer(&mut buffer), SolveOutcome::InvalidPuzzle);
}

#[test]
fn unsatisfiable_but_consistent_is_no_solution() {
    let mut buffer = jointly_unsatisfiable_grid();
    let before = buffer;
    assert_eq!(solve_buffer(&mut buffer), SolveOutcome::NoSolution);
    assert_eq!(buffer, before, "buffer must stay untouched");

    let sudoku = Sudoku::from_bytes(before).unwrap();
    assert!(sudoku.solve_one().is_none());
}

#[test]
fn outcome_strings_match_contract() {
    assert_eq!(SolveOutcome::Solved.as_str(), "Solved");
    assert_eq!(SolveOutcome::InvalidPuzzle.as_str(), "Invalid puzzle");
    assert_eq!(SolveOutcome::InvalidSize.as_str(), "Invalid size");
    assert_eq!(SolveOutcome::NoSolution.as_str(), "No solution found");
    assert_eq!(SolveOutcome::NoSolution.to_string(), "No solution found");
}

#[test]
fn lenient_buffer_values_count_as_empty() {
    // out-of-range values load like empty cells in the buffer API
    let mut buffer = parse(BENCHMARK_PUZZLE);
    for value in buffer.iter_mut().filter(|value| **value == 0) {
        *value = 42;
    }
    assert_eq!(solve_buffer(&mut buffer), SolveOutcome::Solved);
    assert_eq!(buffer, parse(BENCHMARK_SOLUTION));
}

#[test]
fn harder_puzzle_requires_search_and_solves() {
    // propagation alone stalls on this one, the solver has to guess
    let mut buffer =
        parse("...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...");
    let before = buffer;
    assert_eq!(solve_buffer(&mut buffer), SolveOutcome::Solved);
    assert_valid_solution(&before, &buffer);
}

#[test]
fn display_block_formats_grid() {
    let sudoku = Sudoku::from_str_line(BENCHMARK_SOLUTION).unwrap();
    let block = sudoku.display_block().to_string();
    assert_eq!(block.lines().count(), 9);
    assert!(block.starts_with("4 8 3 9 2 1 6 5 7"));
}
