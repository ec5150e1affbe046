// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end test on the built-in 10×10 puzzle.

use mirror_search::puzzle::{reference_puzzle, Puzzle};
use mirror_search::state::Counters;
use mirror_search::{trace_path_product, SearchOutcome};

const EXPECTED: &str = "\
. . \\ . . . \\ . . \\
. . . . . . . . \\ .
/ . . . / . . / . .
. . / . . . . . . \\
. . . . . . / . . .
. / . . \\ . . \\ . .
/ . \\ . . / . . / .
. . . \\ . . . . . .
. . . . / . / . / .
/ . . . . / . . . .
";

#[test]
fn test_reference_puzzle_solves() {
    let puzzle = reference_puzzle();
    let engine = puzzle.engine();
    let result = engine.solve();

    let board = match &result.outcome {
        SearchOutcome::Solved(board) => board,
        other => panic!("expected a solution, got {:?}", other),
    };

    assert!(board.satisfies_adjacency());
    assert_eq!(board.len(), 23);
    for beam in puzzle.beams() {
        assert_eq!(
            trace_path_product(board, puzzle.bounds(), beam.start(), beam.direction()),
            beam.target(),
            "beam from {} heading {}",
            beam.start(),
            beam.direction()
        );
    }
    assert!(engine.verify(board));
    assert_eq!(board.render(puzzle.bounds()), EXPECTED);
    assert!(result.statistics.get(Counters::CrossValidationRejections) > 0);
}

#[test]
fn test_puzzle_file_matches_builtin() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/puzzles/hall_of_mirrors.toml");
    let from_file = Puzzle::load(path).unwrap();
    assert_eq!(from_file, reference_puzzle());
}

#[test]
fn test_empty_board_misses_most_targets() {
    let puzzle = reference_puzzle();
    let engine = puzzle.engine();
    let empty = mirror_search::Board::new();
    // Every straight crossing of a 10×10 grid is 11 steps.
    assert_eq!(engine.unsatisfied(&empty).count(), 15);
}
