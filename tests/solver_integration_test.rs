// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the global solver.
//!
//! These tests verify that the solver:
//! - Returns the empty board when there is nothing to satisfy
//! - Reports contradictions as "no solution"
//! - Rejects candidates that break an earlier beam, and backtracks
//! - Stops when the budget runs out

mod common;

use std::time::Duration;

use common::{board_of, east, north};
use mirror_search::engine::{collect_candidates, Pruning, SearchBudget};
use mirror_search::puzzle::reference_puzzle;
use mirror_search::state::Counters;
use mirror_search::{
    trace_path, trace_path_product, Board, GridBounds, Orientation, SearchEngine, SearchOutcome,
};

#[test]
fn test_empty_beam_list_yields_empty_board() {
    let engine = SearchEngine::new(GridBounds::square(10), Vec::new());
    let result = engine.solve();
    assert_eq!(result.outcome, SearchOutcome::Solved(Board::new()));
}

#[test]
fn test_contradictory_beams() {
    let engine = SearchEngine::new(GridBounds::square(4), vec![east(1, 5), east(1, 6)]);
    let result = engine.solve();
    assert_eq!(result.outcome, SearchOutcome::NoSolution);
    assert!(result.statistics.get(Counters::Backtracks) > 0);
}

#[test]
fn test_straight_crossing_needs_no_mirrors() {
    // On a single cell nothing can help: any mirror makes a one-step segment.
    let bounds = GridBounds::square(1);
    let beam = east(0, 2);
    assert_eq!(
        trace_path_product(&Board::new(), &bounds, beam.start(), beam.direction()),
        2
    );
    let result = SearchEngine::new(bounds, vec![beam]).solve();
    assert_eq!(result.outcome, SearchOutcome::Solved(Board::new()));
}

#[test]
fn test_cross_validation_rejects_and_backtracks() {
    let bounds = GridBounds::square(4);
    let across = east(1, 6);
    let up = north(1, 16);

    // The middle candidate for `across` is a single `/` that `up` would have
    // to run through.
    let first = collect_candidates(bounds, &Board::new(), &across, Pruning::Divisor);
    assert_eq!(first.len(), 3);
    assert_eq!(first[1], board_of(&[((1, 1), Orientation::Forward)]));

    // On that board, `up` has a candidate which re-routes `across`.
    let disturbing = board_of(&[
        ((1, 1), Orientation::Forward),
        ((1, 3), Orientation::Backward),
        ((3, 1), Orientation::Forward),
        ((3, 3), Orientation::Backward),
    ]);
    let second = collect_candidates(bounds, &first[1], &up, Pruning::Divisor);
    assert!(second.contains(&disturbing));
    assert_eq!(
        trace_path_product(&disturbing, &bounds, across.start(), across.direction()),
        8
    );

    let engine = SearchEngine::new(bounds, vec![up, across]);
    let result = engine.solve();
    let expected = board_of(&[
        ((1, 0), Orientation::Forward),
        ((2, 1), Orientation::Backward),
        ((3, 0), Orientation::Forward),
        ((3, 2), Orientation::Backward),
    ]);
    assert_eq!(result.outcome, SearchOutcome::Solved(expected));
    assert_eq!(result.statistics.get(Counters::CrossValidationRejections), 1);
}

#[test]
fn test_solution_paths_match_targets() {
    let bounds = GridBounds::square(4);
    let beams = vec![east(1, 6), north(1, 16)];
    let engine = SearchEngine::new(bounds, beams.clone());
    let result = engine.solve();
    let board = result.outcome.board().expect("solved");
    for beam in &beams {
        let path = trace_path(board, &bounds, beam.start(), beam.direction());
        assert!(path.exits);
        assert_eq!(path.product(), beam.target());
        assert!(bounds.on_frame(path.exit_point().expect("exits")));
    }
}

#[test]
fn test_node_budget_stops_search() {
    let puzzle = reference_puzzle();
    let engine = puzzle
        .engine()
        .with_budget(SearchBudget::unlimited().with_max_nodes(100));
    let result = engine.solve();
    assert_eq!(result.outcome, SearchOutcome::BudgetExhausted);
    assert_eq!(result.statistics.get(Counters::GeneratorNodes), 101);
}

#[test]
fn test_time_budget_stops_search() {
    let puzzle = reference_puzzle();
    let engine = puzzle
        .engine()
        .with_budget(SearchBudget::unlimited().with_time_limit(Duration::ZERO));
    assert_eq!(engine.solve().outcome, SearchOutcome::BudgetExhausted);
}

#[test]
fn test_bound_pruning_finds_same_solution() {
    let bounds = GridBounds::square(4);
    let beams = vec![east(1, 6), north(1, 16)];
    let divisor = SearchEngine::new(bounds, beams.clone()).solve();
    let bound = SearchEngine::new(bounds, beams)
        .with_pruning(Pruning::Bound)
        .solve();
    assert_eq!(divisor.outcome, bound.outcome);
}
