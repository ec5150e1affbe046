// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Candidate generator tests on small grids.
//!
//! Divisor pruning must never lose a candidate: it is checked here against
//! the bound-only enumeration for every entry point of 3×3 and 4×4 grids.

mod common;

use common::{candidate_set, east};
use mirror_search::engine::{collect_candidates, Pruning};
use mirror_search::{trace_path_product, Beam, Board, Coord, Direction, GridBounds};

/// Every beam that enters a `size × size` grid from its frame.
fn entry_beams(size: u32, target: u64) -> Vec<Beam> {
    let far = 2 * size as i32 + 1;
    let mut beams = Vec::new();
    for i in 0..size as i32 {
        let lane = 2 * i + 1;
        beams.push(Beam::new(Coord::new(-1, lane), Direction::East, target));
        beams.push(Beam::new(Coord::new(far, lane), Direction::West, target));
        beams.push(Beam::new(Coord::new(lane, -1), Direction::North, target));
        beams.push(Beam::new(Coord::new(lane, far), Direction::South, target));
    }
    beams
}

#[test]
fn test_divisor_pruning_matches_bound() {
    for size in [3, 4] {
        let bounds = GridBounds::square(size);
        for target in 1..30 {
            for beam in entry_beams(size, target) {
                let divisor = collect_candidates(bounds, &Board::new(), &beam, Pruning::Divisor);
                let bound = collect_candidates(bounds, &Board::new(), &beam, Pruning::Bound);
                assert_eq!(
                    divisor, bound,
                    "size {} beam from {} heading {} target {}",
                    size,
                    beam.start(),
                    beam.direction(),
                    target
                );
            }
        }
    }
}

#[test]
fn test_candidate_counts_three_by_three() {
    let bounds = GridBounds::square(3);
    let counts: Vec<usize> = (1..=12)
        .map(|target| candidate_set(bounds, &east(0, target), Pruning::Divisor).len())
        .collect();
    assert_eq!(counts, vec![1, 2, 2, 2, 0, 3, 0, 3, 1, 0, 0, 2]);
}

#[test]
fn test_candidate_counts_four_by_four() {
    let bounds = GridBounds::square(4);
    let counts: Vec<usize> = (1..=12)
        .map(|target| {
            collect_candidates(bounds, &Board::new(), &east(0, target), Pruning::Divisor).len()
        })
        .collect();
    assert_eq!(counts, vec![1, 2, 2, 2, 1, 1, 0, 5, 1, 0, 0, 10]);

    let middle: Vec<usize> = (1..=12)
        .map(|target| candidate_set(bounds, &east(1, target), Pruning::Divisor).len())
        .collect();
    assert_eq!(middle, vec![0, 2, 1, 2, 1, 3, 0, 5, 1, 0, 0, 5]);
}

#[test]
fn test_candidates_are_distinct_and_valid() {
    let bounds = GridBounds::square(4);
    for target in 1..30 {
        for beam in entry_beams(4, target) {
            let list = collect_candidates(bounds, &Board::new(), &beam, Pruning::Divisor);
            let set = candidate_set(bounds, &beam, Pruning::Divisor);
            assert_eq!(list.len(), set.len());
            for board in &list {
                assert!(board.satisfies_adjacency());
                assert_eq!(
                    trace_path_product(board, &bounds, beam.start(), beam.direction()),
                    target
                );
            }
        }
    }
}
