// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::BTreeSet;

use mirror_search::engine::{collect_candidates, Pruning};
use mirror_search::{Beam, Board, Coord, Direction, GridBounds, Orientation};

/// Build a board from `((column, row), orientation)` pairs.
pub fn board_of(mirrors: &[((u32, u32), Orientation)]) -> Board {
    let board: Board = mirrors
        .iter()
        .map(|&((col, row), orientation)| (Coord::cell(col, row), orientation))
        .collect();
    assert_eq!(board.len(), mirrors.len(), "fixture breaks adjacency");
    board
}

/// A beam entering from the west frame along `row`.
pub fn east(row: u32, target: u64) -> Beam {
    Beam::new(Coord::new(-1, 2 * row as i32 + 1), Direction::East, target)
}

/// A beam entering from the south frame along `col`.
pub fn north(col: u32, target: u64) -> Beam {
    Beam::new(Coord::new(2 * col as i32 + 1, -1), Direction::North, target)
}

/// Every candidate for `beam` on an empty grid, as a set.
pub fn candidate_set(bounds: GridBounds, beam: &Beam, pruning: Pruning) -> BTreeSet<Board> {
    collect_candidates(bounds, &Board::new(), beam, pruning)
        .into_iter()
        .collect()
}
