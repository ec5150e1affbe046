// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The built-in 10×10 puzzle with fifteen beams.

use crate::geometry::{Beam, Coord, Direction, GridBounds, REFERENCE_GRID_SIZE};

use super::{Puzzle, SearchConfig};

/// `(x, y)` in half units, direction, target.
const REFERENCE_BEAMS: [((i32, i32), Direction, u64); 15] = [
    ((21, 17), Direction::West, 4),
    ((21, 15), Direction::West, 27),
    ((21, 7), Direction::West, 16),
    ((15, -1), Direction::North, 405),
    ((11, -1), Direction::North, 5),
    ((9, -1), Direction::North, 64),
    ((7, -1), Direction::North, 12),
    ((1, -1), Direction::North, 2025),
    ((-1, 3), Direction::East, 225),
    ((-1, 5), Direction::East, 12),
    ((-1, 13), Direction::East, 27),
    ((5, 21), Direction::South, 112),
    ((9, 21), Direction::South, 48),
    ((11, 21), Direction::South, 3087),
    ((13, 21), Direction::South, 9),
];

/// The reference puzzle, with beams in declaration order.
pub fn reference_puzzle() -> Puzzle {
    let beams = REFERENCE_BEAMS
        .iter()
        .map(|&((x, y), direction, target)| Beam::new(Coord::new(x, y), direction, target))
        .collect();
    Puzzle {
        name: "Hall of Mirrors 3".to_string(),
        bounds: GridBounds::square(REFERENCE_GRID_SIZE),
        beams,
        search: SearchConfig::default(),
    }
}
