// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Beams entering the grid.

use super::coord::Coord;
use super::direction::Direction;

/// A laser entering at `start` along `direction` whose segment lengths must
/// multiply to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Beam {
    start: Coord,
    direction: Direction,
    target: u64,
}

impl Beam {
    pub fn new(start: Coord, direction: Direction, target: u64) -> Self {
        Self {
            start,
            direction,
            target,
        }
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn target(&self) -> u64 {
        self.target
    }
}
