// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Axis-aligned travel directions.

use std::fmt;

use super::orientation::Orientation;

/// One of the four unit axis vectors a beam can travel along.
///
/// East is +x, North is +y; row 0 is the near (bottom) edge of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    East,
    West,
    North,
    South,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::North,
        Direction::South,
    ];

    /// Interpret `(dx, dy)` as a direction, returning None unless it is a
    /// unit axis vector.
    pub fn from_vector(dx: i64, dy: i64) -> Option<Self> {
        match (dx, dy) {
            (1, 0) => Some(Direction::East),
            (-1, 0) => Some(Direction::West),
            (0, 1) => Some(Direction::North),
            (0, -1) => Some(Direction::South),
            _ => None,
        }
    }

    /// The unit vector `(dx, dy)`.
    pub const fn vector(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::North => (0, 1),
            Direction::South => (0, -1),
        }
    }

    /// Single-character arrow, for compact path listings.
    pub fn arrow(self) -> char {
        match self {
            Direction::East => '>',
            Direction::West => '<',
            Direction::North => '^',
            Direction::South => 'v',
        }
    }

    /// The direction after hitting a mirror of the given orientation.
    pub fn reflect(self, orientation: Orientation) -> Self {
        orientation.reflect(self)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::East => "east",
            Direction::West => "west",
            Direction::North => "north",
            Direction::South => "south",
        };
        f.write_str(name)
    }
}
