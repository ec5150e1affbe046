// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mirror orientations and the reflection table.

use std::fmt;

use strum_macros::EnumIter;

use super::direction::Direction;

/// The two diagonals a mirror can lie on.
///
/// Iteration order (Forward, then Backward) is the branching order of the
/// candidate generator, so it determines which solution is found first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum Orientation {
    /// `/`, running from bottom-left to top-right.
    Forward,
    /// `\`, running from top-left to bottom-right.
    Backward,
}

impl Orientation {
    /// The character used when rendering a board.
    pub fn symbol(self) -> char {
        match self {
            Orientation::Forward => '/',
            Orientation::Backward => '\\',
        }
    }

    /// Parse a rendering symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '/' => Some(Orientation::Forward),
            '\\' => Some(Orientation::Backward),
            _ => None,
        }
    }

    /// Outgoing direction for a beam arriving along `incoming`.
    pub fn reflect(self, incoming: Direction) -> Direction {
        use Direction::*;
        match (self, incoming) {
            (Orientation::Forward, West) => South,
            (Orientation::Forward, South) => West,
            (Orientation::Forward, East) => North,
            (Orientation::Forward, North) => East,
            (Orientation::Backward, West) => North,
            (Orientation::Backward, North) => West,
            (Orientation::Backward, East) => South,
            (Orientation::Backward, South) => East,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
