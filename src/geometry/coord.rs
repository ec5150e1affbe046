// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Points on the half-unit lattice.
//!
//! Beam entry points and mirror cells sit on half-integer real coordinates
//! (a 10×10 grid has cells centred on 0.5..9.5 and a frame at -0.5 and 10.5).
//! Storing doubled values keeps every position an integer, so equality and
//! adjacency tests are exact.

use std::fmt;

use super::constants::HALF_UNITS_PER_STEP;
use super::direction::Direction;

/// A point on the grid, in half units.
///
/// Cell `(col, row)` is at `(2col + 1, 2row + 1)`; moving one grid step
/// changes a coordinate by [`HALF_UNITS_PER_STEP`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    x: i32,
    y: i32,
}

impl Coord {
    /// Create a coordinate from half-unit values.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The centre of grid cell `(col, row)`.
    pub const fn cell(col: u32, row: u32) -> Self {
        Self {
            x: 2 * col as i32 + 1,
            y: 2 * row as i32 + 1,
        }
    }

    /// Convert real coordinates, returning None unless both are exact
    /// multiples of 0.5.
    pub fn from_real(x: f64, y: f64) -> Option<Self> {
        Some(Self {
            x: to_half_units(x)?,
            y: to_half_units(y)?,
        })
    }

    /// Horizontal position in half units.
    pub fn x(self) -> i32 {
        self.x
    }

    /// Vertical position in half units.
    pub fn y(self) -> i32 {
        self.y
    }

    /// The point `steps` grid steps away along `direction`.
    pub fn step(self, direction: Direction, steps: u32) -> Self {
        let (dx, dy) = direction.vector();
        let distance = HALF_UNITS_PER_STEP * steps as i32;
        Self {
            x: self.x + dx * distance,
            y: self.y + dy * distance,
        }
    }

    /// The four orthogonal unit neighbours.
    pub fn neighbours(self) -> [Coord; 4] {
        Direction::ALL.map(|direction| self.step(direction, 1))
    }
}

fn to_half_units(value: f64) -> Option<i32> {
    let doubled = value * 2.0;
    if !doubled.is_finite() || doubled.fract() != 0.0 {
        return None;
    }
    if doubled < f64::from(i32::MIN) || doubled > f64::from(i32::MAX) {
        return None;
    }
    Some(doubled as i32)
}

fn write_half_units(f: &mut fmt::Formatter<'_>, value: i32) -> fmt::Result {
    if value % 2 == 0 {
        write!(f, "{}", value / 2)
    } else {
        let sign = if value < 0 { "-" } else { "" };
        write!(f, "{}{}.5", sign, value.abs() / 2)
    }
}

/// Displays real coordinates, e.g. `(10.5, -0.5)`.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        write_half_units(f, self.x)?;
        write!(f, ", ")?;
        write_half_units(f, self.y)?;
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_centres() {
        assert_eq!(Coord::cell(0, 0), Coord::new(1, 1));
        assert_eq!(Coord::cell(9, 3), Coord::new(19, 7));
    }

    #[test]
    fn test_from_real() {
        assert_eq!(Coord::from_real(10.5, 8.5), Some(Coord::new(21, 17)));
        assert_eq!(Coord::from_real(-0.5, 2.0), Some(Coord::new(-1, 4)));
        assert_eq!(Coord::from_real(0.25, 1.5), None);
        assert_eq!(Coord::from_real(f64::NAN, 1.5), None);
        assert_eq!(Coord::from_real(1.5, f64::INFINITY), None);
    }

    #[test]
    fn test_step() {
        let start = Coord::new(21, 17);
        assert_eq!(start.step(Direction::West, 1), Coord::new(19, 17));
        assert_eq!(start.step(Direction::West, 11), Coord::new(-1, 17));
        assert_eq!(start.step(Direction::South, 3), Coord::new(21, 11));
    }

    #[test]
    fn test_neighbours() {
        let neighbours = Coord::cell(2, 2).neighbours();
        assert!(neighbours.contains(&Coord::cell(3, 2)));
        assert!(neighbours.contains(&Coord::cell(1, 2)));
        assert!(neighbours.contains(&Coord::cell(2, 3)));
        assert!(neighbours.contains(&Coord::cell(2, 1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(21, -1).to_string(), "(10.5, -0.5)");
        assert_eq!(Coord::new(4, -3).to_string(), "(2, -1.5)");
    }
}
