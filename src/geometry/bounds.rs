// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Grid dimensions and the frame around them.

use super::coord::Coord;
use super::direction::Direction;
use super::constants::HALF_UNITS_PER_STEP;

/// A grid of `columns × rows` cells surrounded by a frame.
///
/// In half units the frame runs along `x = -1`, `x = 2·columns + 1`,
/// `y = -1` and `y = 2·rows + 1`. Beams enter from points on the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridBounds {
    columns: u32,
    rows: u32,
}

impl GridBounds {
    /// Create bounds for a grid, panicking if either dimension is zero.
    ///
    /// # Panics
    ///
    /// Panics if `columns == 0` or `rows == 0`.
    pub fn new(columns: u32, rows: u32) -> Self {
        Self::try_new(columns, rows).expect("Grid must have at least one row and one column")
    }

    /// Try to create bounds, returning None for an empty grid.
    pub fn try_new(columns: u32, rows: u32) -> Option<Self> {
        if columns == 0 || rows == 0 || columns > i32::MAX as u32 / 4 || rows > i32::MAX as u32 / 4
        {
            None
        } else {
            Some(Self { columns, rows })
        }
    }

    /// A square grid.
    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    fn min_x(&self) -> i32 {
        -1
    }

    fn max_x(&self) -> i32 {
        HALF_UNITS_PER_STEP * self.columns as i32 + 1
    }

    fn min_y(&self) -> i32 {
        -1
    }

    fn max_y(&self) -> i32 {
        HALF_UNITS_PER_STEP * self.rows as i32 + 1
    }

    /// Whole grid steps from `pos` to the frame along `direction`.
    ///
    /// Returns 0 when `pos` is already on or beyond the frame in that
    /// direction.
    pub fn distance_to_boundary(&self, pos: Coord, direction: Direction) -> u32 {
        let remaining = match direction {
            Direction::East => self.max_x() - pos.x(),
            Direction::West => pos.x() - self.min_x(),
            Direction::North => self.max_y() - pos.y(),
            Direction::South => pos.y() - self.min_y(),
        };
        if remaining <= 0 {
            0
        } else {
            (remaining / HALF_UNITS_PER_STEP) as u32
        }
    }

    /// True if `pos` is the centre of a grid cell.
    pub fn contains_cell(&self, pos: Coord) -> bool {
        self.cell_of(pos).is_some()
    }

    /// The `(col, row)` of the cell centred on `pos`.
    pub fn cell_of(&self, pos: Coord) -> Option<(u32, u32)> {
        let lane = |v: i32, count: u32| {
            if v > 0 && v % 2 == 1 && ((v - 1) / 2) < count as i32 {
                Some(((v - 1) / 2) as u32)
            } else {
                None
            }
        };
        Some((lane(pos.x(), self.columns)?, lane(pos.y(), self.rows)?))
    }

    /// True if `pos` lies inside or on the frame.
    pub fn encloses(&self, pos: Coord) -> bool {
        (self.min_x()..=self.max_x()).contains(&pos.x())
            && (self.min_y()..=self.max_y()).contains(&pos.y())
    }

    /// True if `pos` lies on the frame itself.
    pub fn on_frame(&self, pos: Coord) -> bool {
        self.encloses(pos)
            && (pos.x() == self.min_x()
                || pos.x() == self.max_x()
                || pos.y() == self.min_y()
                || pos.y() == self.max_y())
    }

    /// True if a beam starting at `start` heading `direction` enters the grid:
    /// it starts on the frame and its first step lands on a cell.
    pub fn is_entry(&self, start: Coord, direction: Direction) -> bool {
        self.on_frame(start) && self.contains_cell(start.step(direction, 1))
    }
}
