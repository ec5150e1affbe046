// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mirror placements.

use std::collections::BTreeMap;

use crate::geometry::{Coord, GridBounds, Orientation};

/// Mirrors placed on the grid, keyed by cell centre.
///
/// # Invariant
///
/// No two mirrors are orthogonal unit neighbours. [`Board::place`] refuses
/// placements that would break this, and the search only ever places mirrors
/// where [`Board::can_place_mirror`] holds.
///
/// The map is ordered so iteration, equality and rendering are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Board {
    mirrors: BTreeMap<Coord, Orientation>,
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of mirrors placed.
    pub fn len(&self) -> usize {
        self.mirrors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mirrors.is_empty()
    }

    /// The mirror at `pos`, if any.
    pub fn get(&self, pos: Coord) -> Option<Orientation> {
        self.mirrors.get(&pos).copied()
    }

    pub fn is_occupied(&self, pos: Coord) -> bool {
        self.mirrors.contains_key(&pos)
    }

    /// Iterate over placed mirrors in coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Orientation)> + '_ {
        self.mirrors.iter().map(|(&pos, &orientation)| (pos, orientation))
    }

    /// True if `pos` and its four orthogonal neighbours are all empty.
    pub fn can_place_mirror(&self, pos: Coord) -> bool {
        !self.is_occupied(pos)
            && pos
                .neighbours()
                .iter()
                .all(|neighbour| !self.is_occupied(*neighbour))
    }

    /// Place a mirror if the adjacency invariant allows it.
    ///
    /// Returns false (leaving the board unchanged) otherwise.
    pub fn place(&mut self, pos: Coord, orientation: Orientation) -> bool {
        if !self.can_place_mirror(pos) {
            return false;
        }
        self.mirrors.insert(pos, orientation);
        true
    }

    /// Insert without checking. Callers have already checked
    /// `can_place_mirror`.
    pub(crate) fn insert_unchecked(&mut self, pos: Coord, orientation: Orientation) {
        debug_assert!(self.can_place_mirror(pos), "mirror at {} breaks adjacency", pos);
        self.mirrors.insert(pos, orientation);
    }

    pub(crate) fn remove(&mut self, pos: Coord) -> Option<Orientation> {
        self.mirrors.remove(&pos)
    }

    /// True if no two mirrors are orthogonal neighbours.
    pub fn satisfies_adjacency(&self) -> bool {
        self.mirrors
            .keys()
            .all(|pos| pos.neighbours().iter().all(|n| !self.is_occupied(*n)))
    }

    /// True if every mirror of `other` is also on this board.
    pub fn extends(&self, other: &Board) -> bool {
        other.iter().all(|(pos, orientation)| self.get(pos) == Some(orientation))
    }

    /// Render as text: one line per row, far edge first, cells separated by
    /// spaces, `.` for an empty cell.
    pub fn render(&self, bounds: &GridBounds) -> String {
        let mut out = String::with_capacity(bounds.cell_count() * 2 + bounds.rows() as usize);
        for row in (0..bounds.rows()).rev() {
            let line: Vec<String> = (0..bounds.columns())
                .map(|col| {
                    self.get(Coord::cell(col, row))
                        .map_or('.', Orientation::symbol)
                        .to_string()
                })
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}

impl FromIterator<(Coord, Orientation)> for Board {
    /// Collect placements, skipping any that would break adjacency.
    fn from_iter<I: IntoIterator<Item = (Coord, Orientation)>>(iter: I) -> Self {
        let mut board = Board::new();
        for (pos, orientation) in iter {
            board.place(pos, orientation);
        }
        board
    }
}
