// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for speculative mirror placements.
//!
//! The search works on a single board. Every mirror placed while exploring a
//! branch is recorded on the trail; backtracking rewinds the trail to an
//! earlier checkpoint, removing exactly the mirrors placed since then. Sibling
//! branches therefore never observe each other's placements.

use crate::geometry::{Coord, Orientation};
use crate::state::Board;

/// Record of the mirrors placed since the search started, newest last.
#[derive(Debug, Default)]
pub struct Trail {
    placements: Vec<Coord>,
}

impl Trail {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self {
            placements: Vec::with_capacity(64),
        }
    }

    /// The current position, to be passed to [`Trail::rewind_to`] later.
    pub fn checkpoint(&self) -> usize {
        self.placements.len()
    }

    /// Place a mirror on `board` and record it.
    ///
    /// The caller must already have checked `board.can_place_mirror(pos)`.
    pub(crate) fn place(&mut self, board: &mut Board, pos: Coord, orientation: Orientation) {
        board.insert_unchecked(pos, orientation);
        self.placements.push(pos);
    }

    /// Remove every mirror placed after `checkpoint`, newest first.
    pub fn rewind_to(&mut self, board: &mut Board, checkpoint: usize) {
        while self.placements.len() > checkpoint {
            if let Some(pos) = self.placements.pop() {
                board.remove(pos);
            }
        }
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}
