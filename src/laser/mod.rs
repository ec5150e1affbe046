// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Laser tracing.
//!
//! A beam travels in a straight line until it either meets a mirror, where
//! the reflection table turns it, or reaches the frame, where it leaves the
//! grid. The length of each straight run is a segment; the beam's value is
//! the product of its segment lengths.
//!
//! Tracing is pure: the board is only read.

use crate::geometry::{Coord, Direction, GridBounds, Orientation};
use crate::state::Board;

/// One straight run of a beam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: Coord,
    pub to: Coord,
    pub direction: Direction,
    /// Length in grid steps.
    pub length: u32,
}

/// The full path of a beam from its start to where it leaves the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeamPath {
    pub segments: Vec<Segment>,
    /// False if the beam was caught in a closed loop of mirrors.
    pub exits: bool,
}

impl BeamPath {
    /// Product of the segment lengths, saturating at `u64::MAX`.
    ///
    /// A beam that never exits has product 0.
    pub fn product(&self) -> u64 {
        if !self.exits {
            return 0;
        }
        self.segments
            .iter()
            .fold(1u64, |acc, segment| acc.saturating_mul(u64::from(segment.length)))
    }

    /// Where the beam leaves the grid.
    pub fn exit_point(&self) -> Option<Coord> {
        if self.exits {
            self.segments.last().map(|segment| segment.to)
        } else {
            None
        }
    }
}

/// How far `pos` can travel along `direction` before stopping, and the
/// mirror it stops at (None if it reaches the frame).
fn next_stop(
    board: &Board,
    bounds: &GridBounds,
    pos: Coord,
    direction: Direction,
) -> (u32, Option<Orientation>) {
    let boundary = bounds.distance_to_boundary(pos, direction);
    (1..boundary)
        .find_map(|step| {
            board
                .get(pos.step(direction, step))
                .map(|orientation| (step, Some(orientation)))
        })
        .unwrap_or((boundary, None))
}

/// Walk the beam, calling `visit` for each segment.
///
/// Returns false if the walk was cut short because the beam is trapped in a
/// loop. A beam entering from the frame always exits: reflection is
/// reversible, so its path can never close on itself.
fn walk(
    board: &Board,
    bounds: &GridBounds,
    start: Coord,
    direction: Direction,
    mut visit: impl FnMut(Segment),
) -> bool {
    // Each (mirror, incoming direction) pair can be visited at most once on
    // a path that exits.
    let max_reflections = 4 * board.len();
    let mut pos = start;
    let mut direction = direction;

    for _ in 0..=max_reflections {
        let (length, mirror) = next_stop(board, bounds, pos, direction);
        let to = pos.step(direction, length);
        visit(Segment {
            from: pos,
            to,
            direction,
            length,
        });
        match mirror {
            Some(orientation) => {
                pos = to;
                direction = orientation.reflect(direction);
            }
            None => return true,
        }
    }
    false
}

/// Product of segment lengths for a beam starting at `start` heading
/// `direction`.
///
/// Saturates at `u64::MAX`; returns 0 for a beam that never leaves the grid.
pub fn trace_path_product(
    board: &Board,
    bounds: &GridBounds,
    start: Coord,
    direction: Direction,
) -> u64 {
    let mut product = 1u64;
    let exits = walk(board, bounds, start, direction, |segment| {
        product = product.saturating_mul(u64::from(segment.length));
    });
    if exits {
        product
    } else {
        0
    }
}

/// The segments of a beam starting at `start` heading `direction`.
pub fn trace_path(board: &Board, bounds: &GridBounds, start: Coord, direction: Direction) -> BeamPath {
    let mut segments = Vec::new();
    let exits = walk(board, bounds, start, direction, |segment| segments.push(segment));
    BeamPath { segments, exits }
}
