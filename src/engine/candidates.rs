// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Candidate generation for a single beam.
//!
//! Starting from the current board, the generator walks the beam forward and
//! enumerates every way of extending the board so that the beam's segment
//! lengths multiply to its target. At each position it considers:
//!
//! 1. **Exit**: leaving the grid along the current ray, if that completes the
//!    target exactly.
//! 2. **Turn after `k` steps**, for every `k` short of the frame: reflect off
//!    the mirror already there, or place either orientation if the adjacency
//!    invariant allows.
//!
//! Both are explored at every position; finding an exit does not stop the
//! search for turns further along the same ray.
//!
//! Candidates are passed to a visitor as they are found rather than
//! collected. The visitor sees the board with the candidate's mirrors in
//! place and returns [`ControlFlow::Break`] to stop the whole enumeration.
//! Every placement is undone on the way out, whether the walk finishes or is
//! stopped.

use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::context::SearchContext;
use crate::geometry::{Beam, Coord, Direction, GridBounds, Orientation};
use crate::laser::trace_path_product;
use crate::state::{Board, Counters};

/// Why an enumeration stopped early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Halt {
    /// A board satisfying every beam.
    Solved(Board),
    /// The search budget ran out.
    BudgetExhausted,
}

/// Which step lengths the generator is allowed to skip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pruning {
    /// Skip `k` unless `partial · k` divides the target. Every later segment
    /// multiplies in a positive integer, so nothing reachable is lost.
    #[default]
    Divisor,
    /// Only skip `k` once `partial · k` exceeds the target. Enumerates the
    /// same boards as [`Pruning::Divisor`], more slowly.
    Bound,
}

impl Pruning {
    /// True if a partial product may still complete to `target`.
    pub fn admits(self, partial: u64, target: u64) -> bool {
        match self {
            Pruning::Divisor => target % partial == 0,
            Pruning::Bound => partial <= target,
        }
    }
}

/// Enumerate the extensions of `ctx`'s board on which `beam` reproduces its
/// target, calling `visit` for each.
///
/// The board passed to `visit` is a superset of the board at entry, keeps
/// the adjacency invariant, and traces `beam` to exactly its target. When
/// this returns, the board is back to its state at entry.
pub fn for_each_candidate<F>(ctx: &mut SearchContext, beam: &Beam, visit: &mut F) -> ControlFlow<Halt>
where
    F: FnMut(&mut SearchContext) -> ControlFlow<Halt>,
{
    explore(ctx, beam, beam.start(), beam.direction(), 1, visit)
}

fn explore<F>(
    ctx: &mut SearchContext,
    beam: &Beam,
    pos: Coord,
    direction: Direction,
    partial: u64,
    visit: &mut F,
) -> ControlFlow<Halt>
where
    F: FnMut(&mut SearchContext) -> ControlFlow<Halt>,
{
    if ctx.enter_node() {
        return ControlFlow::Break(Halt::BudgetExhausted);
    }

    let target = beam.target();
    let distance = ctx.bounds().distance_to_boundary(pos, direction);

    if partial.checked_mul(u64::from(distance)) == Some(target) {
        // The walk may have passed over mirrors at shorter steps, or a later
        // placement may cut an earlier segment; only the real trace counts.
        let traced = trace_path_product(ctx.board(), ctx.bounds(), beam.start(), beam.direction());
        if traced == target {
            ctx.count(Counters::CandidatesEmitted);
            let flow = visit(ctx);
            if flow.is_break() {
                return flow;
            }
        } else {
            ctx.count(Counters::EmissionRejections);
        }
    }

    for step in 1..distance {
        let Some(product) = partial.checked_mul(u64::from(step)) else {
            break;
        };
        if !ctx.pruning().admits(product, target) {
            ctx.count(Counters::PrunedSteps);
            continue;
        }

        let cell = pos.step(direction, step);
        if let Some(existing) = ctx.board().get(cell) {
            let flow = explore(ctx, beam, cell, existing.reflect(direction), product, visit);
            if flow.is_break() {
                return flow;
            }
        } else if ctx.board().can_place_mirror(cell) {
            for orientation in Orientation::iter() {
                let checkpoint = ctx.checkpoint();
                ctx.place_mirror(cell, orientation);
                let flow = explore(ctx, beam, cell, orientation.reflect(direction), product, visit);
                ctx.rewind_to(checkpoint);
                if flow.is_break() {
                    return flow;
                }
            }
        }
    }

    ControlFlow::Continue(())
}

/// Collect every candidate board for `beam` on top of `board`.
///
/// Materialises the whole enumeration; meant for small grids and tests.
pub fn collect_candidates(bounds: GridBounds, board: &Board, beam: &Beam, pruning: Pruning) -> Vec<Board> {
    let mut ctx = SearchContext::with_board(bounds, board.clone()).with_pruning(pruning);
    let mut found = Vec::new();
    let _ = for_each_candidate(&mut ctx, beam, &mut |ctx: &mut SearchContext| {
        found.push(ctx.board().clone());
        ControlFlow::Continue(())
    });
    found
}
