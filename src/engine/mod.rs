// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking search over all beams.
//!
//! Beams are resolved one at a time, most restrictive (smallest target)
//! first. For the current beam the engine asks the candidate generator for
//! every board extension that satisfies it; each candidate is then checked
//! against every beam already resolved, because new mirrors can land on their
//! paths. A candidate that passes is extended with the next beam. The first
//! board that satisfies the last beam is the solution.
//!
//! # Architecture
//!
//! Each level of the recursion returns a [`ControlFlow<Halt>`]:
//! - `Continue(())`: no solution below this point; try the next candidate
//! - `Break(Halt::Solved(board))`: stop everything, this board works
//! - `Break(Halt::BudgetExhausted)`: stop everything, out of budget
//!
//! Speculative mirrors live on a single board in the [`SearchContext`] and
//! are rewound on every exit from a branch, so the board never leaks
//! placements between siblings.
//!
//! # Example
//!
//! ```
//! use mirror_search::engine::{SearchEngine, SearchOutcome};
//! use mirror_search::geometry::{Beam, Coord, Direction, GridBounds};
//!
//! // On an empty 3×3 grid a beam crosses in 4 steps.
//! let engine = SearchEngine::new(
//!     GridBounds::square(3),
//!     vec![Beam::new(Coord::new(-1, 3), Direction::East, 4)],
//! );
//! let result = engine.solve();
//! assert!(matches!(result.outcome, SearchOutcome::Solved(_)));
//! ```

pub mod budget;
pub mod candidates;

pub use budget::SearchBudget;
pub use candidates::{collect_candidates, for_each_candidate, Halt, Pruning};

use std::ops::ControlFlow;
use std::time::Duration;

use tracing::{debug, info, trace};

use crate::context::SearchContext;
use crate::geometry::{Beam, GridBounds};
use crate::laser::trace_path_product;
use crate::state::{Board, Counters, Statistics};

/// Final result of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A board on which every beam reproduces its target.
    Solved(Board),
    /// Every combination was tried; no board satisfies all beams.
    NoSolution,
    /// The budget ran out before the search finished.
    BudgetExhausted,
}

impl SearchOutcome {
    /// The solved board, if any.
    pub fn board(&self) -> Option<&Board> {
        match self {
            SearchOutcome::Solved(board) => Some(board),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }
}

/// Outcome plus what it took to get there.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub statistics: Statistics,
    pub elapsed: Duration,
}

/// Solver for a fixed set of beams on a fixed grid.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    bounds: GridBounds,
    /// Sorted by ascending target; ties keep their given order.
    beams: Vec<Beam>,
    budget: SearchBudget,
    pruning: Pruning,
}

impl SearchEngine {
    /// Create an engine. Beams are reordered by ascending target product.
    pub fn new(bounds: GridBounds, beams: impl IntoIterator<Item = Beam>) -> Self {
        let mut beams: Vec<Beam> = beams.into_iter().collect();
        beams.sort_by_key(|beam| beam.target());
        Self {
            bounds,
            beams,
            budget: SearchBudget::unlimited(),
            pruning: Pruning::default(),
        }
    }

    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    /// The beams in the order they are resolved.
    pub fn beams(&self) -> &[Beam] {
        &self.beams
    }

    /// Run the search from an empty board.
    pub fn solve(&self) -> SearchResult {
        self.solve_from(Board::new())
    }

    /// Run the search starting from `board`.
    pub fn solve_from(&self, board: Board) -> SearchResult {
        info!(
            beams = self.beams.len(),
            columns = self.bounds.columns(),
            rows = self.bounds.rows(),
            preset_mirrors = board.len(),
            pruning = ?self.pruning,
            "starting mirror search"
        );

        let mut ctx = SearchContext::with_board(self.bounds, board)
            .with_pruning(self.pruning)
            .with_budget(self.budget);

        let outcome = match resolve(&mut ctx, &self.beams, 0) {
            ControlFlow::Continue(()) => SearchOutcome::NoSolution,
            ControlFlow::Break(Halt::Solved(board)) => SearchOutcome::Solved(board),
            ControlFlow::Break(Halt::BudgetExhausted) => SearchOutcome::BudgetExhausted,
        };
        let elapsed = ctx.elapsed();
        let statistics = ctx.into_statistics();

        match &outcome {
            SearchOutcome::Solved(board) => {
                info!(mirrors = board.len(), ?elapsed, %statistics, "solution found")
            }
            SearchOutcome::NoSolution => info!(?elapsed, %statistics, "no solution exists"),
            SearchOutcome::BudgetExhausted => {
                info!(?elapsed, %statistics, "search budget exhausted")
            }
        }

        SearchResult {
            outcome,
            statistics,
            elapsed,
        }
    }

    /// Beams whose trace on `board` differs from their target.
    pub fn unsatisfied<'a>(&'a self, board: &'a Board) -> impl Iterator<Item = &'a Beam> + 'a {
        self.beams.iter().filter(move |beam| {
            trace_path_product(board, &self.bounds, beam.start(), beam.direction()) != beam.target()
        })
    }

    /// True if every beam reproduces its target on `board`.
    pub fn verify(&self, board: &Board) -> bool {
        self.unsatisfied(board).next().is_none()
    }
}

/// Resolve `beams[index..]` on top of the context's board.
fn resolve(ctx: &mut SearchContext, beams: &[Beam], index: usize) -> ControlFlow<Halt> {
    let Some(beam) = beams.get(index) else {
        return ControlFlow::Break(Halt::Solved(ctx.board().clone()));
    };
    let fixed = &beams[..index];

    let flow = for_each_candidate(ctx, beam, &mut |ctx: &mut SearchContext| {
        let broken = fixed.iter().position(|earlier| {
            trace_path_product(ctx.board(), ctx.bounds(), earlier.start(), earlier.direction())
                != earlier.target()
        });
        if let Some(broken) = broken {
            trace!(beam = index, broken, "candidate disturbs an earlier beam");
            ctx.count(Counters::CrossValidationRejections);
            return ControlFlow::Continue(());
        }
        debug!(
            beam = index,
            target = beam.target(),
            mirrors = ctx.board().len(),
            "beam satisfied"
        );
        resolve(ctx, beams, index + 1)
    });

    if flow.is_continue() {
        trace!(beam = index, target = beam.target(), "candidates exhausted, backtracking");
        ctx.count(Counters::Backtracks);
    }
    flow
}
