// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining fixed and DYNAMIC state.
//!
//! The SearchContext is the core data structure threaded through the
//! candidate generator and the solver:
//! - Tier 1 (fixed): the grid bounds and pruning mode, fixed for the whole run
//! - Tier 2 (DYNAMIC): the board under construction, the trail recording
//!   speculative placements, statistics and the budget tracker
//!
//! All board changes go through [`SearchContext::place_mirror`] so that
//! [`SearchContext::rewind_to`] can undo them.

use crate::engine::budget::{BudgetTracker, SearchBudget};
use crate::engine::candidates::Pruning;
use crate::geometry::{Coord, GridBounds, Orientation};
use crate::state::{Board, Counters, Statistics};
use crate::trail::Trail;

/// Search context for one run.
///
/// # Example
///
/// ```
/// use mirror_search::context::SearchContext;
/// use mirror_search::geometry::{Coord, GridBounds, Orientation};
///
/// let mut ctx = SearchContext::new(GridBounds::square(4));
/// let checkpoint = ctx.checkpoint();
/// ctx.place_mirror(Coord::cell(1, 1), Orientation::Forward);
/// assert_eq!(ctx.board().len(), 1);
/// ctx.rewind_to(checkpoint);
/// assert!(ctx.board().is_empty());
/// ```
#[derive(Debug)]
pub struct SearchContext {
    bounds: GridBounds,
    pruning: Pruning,
    board: Board,
    trail: Trail,
    statistics: Statistics,
    budget: BudgetTracker,
}

impl SearchContext {
    /// A context with an empty board, divisor pruning and no budget.
    pub fn new(bounds: GridBounds) -> Self {
        Self::with_board(bounds, Board::new())
    }

    /// A context starting from an existing board.
    ///
    /// Mirrors already on `board` are never removed by rewinding.
    pub fn with_board(bounds: GridBounds, board: Board) -> Self {
        Self {
            bounds,
            pruning: Pruning::default(),
            board,
            trail: Trail::new(),
            statistics: Statistics::new(),
            budget: BudgetTracker::new(SearchBudget::unlimited()),
        }
    }

    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    /// Set the budget; its clock starts now.
    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = BudgetTracker::new(budget);
        self
    }

    pub fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    pub fn pruning(&self) -> Pruning {
        self.pruning
    }

    /// The board as it stands in the current branch.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Take the statistics out of the context.
    pub fn into_statistics(self) -> Statistics {
        self.statistics
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Current trail position.
    pub fn checkpoint(&self) -> usize {
        self.trail.checkpoint()
    }

    /// Place a mirror, recording it on the trail.
    ///
    /// # Panics
    ///
    /// Panics if the placement would break the adjacency invariant.
    pub fn place_mirror(&mut self, pos: Coord, orientation: Orientation) {
        assert!(
            self.board.can_place_mirror(pos),
            "Cannot place mirror at {}: cell or neighbour occupied",
            pos
        );
        self.trail.place(&mut self.board, pos, orientation);
    }

    /// Undo every placement made since `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        self.trail.rewind_to(&mut self.board, checkpoint);
    }

    pub(crate) fn count(&mut self, counter: Counters) {
        self.statistics.increment_counter(counter);
    }

    /// Record a generator node and report whether the budget is spent.
    pub(crate) fn enter_node(&mut self) -> bool {
        self.statistics.increment_counter(Counters::GeneratorNodes);
        let nodes = self.statistics.get(Counters::GeneratorNodes);
        self.budget.is_exhausted(nodes)
    }

    pub(crate) fn elapsed(&self) -> std::time::Duration {
        self.budget.elapsed()
    }
}
