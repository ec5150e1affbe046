// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Optional limits on how long a search may run.
//!
//! The search space grows combinatorially with the grid, so callers can cap
//! the number of generator nodes, the wall-clock time, or both. With no limit
//! configured the search runs to completion.

use std::time::{Duration, Instant};

/// How often (in generator nodes) the wall clock is consulted.
const CLOCK_CHECK_INTERVAL: u64 = 256;

/// Limits on a search. The default is unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchBudget {
    /// Stop after this many generator nodes.
    pub max_nodes: Option<u64>,
    /// Stop after this much wall-clock time.
    pub time_limit: Option<Duration>,
}

impl SearchBudget {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    pub fn is_unlimited(&self) -> bool {
        self.max_nodes.is_none() && self.time_limit.is_none()
    }
}

/// Tracks one search run against its budget.
#[derive(Debug)]
pub(crate) struct BudgetTracker {
    budget: SearchBudget,
    started: Instant,
    exhausted: bool,
}

impl BudgetTracker {
    pub(crate) fn new(budget: SearchBudget) -> Self {
        Self {
            budget,
            started: Instant::now(),
            exhausted: false,
        }
    }

    /// True once `nodes` exceeds the node limit or the time limit has passed.
    /// Stays true after the first time it is reported.
    pub(crate) fn is_exhausted(&mut self, nodes: u64) -> bool {
        if self.exhausted {
            return true;
        }
        if let Some(max_nodes) = self.budget.max_nodes {
            if nodes > max_nodes {
                self.exhausted = true;
            }
        }
        if let Some(limit) = self.budget.time_limit {
            if nodes % CLOCK_CHECK_INTERVAL == 0 && self.started.elapsed() >= limit {
                self.exhausted = true;
            }
        }
        self.exhausted
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
