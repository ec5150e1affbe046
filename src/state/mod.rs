// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable, tracked on the trail).
//!
//! - Board: the mirrors placed so far
//! - Statistics: counters updated as the search runs
//!
//! Board modifications made during search go through the trail so they can
//! be undone on backtrack.

pub mod board;
pub mod statistics;

pub use board::Board;
pub use statistics::{Counters, Statistics};
