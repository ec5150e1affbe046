// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking search for mirror placements on a laser grid.
//!
//! A rectangular grid of cells can hold diagonal mirrors (`/` or `\`), never
//! two in orthogonally adjacent cells. Laser beams enter from the frame; each
//! travels straight until a mirror turns it, and eventually leaves the grid.
//! The lengths of its straight segments multiply to a product, and every beam
//! comes with the product it must reproduce. The search finds a single board
//! on which every beam does.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: Fixed Data
//!
//! Set up once and never changed during search:
//! - Grid bounds and the half-unit coordinate lattice
//! - The reflection table
//! - The beams, sorted by ascending target
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Search state that changes during search, tracked on the trail:
//! - Trail - records speculative placements for cheap backtracking
//! - Board - the mirrors placed so far
//! - Statistics - node and rejection counters
//!
//! # Search Algorithm
//!
//! 1. **Candidate generation**: for one beam, enumerate every extension of
//!    the board on which that beam's segments multiply to its target, pruning
//!    step lengths whose partial product cannot divide the target.
//! 2. **Cross-validation**: each candidate is re-traced against every beam
//!    already resolved, since new mirrors may cut across their paths.
//! 3. **Backtracking**: a surviving candidate is extended with the next beam;
//!    exhausting a beam's candidates returns to the previous beam.
//!
//! The first board that satisfies the last beam ends the search.
//!
//! # Example
//!
//! ```no_run
//! use mirror_search::puzzle::reference_puzzle;
//!
//! let puzzle = reference_puzzle();
//! let result = puzzle.engine().solve();
//! if let Some(board) = result.outcome.board() {
//!     print!("{}", board.render(puzzle.bounds()));
//! }
//! ```

pub mod context;
pub mod engine;
pub mod geometry;
pub mod laser;
pub mod puzzle;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use context::SearchContext;
pub use engine::{Pruning, SearchBudget, SearchEngine, SearchOutcome, SearchResult};
pub use geometry::{Beam, Coord, Direction, GridBounds, Orientation};
pub use laser::{trace_path, trace_path_product};
pub use puzzle::{ConfigError, Puzzle};
pub use state::Board;
pub use trail::Trail;
