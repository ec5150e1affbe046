// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for the mirror grid.
//!
//! All positions are kept in half units so that cell centres and the frame
//! (both of which sit on half-integer real coordinates) compare exactly:
//! - Coord: a point on the half-unit lattice
//! - Direction: one of the four axis directions a beam can travel
//! - Orientation: the two mirror diagonals and their reflection table
//! - GridBounds: grid size, frame and boundary distances
//! - Beam: an entering beam and its required product

pub mod beam;
pub mod bounds;
pub mod constants;
pub mod coord;
pub mod direction;
pub mod orientation;

// Re-export for convenience
pub use beam::Beam;
pub use bounds::GridBounds;
pub use constants::*;
pub use coord::Coord;
pub use direction::Direction;
pub use orientation::Orientation;
