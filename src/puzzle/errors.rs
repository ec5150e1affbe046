// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for puzzle configuration.

use thiserror::Error;

use crate::geometry::{Coord, Direction};

/// Problems found while loading or validating a puzzle, before any search
/// starts. Beam indices are zero-based, in the order the beams were given.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Grid must have at least one column and one row (got {columns}x{rows})")]
    EmptyGrid { columns: u32, rows: u32 },

    #[error("Beam {beam}: target product must be positive (got {target})")]
    NonPositiveTarget { beam: usize, target: i64 },

    #[error("Beam {beam}: direction ({dx}, {dy}) is not a unit axis vector")]
    InvalidDirection { beam: usize, dx: i64, dy: i64 },

    #[error("Beam {beam}: start ({x}, {y}) is not a multiple of 0.5")]
    OffLattice { beam: usize, x: f64, y: f64 },

    #[error("Beam {beam}: start {start} is outside the grid")]
    OutOfBounds { beam: usize, start: Coord },

    #[error("Beam {beam}: start {start} heading {direction} does not enter the grid")]
    NotEntering {
        beam: usize,
        start: Coord,
        direction: Direction,
    },
}
