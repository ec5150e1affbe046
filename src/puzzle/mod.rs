// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Puzzle definitions.
//!
//! A puzzle is a grid size plus a list of beams, each with a start point on
//! the frame, a direction into the grid and a target product. Puzzles come
//! from [`reference_puzzle`] or from TOML files:
//!
//! ```
//! use mirror_search::puzzle::Puzzle;
//!
//! let puzzle = Puzzle::from_toml_str(r#"
//!     name = "corner"
//!     columns = 4
//!     rows = 4
//!
//!     [search]
//!     max_nodes = 100000
//!
//!     [[beams]]
//!     start = [-0.5, 1.5]
//!     direction = [1, 0]
//!     target = 6
//! "#).unwrap();
//!
//! assert_eq!(puzzle.beams().len(), 1);
//! assert_eq!(puzzle.search().budget().max_nodes, Some(100000));
//! ```
//!
//! Start points use real coordinates (multiples of 0.5): cells are centred
//! on `i + 0.5` and the frame runs along `-0.5` and `size + 0.5`. Everything
//! is validated here, so the search itself never sees malformed input.

pub mod errors;
pub mod reference;

pub use errors::ConfigError;
pub use reference::reference_puzzle;

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::engine::{Pruning, SearchBudget, SearchEngine};
use crate::geometry::{Beam, Coord, Direction, GridBounds};

/// Search settings from the optional `[search]` table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct SearchConfig {
    /// Stop after this many generator nodes.
    #[serde(default)]
    pub max_nodes: Option<u64>,

    /// Stop after this many seconds.
    #[serde(default)]
    pub time_limit_secs: Option<u64>,

    #[serde(default)]
    pub pruning: Pruning,
}

impl SearchConfig {
    pub fn budget(&self) -> SearchBudget {
        SearchBudget {
            max_nodes: self.max_nodes,
            time_limit: self.time_limit_secs.map(Duration::from_secs),
        }
    }
}

/// One beam as written in a puzzle file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BeamSpec {
    /// Real coordinates of the entry point.
    pub start: [f64; 2],
    /// Unit axis vector, e.g. `[-1, 0]` for westward.
    pub direction: [i64; 2],
    pub target: i64,
}

impl BeamSpec {
    /// Check this beam against the grid and convert it to half units.
    pub fn validate(&self, index: usize, bounds: &GridBounds) -> Result<Beam, ConfigError> {
        if self.target <= 0 {
            return Err(ConfigError::NonPositiveTarget {
                beam: index,
                target: self.target,
            });
        }
        let [dx, dy] = self.direction;
        let direction =
            Direction::from_vector(dx, dy).ok_or(ConfigError::InvalidDirection { beam: index, dx, dy })?;
        let [x, y] = self.start;
        let start = Coord::from_real(x, y).ok_or(ConfigError::OffLattice { beam: index, x, y })?;
        if !bounds.encloses(start) {
            return Err(ConfigError::OutOfBounds { beam: index, start });
        }
        if !bounds.is_entry(start, direction) {
            return Err(ConfigError::NotEntering {
                beam: index,
                start,
                direction,
            });
        }
        Ok(Beam::new(start, direction, self.target as u64))
    }
}

/// On-disk layout of a puzzle file.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct PuzzleFile {
    #[serde(default)]
    name: Option<String>,
    columns: u32,
    rows: u32,
    #[serde(default)]
    search: SearchConfig,
    #[serde(default)]
    beams: Vec<BeamSpec>,
}

/// A validated puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    name: String,
    bounds: GridBounds,
    /// In declaration order; the engine sorts them.
    beams: Vec<Beam>,
    search: SearchConfig,
}

impl Puzzle {
    /// Validate beam specs against a `columns × rows` grid.
    pub fn from_specs(
        name: impl Into<String>,
        columns: u32,
        rows: u32,
        specs: &[BeamSpec],
        search: SearchConfig,
    ) -> Result<Self, ConfigError> {
        let bounds = GridBounds::try_new(columns, rows).ok_or(ConfigError::EmptyGrid { columns, rows })?;
        let beams = specs
            .iter()
            .enumerate()
            .map(|(index, beam)| beam.validate(index, &bounds))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: name.into(),
            bounds,
            beams,
            search,
        })
    }

    /// Loads a puzzle from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML, or
    /// describes an invalid puzzle.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads a puzzle from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a puzzle from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let file: PuzzleFile = toml::from_str(s)?;
        Self::from_specs(
            file.name.unwrap_or_else(|| "unnamed".to_string()),
            file.columns,
            file.rows,
            &file.beams,
            file.search,
        )
    }

    /// Replace the search settings.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    /// Beams in declaration order.
    pub fn beams(&self) -> &[Beam] {
        &self.beams
    }

    pub fn search(&self) -> &SearchConfig {
        &self.search
    }

    /// An engine configured from this puzzle's search settings.
    pub fn engine(&self) -> SearchEngine {
        SearchEngine::new(self.bounds, self.beams.iter().copied())
            .with_budget(self.search.budget())
            .with_pruning(self.search.pruning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beam_spec(start: [f64; 2], direction: [i64; 2], target: i64) -> BeamSpec {
        BeamSpec {
            start,
            direction,
            target,
        }
    }

    #[test]
    fn test_validate_converts_to_half_units() {
        let bounds = GridBounds::square(10);
        let beam = beam_spec([10.5, 8.5], [-1, 0], 4).validate(0, &bounds).unwrap();
        assert_eq!(beam.start(), Coord::new(21, 17));
        assert_eq!(beam.direction(), Direction::West);
        assert_eq!(beam.target(), 4);
    }

    #[test]
    fn test_validate_rejects_bad_target() {
        let bounds = GridBounds::square(10);
        let err = beam_spec([10.5, 8.5], [-1, 0], 0).validate(3, &bounds).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveTarget { beam: 3, target: 0 }));
    }

    #[test]
    fn test_validate_rejects_diagonal() {
        let bounds = GridBounds::square(10);
        let err = beam_spec([10.5, 8.5], [-1, 1], 4).validate(0, &bounds).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDirection { dx: -1, dy: 1, .. }));
    }

    #[test]
    fn test_validate_rejects_off_lattice() {
        let bounds = GridBounds::square(10);
        let err = beam_spec([10.25, 8.5], [-1, 0], 4).validate(0, &bounds).unwrap_err();
        assert!(matches!(err, ConfigError::OffLattice { .. }));
    }

    #[test]
    fn test_validate_rejects_outside() {
        let bounds = GridBounds::square(10);
        let err = beam_spec([11.5, 8.5], [-1, 0], 4).validate(0, &bounds).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfBounds { .. }));
    }

    #[test]
    fn test_validate_rejects_outward_and_interior() {
        let bounds = GridBounds::square(10);
        let outward = beam_spec([10.5, 8.5], [1, 0], 4).validate(0, &bounds).unwrap_err();
        assert!(matches!(outward, ConfigError::NotEntering { .. }));
        let interior = beam_spec([4.5, 4.5], [1, 0], 4).validate(0, &bounds).unwrap_err();
        assert!(matches!(interior, ConfigError::NotEntering { .. }));
        // On the frame but between lanes.
        let between = beam_spec([10.5, 8.0], [-1, 0], 4).validate(0, &bounds).unwrap_err();
        assert!(matches!(between, ConfigError::NotEntering { .. }));
    }

    #[test]
    fn test_empty_grid() {
        let err = Puzzle::from_specs("empty", 0, 3, &[], SearchConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyGrid { columns: 0, rows: 3 }));
    }

    #[test]
    fn test_search_config_budget() {
        let config = SearchConfig {
            max_nodes: Some(5),
            time_limit_secs: Some(2),
            pruning: Pruning::Bound,
        };
        let budget = config.budget();
        assert_eq!(budget.max_nodes, Some(5));
        assert_eq!(budget.time_limit, Some(Duration::from_secs(2)));
        assert!(SearchConfig::default().budget().is_unlimited());
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::NotEntering {
            beam: 2,
            start: Coord::new(21, 17),
            direction: Direction::East,
        };
        assert_eq!(
            err.to_string(),
            "Beam 2: start (10.5, 8.5) heading east does not enter the grid"
        );
    }
}
