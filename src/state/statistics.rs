// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context and incremented by the candidate
//! generator and the solver as they run.

use std::fmt;

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(EnumCountMacro, EnumIter, IntoStaticStr, Debug, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Recursive steps taken by the candidate generator.
    GeneratorNodes,
    /// Step lengths skipped because the partial product could not reach the target.
    PrunedSteps,
    /// Boards handed to the solver.
    CandidatesEmitted,
    /// Exit-branch boards on which the beam did not reproduce its target.
    EmissionRejections,
    /// Candidates that changed the product of an earlier beam.
    CrossValidationRejections,
    /// Beams whose candidates were all exhausted.
    Backtracks,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for counter in Counters::iter() {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            let name: &'static str = counter.into();
            write!(f, "{}={}", name, self.get(counter))?;
        }
        Ok(())
    }
}
