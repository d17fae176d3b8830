//! Algorithm enum for selecting how `tick` walks the grid.
//!
//! Both strategies run the same rule and produce identical generations;
//! they only differ in whether rows are spread over the rayon pool.

use super::{Cell, rules};

/// Available stepping strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Row by row on the calling thread
    #[default]
    Sequential,
    /// Rows computed in parallel with rayon
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Sequential, Algorithm::Parallel]
    }

    /// The algorithm after this one in `all()`, wrapping around
    pub fn next(self) -> Algorithm {
        let all = Self::all();
        let pos = all.iter().position(|a| *a == self).unwrap_or(0);
        all[(pos + 1) % all.len()]
    }

    /// Display name for the host panel
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sequential => "Sequential",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Compute the next generation of `current` into `next`.
    pub(crate) fn step(self, current: &[Cell], next: &mut [Cell], width: u32, height: u32) {
        match self {
            Algorithm::Sequential => rules::step(current, next, width, height),
            Algorithm::Parallel => rules::step_parallel(current, next, width, height),
        }
    }
}
