//! Population statistics for display and logging.

use serde::Serialize;

use super::Universe;

/// Summary of the current generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UniverseStats {
    pub width: u32,
    pub height: u32,
    /// Number of alive cells.
    pub population: usize,
    /// Fraction of alive cells (0.0-1.0).
    pub density: f32,
}

impl UniverseStats {
    /// Compute statistics from the current generation.
    pub fn from_universe(universe: &Universe) -> Self {
        let grid = universe.grid();
        let population = grid.count_alive();
        Self {
            width: grid.width(),
            height: grid.height(),
            population,
            density: population as f32 / grid.len() as f32,
        }
    }
}
