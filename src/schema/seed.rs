//! Seed types for initializing universes.

use serde::{Deserialize, Serialize};

use crate::compute::Universe;
use crate::error::UniverseError;
use crate::format::Alphabet;

use super::Placement;

/// Complete seed specification for universe initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            pattern: Pattern::Modular { a: 2, b: 7 },
        }
    }
}

/// Predefined patterns for initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// All cells dead.
    Empty,
    /// Each cell alive with probability 0.5.
    Random {
        /// Reseeds the universe's random source when set.
        #[serde(default)]
        seed: Option<u64>,
    },
    /// Cell `i` (row-major) alive when `i % a == 0 || i % b == 0`.
    /// A zero modulus never matches.
    Modular { a: usize, b: usize },
    /// Explicit list of alive (row, col) cells.
    Cells { cells: Vec<(u32, u32)> },
    /// Shapes stamped with toroidal wraparound.
    Shapes { shapes: Vec<Placement> },
    /// Plaintext rows. Replaces the universe dimensions.
    Plaintext {
        rows: Vec<String>,
        #[serde(default)]
        alphabet: Alphabet,
    },
}

impl Seed {
    /// Write the seed's pattern into `universe`.
    ///
    /// Every pattern except `Plaintext` keeps the current dimensions and
    /// starts from an empty grid. On error the universe is unchanged.
    pub fn apply(&self, universe: &mut Universe) -> Result<(), UniverseError> {
        log::debug!(
            "Seeding {}x{} universe with {:?}",
            universe.width(),
            universe.height(),
            self.pattern
        );

        match &self.pattern {
            Pattern::Empty => universe.clear(),
            Pattern::Random { seed } => {
                if let Some(seed) = seed {
                    universe.reseed(*seed);
                }
                universe.random();
            }
            Pattern::Modular { a, b } => {
                universe.clear();
                apply_modular(universe, *a, *b);
            }
            Pattern::Cells { cells } => {
                for &(row, col) in cells {
                    universe.grid().checked_index(row, col)?;
                }
                universe.clear();
                universe.set_cells(cells)?;
            }
            Pattern::Shapes { shapes } => {
                universe.clear();
                for placement in shapes {
                    universe.stamp(placement.row, placement.col, &placement.shape);
                }
            }
            Pattern::Plaintext { rows, alphabet } => {
                universe.import_with(&rows.join("\n"), alphabet)?;
            }
        }

        log::debug!("Seeded population: {}", universe.grid().count_alive());
        Ok(())
    }
}

fn apply_modular(universe: &mut Universe, a: usize, b: usize) {
    let width = universe.width() as usize;
    let matches = |m: usize, i: usize| m != 0 && i % m == 0;

    for i in 0..universe.grid().len() {
        if matches(a, i) || matches(b, i) {
            let row = (i / width) as i64;
            let col = (i % width) as i64;
            universe.set_cell_wrapped(row, col, true);
        }
    }
}
