//! Universe - the simulation engine.
//!
//! Owns a double-buffered [`BitGrid`] and an engine-local random source.
//! Everything runs synchronously on the caller's thread; the universe has
//! no timers and no notion of elapsed generations.

use rand::prelude::*;

use crate::error::UniverseError;
use crate::format::{Alphabet, plaintext};
use crate::schema::{Shape, UniverseConfig};

use super::{BitGrid, rule};

/// Game of Life engine on a toroidal, bit-packed grid.
pub struct Universe {
    /// Generation visible to callers.
    current: BitGrid,
    /// Scratch buffer written by `tick`, swapped with `current` afterwards.
    next: BitGrid,
    rng: StdRng,
}

impl Universe {
    /// Create an all-dead universe with an entropy-seeded random source.
    pub fn new(width: u32, height: u32) -> Result<Self, UniverseError> {
        Self::with_rng(width, height, StdRng::from_entropy())
    }

    /// Create an all-dead universe whose `random()` fills are reproducible.
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Result<Self, UniverseError> {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    /// Create a universe from validated configuration.
    pub fn from_config(config: &UniverseConfig) -> Result<Self, UniverseError> {
        config.validate()?;
        match config.seed {
            Some(seed) => Self::with_seed(config.width, config.height, seed),
            None => Self::new(config.width, config.height),
        }
    }

    /// Reset the random source to a fixed seed.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    fn with_rng(width: u32, height: u32, rng: StdRng) -> Result<Self, UniverseError> {
        let current = BitGrid::new(width, height)?;
        let next = BitGrid::new(width, height)?;
        Ok(Self { current, next, rng })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.current.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.current.height()
    }

    /// Read-only view of the current generation.
    #[inline]
    pub fn grid(&self) -> &BitGrid {
        &self.current
    }

    /// Zero-copy view of the packed current buffer.
    ///
    /// `ceil(width * height / 8)` bytes; cell `n = row * width + col` is
    /// bit `n % 8` of byte `n / 8`.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        self.current.as_bytes()
    }

    /// Owned copy of [`cells`](Self::cells) with the same bit layout.
    pub fn cells_snapshot(&self) -> Vec<u8> {
        self.current.as_bytes().to_vec()
    }

    /// Reallocate to new dimensions. All cells become dead.
    ///
    /// On error the universe keeps its previous size and content.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), UniverseError> {
        let grid = BitGrid::new(width, height)?;
        self.replace_grid(grid)
    }

    pub fn get_cell(&self, row: u32, col: u32) -> Result<bool, UniverseError> {
        let idx = self.current.checked_index(row, col)?;
        Ok(self.current.get(idx))
    }

    pub fn set_cell(&mut self, row: u32, col: u32, alive: bool) -> Result<(), UniverseError> {
        let idx = self.current.checked_index(row, col)?;
        self.current.set(idx, alive);
        Ok(())
    }

    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<(), UniverseError> {
        let idx = self.current.checked_index(row, col)?;
        self.current.toggle(idx);
        Ok(())
    }

    /// Set a cell addressed with toroidal wraparound on both axes.
    ///
    /// Any signed coordinate is accepted; `(-1, -1)` is the bottom-right
    /// cell.
    pub fn set_cell_wrapped(&mut self, row: i64, col: i64, alive: bool) {
        let idx = self.current.wrapped_index(row, col);
        self.current.set(idx, alive);
    }

    /// Mark each listed cell alive.
    ///
    /// All coordinates are checked before any cell is written.
    pub fn set_cells(&mut self, cells: &[(u32, u32)]) -> Result<(), UniverseError> {
        let indices = cells
            .iter()
            .map(|&(row, col)| self.current.checked_index(row, col))
            .collect::<Result<Vec<_>, _>>()?;
        for idx in indices {
            self.current.set(idx, true);
        }
        Ok(())
    }

    /// Stamp a shape with its anchor at (row, col), wrapping at the edges.
    pub fn stamp(&mut self, row: u32, col: u32, shape: &Shape) {
        for (dr, dc) in shape.offsets() {
            self.set_cell_wrapped(row as i64 + dr, col as i64 + dc, true);
        }
    }

    /// Kill every cell. Dimensions are unchanged.
    pub fn clear(&mut self) {
        self.current.fill(false);
    }

    /// Set every cell alive with probability 0.5.
    pub fn random(&mut self) {
        for idx in 0..self.current.len() {
            let alive = self.rng.r#gen::<bool>();
            self.current.set(idx, alive);
        }
    }

    /// Advance one generation.
    pub fn tick(&mut self) {
        rule::step_into(&self.current, &mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Advance `steps` generations.
    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            self.tick();
        }
    }

    /// Replace the grid with a plaintext pattern using the default
    /// `#`/`.` alphabet.
    ///
    /// Width becomes the longest line and height the number of lines. On
    /// error nothing changes.
    pub fn import(&mut self, text: &str) -> Result<(), UniverseError> {
        self.import_with(text, &Alphabet::default())
    }

    pub fn import_with(&mut self, text: &str, alphabet: &Alphabet) -> Result<(), UniverseError> {
        let grid = plaintext::parse(text, alphabet)?;
        self.replace_grid(grid)
    }

    /// Serialize the current generation with the default alphabet.
    pub fn export(&self) -> String {
        self.export_with(&Alphabet::default())
    }

    pub fn export_with(&self, alphabet: &Alphabet) -> String {
        plaintext::write(&self.current, alphabet)
    }

    /// Install `grid` as the current generation with a matching scratch
    /// buffer. Both buffers are allocated before anything is replaced.
    fn replace_grid(&mut self, grid: BitGrid) -> Result<(), UniverseError> {
        let next = BitGrid::new(grid.width(), grid.height())?;
        self.next = next;
        self.current = grid;
        Ok(())
    }
}
