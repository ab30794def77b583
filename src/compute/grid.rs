//! Bit-packed cell storage.
//!
//! Cells are stored row-major, one bit per cell. Cell `n` lives in byte
//! `n / 8` under mask `1 << (n % 8)`. Renderers read the raw bytes through
//! [`BitGrid::as_bytes`], so this layout must stay stable.

use crate::error::UniverseError;

/// Number of bytes needed to hold `cells` bits.
#[inline]
pub fn byte_len(cells: usize) -> usize {
    cells.div_ceil(8)
}

/// State of a single cell.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Dead = 0,
    Alive = 1,
}

impl From<bool> for Cell {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

impl From<Cell> for bool {
    #[inline]
    fn from(cell: Cell) -> Self {
        cell == Cell::Alive
    }
}

/// Fixed-size grid of boolean cells packed eight to a byte.
///
/// Padding bits in the final byte are always zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGrid {
    width: u32,
    height: u32,
    len: usize,
    bits: Vec<u8>,
}

impl BitGrid {
    /// Create an all-dead grid.
    ///
    /// Fails if either dimension is zero, `width * height` does not fit
    /// in `usize`, or the packed buffer cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self, UniverseError> {
        let invalid = || UniverseError::InvalidDimensions {
            width: width as u64,
            height: height as u64,
        };

        if width == 0 || height == 0 {
            return Err(invalid());
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(invalid)?;

        let mut bits = Vec::new();
        bits.try_reserve_exact(byte_len(len)).map_err(|_| invalid())?;
        bits.resize(byte_len(len), 0);

        Ok(Self {
            width,
            height,
            len,
            bits,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a grid holds at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Convert (row, col) to a linear cell index without bounds checking.
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        debug_assert!(row < self.height && col < self.width);
        row as usize * self.width as usize + col as usize
    }

    /// Convert (row, col) to a linear cell index, rejecting coordinates
    /// outside the grid.
    pub fn checked_index(&self, row: u32, col: u32) -> Result<usize, UniverseError> {
        if row >= self.height || col >= self.width {
            return Err(UniverseError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.index(row, col))
    }

    /// Convert signed (row, col) to a linear index, wrapping around both
    /// axes.
    #[inline]
    pub fn wrapped_index(&self, row: i64, col: i64) -> usize {
        let row = row.rem_euclid(self.height as i64) as u32;
        let col = col.rem_euclid(self.width as i64) as u32;
        self.index(row, col)
    }

    #[inline]
    pub fn get(&self, index: usize) -> bool {
        self.bits[index / 8] & (1 << (index % 8)) != 0
    }

    #[inline]
    pub fn set(&mut self, index: usize, alive: bool) {
        let mask = 1u8 << (index % 8);
        if alive {
            self.bits[index / 8] |= mask;
        } else {
            self.bits[index / 8] &= !mask;
        }
    }

    #[inline]
    pub fn toggle(&mut self, index: usize) {
        self.bits[index / 8] ^= 1 << (index % 8);
    }

    /// Set every cell to the same state.
    pub fn fill(&mut self, alive: bool) {
        if !alive {
            self.bits.fill(0);
            return;
        }
        self.bits.fill(u8::MAX);
        let tail = self.len % 8;
        if tail != 0 {
            if let Some(last) = self.bits.last_mut() {
                *last = (1u8 << tail) - 1;
            }
        }
    }

    /// Number of alive cells.
    pub fn count_alive(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Packed cell bytes, `ceil(width * height / 8)` long.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            BitGrid::new(0, 5),
            Err(UniverseError::InvalidDimensions { width: 0, height: 5 })
        ));
        assert!(BitGrid::new(5, 0).is_err());
    }

    #[test]
    fn test_unallocatable_dimensions_rejected() {
        assert!(matches!(
            BitGrid::new(u32::MAX, u32::MAX),
            Err(UniverseError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_bit_layout() {
        let mut grid = BitGrid::new(5, 3).unwrap();
        // Cell (1, 4) has index 9: byte 1, mask 0b10.
        let idx = grid.index(1, 4);
        assert_eq!(idx, 9);
        grid.set(idx, true);
        assert_eq!(grid.as_bytes(), &[0b0000_0000, 0b0000_0010]);

        grid.set(0, true);
        grid.set(7, true);
        assert_eq!(grid.as_bytes()[0], 0b1000_0001);

        grid.set(7, false);
        assert_eq!(grid.as_bytes()[0], 0b0000_0001);
    }

    #[test]
    fn test_toggle() {
        let mut grid = BitGrid::new(3, 3).unwrap();
        grid.toggle(4);
        assert!(grid.get(4));
        grid.toggle(4);
        assert!(!grid.get(4));
    }

    #[test]
    fn test_fill_keeps_padding_clear() {
        let mut grid = BitGrid::new(3, 3).unwrap();
        grid.fill(true);
        assert_eq!(grid.count_alive(), 9);
        assert_eq!(grid.as_bytes(), &[0xFF, 0b0000_0001]);

        grid.fill(false);
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_checked_index() {
        let grid = BitGrid::new(4, 2).unwrap();
        assert_eq!(grid.checked_index(1, 3).unwrap(), 7);
        assert!(matches!(
            grid.checked_index(2, 0),
            Err(UniverseError::OutOfBounds { row: 2, col: 0, .. })
        ));
        assert!(grid.checked_index(0, 4).is_err());
    }

    #[test]
    fn test_wrapped_index() {
        let grid = BitGrid::new(4, 3).unwrap();
        assert_eq!(grid.wrapped_index(-1, -1), grid.index(2, 3));
        assert_eq!(grid.wrapped_index(3, 4), grid.index(0, 0));
        assert_eq!(grid.wrapped_index(-7, 9), grid.index(2, 1));
    }

    proptest! {
        #[test]
        fn prop_new_grid_is_dead(width in 1u32..200, height in 1u32..200) {
            let grid = BitGrid::new(width, height).unwrap();
            let cells = width as usize * height as usize;
            prop_assert_eq!(grid.len(), cells);
            prop_assert_eq!(grid.as_bytes().len(), cells.div_ceil(8));
            prop_assert_eq!(grid.count_alive(), 0);
        }
    }
}
