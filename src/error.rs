//! Error types shared by the engine, the plaintext format and the bindings.

use crate::schema::ConfigError;

/// Errors returned by [`Universe`](crate::compute::Universe) operations.
///
/// All variants are recoverable. A failed operation leaves the universe
/// exactly as it was before the call.
#[derive(Debug, thiserror::Error)]
pub enum UniverseError {
    #[error("Grid dimensions must be non-zero and fit in memory (got {width}x{height})")]
    InvalidDimensions { width: u64, height: u64 },
    #[error("Unexpected character {found:?} at line {line}, column {column}")]
    Parse {
        line: usize,
        column: usize,
        found: char,
    },
    #[error("Cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
