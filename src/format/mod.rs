//! Pattern text formats.
//!
//! The plaintext format is the only persisted form of a universe: one line
//! per row, one character per cell.

pub mod plaintext;

pub use plaintext::Alphabet;
