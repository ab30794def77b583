//! Compute module - Grid storage and generation advance.

mod grid;
pub mod rule;
mod stats;
mod universe;

pub use grid::*;
pub use stats::*;
pub use universe::*;
