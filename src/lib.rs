//! Conways - Conway's Game of Life on a bit-packed toroidal grid.
//!
//! This crate provides the simulation engine for a browser or terminal
//! front end. The front end owns the animation loop, the generation
//! counter and all drawing; the engine owns the cells.
//!
//! # Architecture
//!
//! - `compute`: Bit-packed grid storage, the B3/S23 rule and the
//!   double-buffered [`Universe`]
//! - `format`: Plaintext pattern import/export
//! - `schema`: Configuration, seeds and stampable shapes
//!
//! # Renderer contract
//!
//! [`Universe::cells`] returns `ceil(width * height / 8)` bytes. Cell
//! `n = row * width + col` is alive when `bytes[n / 8] & (1 << (n % 8)) != 0`.
//!
//! # Example
//!
//! ```rust
//! use conways::{Shape, Universe};
//!
//! let mut universe = Universe::new(16, 16).unwrap();
//! universe.stamp(4, 4, &Shape::Glider);
//!
//! for _ in 0..4 {
//!     universe.tick();
//! }
//!
//! assert_eq!(universe.grid().count_alive(), 5);
//! println!("{}", universe.export());
//! ```

pub mod compute;
pub mod error;
pub mod format;
pub mod schema;

// WebAssembly bindings (only for wasm32 target)
#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-export commonly used types
pub use compute::{BitGrid, Cell, Universe, UniverseStats};
pub use error::UniverseError;
pub use format::Alphabet;
pub use schema::{Pattern, Seed, Shape, UniverseConfig};
