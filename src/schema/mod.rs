//! Schema module - Configuration, seeding and shape types for universes.

mod config;
mod seed;
mod shape;

pub use config::*;
pub use seed::*;
pub use shape::*;
