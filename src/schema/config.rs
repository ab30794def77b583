//! Configuration types for universe construction.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::format::Alphabet;

/// Default edge length of a fresh universe.
pub const DEFAULT_SIZE: u32 = 64;

fn default_size() -> u32 {
    DEFAULT_SIZE
}

/// Top-level universe configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniverseConfig {
    /// Grid width in cells.
    #[serde(default = "default_size")]
    pub width: u32,
    /// Grid height in cells.
    #[serde(default = "default_size")]
    pub height: u32,
    /// Characters used by the plaintext pattern format.
    #[serde(default)]
    pub alphabet: Alphabet,
    /// Seed for the random fill. `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            alphabet: Alphabet::default(),
            seed: None,
        }
    }
}

impl UniverseConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        self.alphabet.validate()
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions (width, height) must be non-zero")]
    InvalidDimensions,
    #[error("Alive {alive:?} and dead {dead:?} symbols must differ and not be line breaks")]
    InvalidAlphabet { alive: char, dead: char },
    #[error("Failed to read configuration: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}
