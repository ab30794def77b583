//! Stampable multi-cell shapes.
//!
//! Offsets are (row, col) relative to an anchor cell. Stamping wraps
//! around the torus, so anchors near an edge are fine.

use serde::{Deserialize, Serialize};

/// Well-known Life shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Glider travelling up and to the right, anchored on its middle row.
    Glider,
    /// Period-2 oscillator, horizontal, anchored on its centre.
    Blinker,
    /// 2x2 still life, anchored on its top-left cell.
    Block,
    /// Period-3 oscillator (13x13), anchored on its centre.
    Pulsar,
}

impl Shape {
    /// Alive cell offsets relative to the anchor.
    pub fn offsets(&self) -> Vec<(i64, i64)> {
        match self {
            Shape::Glider => vec![(-1, -1), (-1, 0), (-1, 1), (0, 1), (1, 0)],
            Shape::Blinker => vec![(0, -1), (0, 0), (0, 1)],
            Shape::Block => vec![(0, 0), (0, 1), (1, 0), (1, 1)],
            Shape::Pulsar => {
                let mut cells = Vec::with_capacity(48);
                for bar in [-6, -1, 1, 6] {
                    for span in [-4, -3, -2, 2, 3, 4] {
                        cells.push((bar, span));
                        cells.push((span, bar));
                    }
                }
                cells
            }
        }
    }

    /// Parse a shape name as used by the bindings (`"glider"`, `"pulsar"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "glider" => Some(Shape::Glider),
            "blinker" => Some(Shape::Blinker),
            "block" => Some(Shape::Block),
            "pulsar" => Some(Shape::Pulsar),
            _ => None,
        }
    }
}

/// A shape anchored at a grid position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement {
    pub shape: Shape,
    pub row: u32,
    pub col: u32,
}
