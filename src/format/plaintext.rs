//! Plaintext pattern format.
//!
//! ```text
//! .#.
//! ..#
//! ###
//! ```
//!
//! Rows are separated by `\n` (a trailing `\r` is ignored). The grid width
//! is the longest row; shorter rows are padded with dead cells. A single
//! trailing newline at the end of the input does not add a row.

use serde::{Deserialize, Serialize};

use crate::compute::{BitGrid, Cell};
use crate::error::UniverseError;
use crate::schema::ConfigError;

fn default_alive() -> char {
    '#'
}

fn default_dead() -> char {
    '.'
}

/// Characters used for alive and dead cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    #[serde(default = "default_alive")]
    pub alive: char,
    #[serde(default = "default_dead")]
    pub dead: char,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            alive: default_alive(),
            dead: default_dead(),
        }
    }
}

impl Alphabet {
    /// Both characters must differ and neither may be a line terminator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let is_eol = |c: char| c == '\n' || c == '\r';
        if self.alive == self.dead || is_eol(self.alive) || is_eol(self.dead) {
            return Err(ConfigError::InvalidAlphabet {
                alive: self.alive,
                dead: self.dead,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn classify(&self, c: char) -> Option<Cell> {
        if c == self.alive {
            Some(Cell::Alive)
        } else if c == self.dead {
            Some(Cell::Dead)
        } else {
            None
        }
    }

    #[inline]
    pub fn symbol(&self, cell: Cell) -> char {
        match cell {
            Cell::Alive => self.alive,
            Cell::Dead => self.dead,
        }
    }
}

fn rows(text: &str) -> Vec<&str> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Parse pattern text into a new grid.
///
/// The whole input is validated before the grid is allocated. Line and
/// column numbers in errors are 1-based.
pub fn parse(text: &str, alphabet: &Alphabet) -> Result<BitGrid, UniverseError> {
    alphabet.validate()?;

    let rows = rows(text);
    let mut width = 0usize;
    for (line, row) in rows.iter().enumerate() {
        let mut len = 0usize;
        for (column, c) in row.chars().enumerate() {
            if alphabet.classify(c).is_none() {
                return Err(UniverseError::Parse {
                    line: line + 1,
                    column: column + 1,
                    found: c,
                });
            }
            len += 1;
        }
        width = width.max(len);
    }

    let height = rows.len();
    let invalid = || UniverseError::InvalidDimensions {
        width: width as u64,
        height: height as u64,
    };
    let grid_width = u32::try_from(width).map_err(|_| invalid())?;
    let grid_height = u32::try_from(height).map_err(|_| invalid())?;
    let mut grid = BitGrid::new(grid_width, grid_height)?;

    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            if alphabet.classify(ch) == Some(Cell::Alive) {
                let idx = grid.index(r as u32, c as u32);
                grid.set(idx, true);
            }
        }
    }

    Ok(grid)
}

/// Serialize a grid. Every row is exactly `width` characters; rows are
/// joined by `\n` without a trailing newline.
pub fn write(grid: &BitGrid, alphabet: &Alphabet) -> String {
    let width = grid.width() as usize;
    let mut out = String::with_capacity(grid.len() + grid.height() as usize);

    for row in 0..grid.height() {
        if row > 0 {
            out.push('\n');
        }
        let start = row as usize * width;
        for idx in start..start + width {
            out.push(alphabet.symbol(Cell::from(grid.get(idx))));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn alive(grid: &BitGrid, row: u32, col: u32) -> bool {
        grid.get(grid.index(row, col))
    }

    #[test]
    fn test_parse_dimensions() {
        let grid = parse("#..\n.#.\n..#\n...", &Alphabet::default()).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 4);
        assert!(alive(&grid, 0, 0));
        assert!(alive(&grid, 2, 2));
        assert_eq!(grid.count_alive(), 3);
    }

    #[test]
    fn test_short_rows_padded_dead() {
        let grid = parse("#\n.##\n", &Alphabet::default()).unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert!(alive(&grid, 0, 0));
        assert!(!alive(&grid, 0, 1));
        assert!(!alive(&grid, 0, 2));

        // Padded rows do not reproduce the original short line.
        assert_eq!(write(&grid, &Alphabet::default()), "#..\n.##");
    }

    #[test]
    fn test_empty_row_is_all_dead() {
        let grid = parse("##\n\n##", &Alphabet::default()).unwrap();
        assert_eq!(grid.height(), 3);
        assert!(!alive(&grid, 1, 0));
        assert!(!alive(&grid, 1, 1));
    }

    #[test]
    fn test_crlf_rows() {
        let grid = parse("#.\r\n.#\r\n", &Alphabet::default()).unwrap();
        assert_eq!((grid.width(), grid.height()), (2, 2));
        assert!(alive(&grid, 1, 1));
    }

    #[test]
    fn test_invalid_character_position() {
        let err = parse("...\n.#.\n.#o", &Alphabet::default()).unwrap_err();
        assert!(matches!(
            err,
            UniverseError::Parse {
                line: 3,
                column: 3,
                found: 'o'
            }
        ));

        // Columns count characters, not bytes.
        let err = parse("é#", &Alphabet::default()).unwrap_err();
        assert!(matches!(err, UniverseError::Parse { line: 1, column: 1, .. }));
    }

    #[test]
    fn test_empty_input_is_size_error() {
        for text in ["", "\n", "\n\n"] {
            assert!(
                matches!(
                    parse(text, &Alphabet::default()),
                    Err(UniverseError::InvalidDimensions { width: 0, .. })
                ),
                "{text:?}"
            );
        }
    }

    #[test]
    fn test_custom_alphabet() {
        let alphabet = Alphabet {
            alive: 'O',
            dead: ' ',
        };
        let grid = parse(" O \nOOO", &alphabet).unwrap();
        assert_eq!(grid.count_alive(), 4);
        assert_eq!(write(&grid, &alphabet), " O \nOOO");
        assert!(parse(".O.", &alphabet).is_err());
    }

    #[test]
    fn test_ambiguous_alphabet_rejected() {
        let alphabet = Alphabet {
            alive: 'x',
            dead: 'x',
        };
        assert!(matches!(
            parse("x", &alphabet),
            Err(UniverseError::Config(ConfigError::InvalidAlphabet { .. }))
        ));
    }

    #[test]
    fn test_write_bit_order() {
        let mut grid = BitGrid::new(4, 2).unwrap();
        grid.set(grid.index(0, 3), true);
        grid.set(grid.index(1, 0), true);
        assert_eq!(write(&grid, &Alphabet::default()), "...#\n#...");
    }

    fn rectangular_pattern() -> impl Strategy<Value = String> {
        (1usize..24, 1usize..24).prop_flat_map(|(width, height)| {
            proptest::collection::vec(
                proptest::collection::vec(prop_oneof![Just('#'), Just('.')], width),
                height,
            )
            .prop_map(|rows| {
                rows.into_iter()
                    .map(|row| row.into_iter().collect::<String>())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        })
    }

    proptest! {
        #[test]
        fn prop_rectangular_roundtrip(text in rectangular_pattern()) {
            let alphabet = Alphabet::default();
            let grid = parse(&text, &alphabet).unwrap();
            prop_assert_eq!(write(&grid, &alphabet), text);
        }
    }
}
