//! Text-art sprites for die faces.

use dice_core::DieValue;
use thiserror::Error;

/// Validation failures when parsing sprite source.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpriteError {
    #[error("sprite has no rows")]
    Empty,
    #[error("sprite row {row} is {found} chars wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// One die face as fixed-size text art.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSprite {
    rows: Vec<String>,
    width: usize,
}

impl TileSprite {
    /// Parses sprite source: one or more lines of equal character width.
    pub fn parse(source: &str) -> Result<Self, SpriteError> {
        let rows: Vec<String> = source.lines().map(str::to_owned).collect();
        let Some(first) = rows.first() else {
            return Err(SpriteError::Empty);
        };
        let width = first.chars().count();
        if width == 0 {
            return Err(SpriteError::Empty);
        }
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(SpriteError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
        }
        Ok(Self { rows, width })
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// The three face sprites, all loaded.
///
/// Constructing a `TileSet` is the readiness barrier: the client arms input
/// handling only once one exists, so a paint can never hit a missing tile.
#[derive(Clone, Debug)]
pub struct TileSet {
    plus: TileSprite,
    minus: TileSprite,
    zero: TileSprite,
}

impl TileSet {
    pub fn new(plus: TileSprite, minus: TileSprite, zero: TileSprite) -> Self {
        Self { plus, minus, zero }
    }

    /// Sprite for a die face.
    pub fn sprite(&self, value: DieValue) -> &TileSprite {
        match value {
            DieValue::Minus => &self.minus,
            DieValue::Zero => &self.zero,
            DieValue::Plus => &self.plus,
        }
    }
}
