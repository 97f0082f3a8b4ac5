//! Level parsing from glyph rows.
//!
//! Each row is a string of tile ids (`#`, ` `, `L`, `D`), item ids
//! (`M`, `$`, `H`, `A`, `W`) or the player id `P`. Items and the player stand
//! on empty tiles.

use std::collections::BTreeMap;

use maze_core::{EntityKind, ItemKind, Maze, Position, TileKind};

/// Errors found while parsing a level layout.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    #[error("level has no rows")]
    Empty,

    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown glyph {glyph:?} at {position:?}")]
    UnknownGlyph { glyph: char, position: Position },

    #[error("level has no player start")]
    MissingPlayer,

    #[error("second player start at {0:?}")]
    MultiplePlayers(Position),
}

/// One parsed level: tiles, loose items and the player's start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    pub maze: Maze,
    pub items: BTreeMap<Position, ItemKind>,
    pub start: Position,
}

impl Level {
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, LevelError> {
        let expected = rows.first().ok_or(LevelError::Empty)?.as_ref().chars().count();

        let mut tiles = Vec::with_capacity(rows.len());
        let mut items = BTreeMap::new();
        let mut start = None;

        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != expected {
                return Err(LevelError::Ragged {
                    row: row_index,
                    expected,
                    found,
                });
            }

            let mut tile_row = Vec::with_capacity(found);
            for (col_index, glyph) in row.chars().enumerate() {
                let position = Position::new(row_index, col_index);

                if let Some(tile) = TileKind::from_id(glyph) {
                    tile_row.push(tile);
                    continue;
                }

                if glyph == EntityKind::PLAYER_ID {
                    if start.replace(position).is_some() {
                        return Err(LevelError::MultiplePlayers(position));
                    }
                } else if let Some(item) = ItemKind::from_id(glyph) {
                    items.insert(position, item);
                } else {
                    return Err(LevelError::UnknownGlyph { glyph, position });
                }
                tile_row.push(TileKind::Empty);
            }
            tiles.push(tile_row);
        }

        Ok(Self {
            maze: Maze::new(tiles),
            items,
            start: start.ok_or(LevelError::MissingPlayer)?,
        })
    }

    /// Number of coins still lying in the level.
    pub fn coins_remaining(&self) -> usize {
        self.items
            .values()
            .filter(|item| **item == ItemKind::Coin)
            .count()
    }
}
