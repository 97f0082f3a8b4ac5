use super::Position;

/// Canonical tile classes. The id character doubles as the level-file glyph
/// and the key for colour/image lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum TileKind {
    Wall,
    Empty,
    Lava,
    Door,
}

impl TileKind {
    pub const fn id(self) -> char {
        match self {
            TileKind::Wall => '#',
            TileKind::Empty => ' ',
            TileKind::Lava => 'L',
            TileKind::Door => 'D',
        }
    }

    pub const fn from_id(id: char) -> Option<Self> {
        match id {
            '#' => Some(TileKind::Wall),
            ' ' => Some(TileKind::Empty),
            'L' => Some(TileKind::Lava),
            'D' => Some(TileKind::Door),
            _ => None,
        }
    }

    pub const fn is_blocking(self) -> bool {
        matches!(self, TileKind::Wall)
    }
}

/// Tile grid of the current level, rows top to bottom.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Maze {
    tiles: Vec<Vec<TileKind>>,
}

impl Maze {
    pub fn new(tiles: Vec<Vec<TileKind>>) -> Self {
        Self { tiles }
    }

    pub fn tiles(&self) -> &[Vec<TileKind>] {
        &self.tiles
    }

    /// `(rows, columns)`; the column count is taken from the first row.
    pub fn dimensions(&self) -> (usize, usize) {
        let rows = self.tiles.len();
        let cols = self.tiles.first().map_or(0, Vec::len);
        (rows, cols)
    }

    pub fn tile(&self, position: Position) -> Option<TileKind> {
        self.tiles.get(position.row)?.get(position.col).copied()
    }
}
