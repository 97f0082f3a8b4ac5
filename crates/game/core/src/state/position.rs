/// Grid coordinate as `(row, column)`, with row 0 at the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbouring position in `direction`, or `None` when it would leave
    /// the non-negative quadrant.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Movement directions bound to the `w`/`a`/`s`/`d` keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(row, column)` offset of a single step.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub const fn key(self) -> char {
        match self {
            Direction::Up => 'w',
            Direction::Down => 's',
            Direction::Left => 'a',
            Direction::Right => 'd',
        }
    }

    /// Maps a movement key to its direction. Only lowercase keys move.
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            'w' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn keys_round_trip() {
        for direction in Direction::iter() {
            assert_eq!(Direction::from_key(direction.key()), Some(direction));
        }
        assert_eq!(Direction::from_key('W'), None);
        assert_eq!(Direction::from_key('x'), None);
    }

    #[test]
    fn step_refuses_negative_coordinates() {
        assert_eq!(Position::ORIGIN.step(Direction::Up), None);
        assert_eq!(Position::ORIGIN.step(Direction::Left), None);
        assert_eq!(
            Position::new(2, 3).step(Direction::Down),
            Some(Position::new(3, 3))
        );
        assert_eq!(
            Position::new(2, 3).step(Direction::Left),
            Some(Position::new(2, 2))
        );
    }
}
