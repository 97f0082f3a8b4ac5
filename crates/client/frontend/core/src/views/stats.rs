//! Stats panel: a 2x4 label grid of headers over values.

use maze_core::{PlayerStats, Position};

use crate::grid::GridSurface;

const ROWS: usize = 2;
const COLUMNS: usize = 4;
const COINS_COLUMN: usize = 3;

pub const HEADERS: [&str; COLUMNS] = ["HP", "Hunger", "Thirst", "Coins"];

#[derive(Clone, Debug)]
pub struct StatsView<S> {
    surface: GridSurface<S>,
}

impl<S> StatsView<S> {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            surface: GridSurface::new((ROWS, COLUMNS), (width, height)),
        }
    }

    pub fn surface(&self) -> &GridSurface<S> {
        &self.surface
    }

    pub fn clear(&mut self) {
        self.surface.clear();
    }

    /// Draws HP, hunger and thirst. Coins are drawn separately since they come
    /// from the inventory.
    pub fn draw_stats(&mut self, stats: PlayerStats) {
        for (col, value) in stats.as_array().into_iter().enumerate() {
            self.draw_column(col, value);
        }
    }

    pub fn draw_coins(&mut self, coins: usize) {
        self.draw_column(COINS_COLUMN, coins);
    }

    fn draw_column(&mut self, col: usize, value: impl ToString) {
        self.surface
            .annotate_position(Position::new(0, col), HEADERS[col]);
        self.surface.annotate_position(Position::new(1, col), value);
    }
}
