//! Everything the player sees, bundled for the controller.

use std::collections::BTreeMap;

use maze_core::{Inventory, ItemKind, Maze, PlayerStats, Position};

use crate::clock::GameClock;
use crate::config::{FrontendConfig, LayoutConfig};
use crate::dialog::Dialog;
use crate::presentation::PresentationMapper;
use crate::views::{InventoryView, LevelView, StatsView};

/// Level, stats and inventory views plus the timer and the open dialog.
pub struct GameInterface<M: PresentationMapper> {
    mapper: M,
    layout: LayoutConfig,
    level: LevelView<M::Style>,
    stats: StatsView<M::Style>,
    inventory: InventoryView<M::Style>,
    clock: GameClock,
    dialog: Option<Dialog>,
}

impl<M: PresentationMapper> GameInterface<M> {
    /// Sizes the level surface for a maze of `dimensions` (rows, columns).
    pub fn new(mapper: M, config: &FrontendConfig, dimensions: (usize, usize)) -> Self {
        let layout = config.layout;
        Self {
            mapper,
            layout,
            level: LevelView::new(
                dimensions,
                (layout.maze_width, layout.maze_height),
                config.render_mode,
            ),
            stats: StatsView::new(layout.stats_width(), layout.stats_height),
            inventory: InventoryView::new(),
            clock: GameClock::new(),
            dialog: None,
        }
    }

    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    pub fn layout(&self) -> LayoutConfig {
        self.layout
    }

    pub fn level(&self) -> &LevelView<M::Style> {
        &self.level
    }

    pub fn stats(&self) -> &StatsView<M::Style> {
        &self.stats
    }

    pub fn inventory(&self) -> &InventoryView<M::Style> {
        &self.inventory
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut GameClock {
        &mut self.clock
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn show_dialog(&mut self, dialog: Dialog) {
        self.dialog = Some(dialog);
    }

    pub fn take_dialog(&mut self) -> Option<Dialog> {
        self.dialog.take()
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn set_maze_dimensions(&mut self, dimensions: (usize, usize)) {
        self.level.set_dimensions(dimensions);
    }

    pub fn clear_all(&mut self) {
        self.level.clear();
        self.stats.clear();
        self.inventory.clear();
    }

    /// Repaints every view from a model snapshot.
    pub fn draw(
        &mut self,
        maze: &Maze,
        items: &BTreeMap<Position, ItemKind>,
        player: Position,
        inventory: &Inventory,
        stats: PlayerStats,
    ) {
        self.clear_all();
        self.level.draw(maze.tiles(), items, player, &self.mapper);
        self.stats.draw_stats(stats);
        self.stats.draw_coins(inventory.count(ItemKind::Coin));
        self.inventory.draw_inventory(inventory, &self.mapper);
    }
}
