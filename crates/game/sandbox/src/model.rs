//! [`MazeModel`] implementation backed by parsed levels.

use std::collections::BTreeMap;

use maze_core::{
    Command, Direction, Inventory, ItemKind, Maze, MazeModel, ModelError, PlayerStats, Position,
    TileKind,
};

use crate::level::Level;
use crate::rules;

/// Sandbox game state: a stack of levels and a single player.
#[derive(Clone, Debug)]
pub struct SandboxModel {
    levels: Vec<Level>,
    current: usize,
    player: Position,
    inventory: Inventory,
    stats: PlayerStats,
    moves: u32,
    levelled_up: bool,
    won: bool,
}

impl SandboxModel {
    /// Builds a model starting on the first level.
    ///
    /// `levels` must not be empty; [`crate::GameFile::load`] guarantees this.
    pub fn new(levels: Vec<Level>) -> Self {
        let player = levels.first().map_or(Position::ORIGIN, |level| level.start);
        Self {
            levels,
            current: 0,
            player,
            inventory: Inventory::new(),
            stats: rules::STARTING_STATS,
            moves: 0,
            levelled_up: false,
            won: false,
        }
    }

    pub fn level_index(&self) -> usize {
        self.current
    }

    fn level(&self) -> &Level {
        &self.levels[self.current]
    }

    fn level_mut(&mut self) -> &mut Level {
        &mut self.levels[self.current]
    }

    fn move_player(&mut self, direction: Direction) {
        let Some(target) = self.player.step(direction) else {
            return;
        };
        let Some(tile) = self.level().maze.tile(target) else {
            return;
        };

        let door_locked = tile == TileKind::Door && self.level().coins_remaining() > 0;
        if tile.is_blocking() || door_locked {
            tracing::trace!(?target, ?tile, "Move blocked");
            return;
        }

        self.player = target;
        self.moves += 1;
        self.stats.hp = self.stats.hp.saturating_sub(1);
        if self.moves % rules::MOVES_PER_DECAY == 0 {
            self.stats.hunger += 1;
            self.stats.thirst += 1;
        }

        match tile {
            TileKind::Lava => {
                self.stats.hp = self.stats.hp.saturating_sub(rules::LAVA_DAMAGE);
            }
            TileKind::Door => {
                self.advance_level();
                return;
            }
            TileKind::Wall | TileKind::Empty => {}
        }

        if let Some(item) = self.level_mut().items.remove(&target) {
            self.inventory.add(item);
        }
    }

    fn advance_level(&mut self) {
        if self.current + 1 == self.levels.len() {
            self.won = true;
            return;
        }

        self.current += 1;
        self.player = self.level().start;
        self.levelled_up = true;
        tracing::debug!(level = self.current + 1, "Level up");
    }

    fn use_item(&mut self, item: ItemKind) -> Result<(), ModelError> {
        if self.inventory.count(item) == 0 {
            return Err(ModelError::MissingItem(item));
        }
        if rules::consume(item, &mut self.stats) {
            self.inventory.remove(item);
        }
        Ok(())
    }
}

impl MazeModel for SandboxModel {
    fn current_maze(&self) -> &Maze {
        &self.level().maze
    }

    fn current_items(&self) -> &BTreeMap<Position, ItemKind> {
        &self.level().items
    }

    fn player_position(&self) -> Position {
        self.player
    }

    fn player_inventory(&self) -> &Inventory {
        &self.inventory
    }

    fn player_stats(&self) -> PlayerStats {
        self.stats
    }

    fn apply(&mut self, command: Command) -> Result<(), ModelError> {
        self.levelled_up = false;
        if self.has_won() || self.has_lost() {
            return Err(ModelError::GameOver);
        }

        match command {
            Command::Move(direction) => {
                self.move_player(direction);
                Ok(())
            }
            Command::UseItem(item) => self.use_item(item),
        }
    }

    fn did_level_up(&self) -> bool {
        self.levelled_up
    }

    fn has_won(&self) -> bool {
        self.won
    }

    fn has_lost(&self) -> bool {
        rules::is_depleted(&self.stats)
    }
}
