//! The seam between the frontend and a game model.
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ModelError;
use crate::state::{Direction, Inventory, ItemKind, Maze, PlayerStats, Position};

/// Player intent forwarded by the frontend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    UseItem(ItemKind),
}

/// Game state the frontend can draw and drive.
///
/// Accessors describe the *current* level. After [`MazeModel::apply`] the
/// frontend inspects [`did_level_up`](MazeModel::did_level_up),
/// [`has_won`](MazeModel::has_won) and [`has_lost`](MazeModel::has_lost) and
/// then repaints from the accessors; it never caches model data across
/// commands.
pub trait MazeModel {
    fn current_maze(&self) -> &Maze;

    /// Items lying in the current level, keyed by position.
    fn current_items(&self) -> &BTreeMap<Position, ItemKind>;

    fn player_position(&self) -> Position;

    fn player_inventory(&self) -> &Inventory;

    fn player_stats(&self) -> PlayerStats;

    /// Applies a player command.
    ///
    /// Blocked moves are not errors; they simply leave the state unchanged.
    fn apply(&mut self, command: Command) -> Result<(), ModelError>;

    /// True when the most recent command moved the player to a new level.
    fn did_level_up(&self) -> bool;

    fn has_won(&self) -> bool;

    fn has_lost(&self) -> bool;
}

/// Builds fresh models from game files (initial load, restart, new game).
pub trait ModelLoader {
    type Model: MazeModel;

    fn load(&self, path: &Path) -> Result<Self::Model, ModelError>;
}
