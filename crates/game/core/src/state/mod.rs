//! Snapshot types a model exposes to the frontend.
//!
//! Everything here is plain data: the frontend reads it to draw a frame and
//! never mutates it directly. Mutation goes through [`crate::MazeModel::apply`].
mod entity;
mod inventory;
mod maze;
mod position;

pub use entity::{EntityKind, ItemKind};
pub use inventory::{Inventory, InventoryEntry};
pub use maze::{Maze, TileKind};
pub use position::{Direction, Position};

/// Scalar player state shown in the stats panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerStats {
    pub hp: u32,
    pub hunger: u32,
    pub thirst: u32,
}

impl PlayerStats {
    pub const fn new(hp: u32, hunger: u32, thirst: u32) -> Self {
        Self { hp, hunger, thirst }
    }

    /// Values in display order: HP, Hunger, Thirst.
    pub const fn as_array(&self) -> [u32; 3] {
        [self.hp, self.hunger, self.thirst]
    }
}
