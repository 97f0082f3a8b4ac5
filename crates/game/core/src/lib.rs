//! Shared vocabulary between the MazeRunner frontend and its game model.
//!
//! `maze-core` defines the read-only snapshot types (maze tiles, items,
//! inventory, stats) and the [`MazeModel`] trait a model implements so the
//! frontend can draw it and forward player commands. No game rules live here;
//! they belong to whichever model is plugged in.
pub mod error;
pub mod model;
pub mod state;

pub use error::{ErrorSeverity, ModelError};
pub use model::{Command, MazeModel, ModelLoader};
pub use state::{
    Direction, EntityKind, Inventory, InventoryEntry, ItemKind, Maze, PlayerStats, Position,
    TileKind,
};
