//! The three main panels: level, stats and inventory.
//!
//! Each view is cleared and redrawn from scratch on every repaint; none of
//! them keeps model data between frames.
pub mod inventory;
pub mod level;
pub mod stats;

pub use inventory::{InventoryRow, InventoryView};
pub use level::LevelView;
pub use stats::StatsView;
