//! Ratatui widgets, one per panel.
pub mod canvas;
pub mod controls;
pub mod dialog;
pub mod header;
pub mod inventory;
pub mod level;
pub mod stats;

pub use canvas::CanvasWidget;
