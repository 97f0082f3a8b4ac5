//! Terminal UI frontend for MazeRunner.
//!
//! Paints the frontend-core views with ratatui and feeds crossterm keyboard
//! and mouse input back into the [`maze_frontend_core::GameController`].
//!
//! # Architecture
//!
//! - `presentation`: terminal setup, theme, layout and widgets
//! - `input`: key bindings
//! - `event`: the tokio loop tying input, the clock and rendering together

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use maze_frontend_core::FrontendConfig;
