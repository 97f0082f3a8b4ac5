//! Minimal reference model for the MazeRunner frontend.
//!
//! This crate provides just enough of a game to drive the frontend:
//! - Game files (RON) listing one or more levels as rows of glyphs
//! - A [`SandboxModel`] implementing [`maze_core::MazeModel`]
//! - A [`GameFileLoader`] implementing [`maze_core::ModelLoader`]
//!
//! Rules are intentionally small and live in [`rules`]; the frontend only ever
//! talks to the model through the `maze-core` traits.

pub mod level;
pub mod loader;
pub mod model;
pub mod rules;

pub use level::{Level, LevelError};
pub use loader::{GameFile, GameFileLoader, LoadResult};
pub use model::SandboxModel;
