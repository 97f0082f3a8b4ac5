//! Cross-frontend primitives for presenting the maze game.
//!
//! Houses the grid geometry, the retained drawing canvas, the level/stats/
//! inventory views and the controller that forwards input to the model. None
//! of it touches a terminal; concrete frontends paint the canvases and feed
//! input back in.
pub mod canvas;
pub mod clock;
pub mod config;
pub mod controller;
pub mod dialog;
pub mod event;
pub mod frontend;
pub mod grid;
pub mod interface;
pub mod presentation;
pub mod views;

pub use canvas::{BoundingBox, Canvas, Point, Shape, Sprite};
pub use clock::GameClock;
pub use config::{FrontendConfig, LayoutConfig, RenderMode};
pub use controller::{GameController, LOSS_MESSAGE, WIN_MESSAGE};
pub use dialog::{Dialog, DialogInput, FileAction, FileMenu, PathPrompt};
pub use event::EventImpact;
pub use frontend::Frontend;
pub use grid::GridSurface;
pub use interface::GameInterface;
pub use presentation::PresentationMapper;

#[cfg(test)]
pub(crate) mod test_support;
