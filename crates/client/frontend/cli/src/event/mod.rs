//! Event handling for CLI client.
//!
//! This module contains the event loop orchestrator that coordinates
//! terminal input, the game clock and rendering.

mod handlers;
mod r#loop;

pub use r#loop::EventLoop;
