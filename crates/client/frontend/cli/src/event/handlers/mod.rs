//! Event handler implementations for EventLoop.
//!
//! This module contains handler methods organized by responsibility:
//! - `input`: keyboard input and command dispatch
//! - `mouse`: click hit testing
//! - `rendering`: terminal rendering
//!
//! All handlers are implemented as `impl EventLoop` blocks in separate files.

mod input;
mod mouse;
mod rendering;
