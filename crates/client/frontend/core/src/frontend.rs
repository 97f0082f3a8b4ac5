//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;

/// A user interface that owns a game controller and drives it until the
/// player quits.
///
/// # Implementations
///
/// - `CliFrontend`: terminal UI (ratatui + crossterm)
#[async_trait]
pub trait Frontend: Send {
    /// Runs the event loop. Returns once the player confirmed quitting.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend cannot drive its output device.
    async fn run(&mut self) -> Result<()>;
}
