//! Top-level client assembling a frontend around a game model.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   └─→ Frontend (UI layer - CLI, ...) owning a GameController
//!         └─→ MazeModel (loaded through a ModelLoader)
//! ```

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from maze-frontend-core
pub use maze_frontend_core::Frontend;

use anyhow::Result;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` receives a fully constructed frontend
/// 2. `Client::run()` transfers control to the frontend until the player quits
pub struct Client {
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend fails.
    pub async fn run(self) -> Result<()> {
        let mut frontend = self.frontend;
        let result = frontend.run().await;

        match &result {
            Ok(()) => tracing::info!("Frontend finished"),
            Err(e) => tracing::error!("Frontend error: {:#}", e),
        }
        result
    }
}
