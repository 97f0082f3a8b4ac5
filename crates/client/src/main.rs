//! MazeRunner client binary.
//!
//! Composition root: reads configuration, sets up logging, loads the game
//! through the sandbox model and hands control to the selected frontend.
//!
//! # Examples
//!
//! ```bash
//! MAZE_GAME_FILE=games/single.ron MAZE_RENDER_MODE=shapes cargo run -p maze-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use maze_client::Client;
    use maze_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use maze_sandbox::GameFileLoader;

    // 1. Load configuration from environment
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(&cli_config.session_id)?;

    tracing::info!("Starting MazeRunner client");
    tracing::info!("Game file: {}", frontend_config.game_file.display());
    tracing::info!("Render mode: {}", frontend_config.render_mode);

    // 3. Build Frontend (loads the game)
    tracing::debug!("Building CLI frontend...");
    let frontend = CliFrontend::new(GameFileLoader, &frontend_config, cli_config)?;

    // 4. Build and run
    let client = Client::builder().frontend(frontend).build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
