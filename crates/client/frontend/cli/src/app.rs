//! Glue code tying the game controller and the terminal UI together.
use anyhow::{Context, Result};
use async_trait::async_trait;
use maze_core::ModelLoader;
use maze_frontend_core::{Frontend, FrontendConfig, GameController};

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::{RatatuiTheme, terminal};

/// Terminal frontend owning the controller for one session.
pub struct CliFrontend<L>
where
    L: ModelLoader,
{
    controller: GameController<L, RatatuiTheme>,
    cli_config: CliConfig,
}

impl<L> CliFrontend<L>
where
    L: ModelLoader,
{
    /// Loads the configured game. Fails before touching the terminal so the
    /// error reaches the shell.
    pub fn new(loader: L, frontend_config: &FrontendConfig, cli_config: CliConfig) -> Result<Self> {
        let controller = GameController::new(loader, RatatuiTheme::new(), frontend_config)
            .with_context(|| {
                format!(
                    "Failed to open game file {}",
                    frontend_config.game_file.display()
                )
            })?;

        Ok(Self {
            controller,
            cli_config,
        })
    }

    pub async fn execute(&mut self) -> Result<()> {
        tracing::info!("CLI client starting...");

        let mut terminal = terminal::init(self.cli_config.ui.mouse)?;
        let _guard = terminal::TerminalGuard;

        let result = EventLoop::new(&mut self.controller, self.cli_config.ui.clone())
            .run(&mut terminal)
            .await;

        terminal::restore()?;
        tracing::info!("CLI client exiting");

        result
    }
}

#[async_trait]
impl<L> Frontend for CliFrontend<L>
where
    L: ModelLoader + Send,
    L::Model: Send,
{
    async fn run(&mut self) -> Result<()> {
        self.execute().await
    }
}
