//! Frontend configuration structures and loaders.
//!
//! Settings shared by every frontend: which game to open, how the level is
//! drawn and how large each drawing surface is.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use strum::{Display, EnumString};

pub const DEFAULT_GAME_FILE: &str = "games/game1.ron";

/// How the level view draws tiles and entities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RenderMode {
    /// Coloured rectangles and ovals with id annotations.
    Shapes,
    /// Sprites scaled to each cell.
    #[default]
    Images,
}

#[derive(Clone, Debug)]
pub struct FrontendConfig {
    pub game_file: PathBuf,
    pub render_mode: RenderMode,
    pub layout: LayoutConfig,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            game_file: PathBuf::from(DEFAULT_GAME_FILE),
            render_mode: RenderMode::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl FrontendConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MAZE_GAME_FILE` - Game file opened at startup (default: games/game1.ron)
    /// - `MAZE_RENDER_MODE` - `shapes` or `images` (default: images)
    /// - `MAZE_WIDTH` / `MAZE_HEIGHT` - Level surface size (default: 60x30)
    /// - `INVENTORY_WIDTH` - Inventory panel width (default: 24)
    /// - `STATS_HEIGHT` - Stats panel height (default: 4)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`FrontendConfig::from_env`] with a custom variable lookup.
    /// Unparsable values fall back to the defaults.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("MAZE_GAME_FILE").filter(|path| !path.trim().is_empty()) {
            config.game_file = PathBuf::from(path.trim());
        }
        if let Some(mode) = read_var(&lookup, "MAZE_RENDER_MODE") {
            config.render_mode = mode;
        }

        let layout = &mut config.layout;
        if let Some(width) = read_var::<u16, _>(&lookup, "MAZE_WIDTH") {
            layout.maze_width = width.max(1);
        }
        if let Some(height) = read_var::<u16, _>(&lookup, "MAZE_HEIGHT") {
            layout.maze_height = height.max(1);
        }
        if let Some(width) = read_var::<u16, _>(&lookup, "INVENTORY_WIDTH") {
            layout.inventory_width = width.max(1);
        }
        if let Some(height) = read_var::<u16, _>(&lookup, "STATS_HEIGHT") {
            layout.stats_height = height.max(2);
        }

        config
    }
}

/// Surface sizes in frontend units (terminal cells for the CLI).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    pub maze_width: u16,
    pub maze_height: u16,
    pub inventory_width: u16,
    pub stats_height: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            maze_width: 60,
            maze_height: 30,
            inventory_width: 24,
            stats_height: 4,
        }
    }
}

impl LayoutConfig {
    /// The stats panel spans the level and the inventory.
    pub fn stats_width(&self) -> u16 {
        self.maze_width.saturating_add(self.inventory_width)
    }
}

/// Parses `key` from `lookup`; unset or unparsable values yield `None`.
pub fn read_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}
