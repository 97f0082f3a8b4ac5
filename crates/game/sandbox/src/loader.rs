//! Game file loader.
//!
//! A game file is RON:
//!
//! ```ron
//! (
//!     levels: [
//!         (rows: [
//!             "#####",
//!             "#P $D",
//!             "#####",
//!         ]),
//!     ],
//! )
//! ```

use std::path::Path;

use maze_core::{ModelError, ModelLoader};
use serde::Deserialize;

use crate::level::Level;
use crate::model::SandboxModel;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Game file structure for RON files.
#[derive(Debug, Clone, Deserialize)]
pub struct GameFile {
    pub levels: Vec<LevelRon>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LevelRon {
    pub rows: Vec<String>,
}

impl GameFile {
    /// Load and parse every level of a game file.
    pub fn load(path: &Path) -> LoadResult<Vec<Level>> {
        let content = read_file(path)?;
        let data: GameFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse game RON: {}", e))?;

        if data.levels.is_empty() {
            anyhow::bail!("Game file {} has no levels", path.display());
        }

        data.levels
            .iter()
            .enumerate()
            .map(|(index, level)| {
                Level::parse(&level.rows[..])
                    .map_err(|e| anyhow::anyhow!("Level {} is invalid: {}", index + 1, e))
            })
            .collect()
    }
}

/// [`ModelLoader`] producing [`SandboxModel`]s from RON game files.
#[derive(Clone, Copy, Debug, Default)]
pub struct GameFileLoader;

impl ModelLoader for GameFileLoader {
    type Model = SandboxModel;

    fn load(&self, path: &Path) -> Result<SandboxModel, ModelError> {
        let levels = GameFile::load(path).map_err(|e| ModelError::load(path, format!("{e:#}")))?;

        tracing::debug!(
            path = %path.display(),
            levels = levels.len(),
            "Loaded game file"
        );

        Ok(SandboxModel::new(levels))
    }
}

fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
