//! Error types surfaced by models to the frontend.
//!
//! Models report failures through [`ModelError`]. The frontend never aborts on
//! these; it classifies them with [`ErrorSeverity`] to pick a log level and,
//! for load failures, shows a dialog instead.

use std::path::PathBuf;

use crate::state::ItemKind;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: the command was rejected and the state is unchanged
/// - **Fatal**: the model could not be constructed at all
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Invalid input, the model state is untouched.
    ///
    /// Examples: using an item the player does not carry, moving after the
    /// game is over.
    Validation,

    /// The model could not be built.
    ///
    /// Examples: missing game file, malformed level data.
    Fatal,
}

/// Failures a [`crate::MazeModel`] or [`crate::ModelLoader`] may report.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The player tried to use an item that is not in the inventory.
    #[error("no {0} in inventory")]
    MissingItem(ItemKind),

    /// The game has already been won or lost.
    #[error("the game is over")]
    GameOver,

    /// The game file could not be opened or parsed.
    #[error("failed to load game file {}: {reason}", .path.display())]
    Load { path: PathBuf, reason: String },
}

impl ModelError {
    pub fn load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Load {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingItem(_) | Self::GameOver => ErrorSeverity::Validation,
            Self::Load { .. } => ErrorSeverity::Fatal,
        }
    }

    /// Stable identifier for logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingItem(_) => "MODEL_MISSING_ITEM",
            Self::GameOver => "MODEL_GAME_OVER",
            Self::Load { .. } => "MODEL_LOAD_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_errors_are_fatal() {
        let err = ModelError::load("games/missing.ron", "not found");
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert_eq!(err.error_code(), "MODEL_LOAD_FAILED");
        assert_eq!(
            err.to_string(),
            "failed to load game file games/missing.ron: not found"
        );
    }

    #[test]
    fn command_errors_are_validation() {
        assert_eq!(
            ModelError::MissingItem(ItemKind::Apple).severity(),
            ErrorSeverity::Validation
        );
        assert_eq!(ModelError::GameOver.severity(), ErrorSeverity::Validation);
        assert_eq!(
            ModelError::MissingItem(ItemKind::Water).to_string(),
            "no Water in inventory"
        );
    }
}
