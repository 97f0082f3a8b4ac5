//! CLI-specific configuration for terminal UI.
use std::env;

use maze_frontend_core::config::read_var;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface, separate from
/// the cross-frontend [`maze_frontend_core::FrontendConfig`].
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    /// Log sub-directory name; generated from the clock when unset.
    pub session_id: Option<String>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_CONTROLS_HEIGHT` - Controls panel height in lines (default: 3)
    /// - `CLI_MOUSE` - Capture mouse clicks (default: true)
    /// - `MAZE_SESSION_ID` - Log session name (default: `session_<unix secs>`)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(height) = read_var::<u16, _>(&lookup, "CLI_CONTROLS_HEIGHT") {
            config.ui.controls_height = height.max(3);
        }
        if let Some(mouse) = read_bool(&lookup, "CLI_MOUSE") {
            config.ui.mouse = mouse;
        }
        config.session_id = lookup("MAZE_SESSION_ID").filter(|id| !id.trim().is_empty());

        config
    }
}

/// UI layout and input configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of the controls panel in lines (including borders).
    pub controls_height: u16,
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            controls_height: 3,
            mouse: true,
        }
    }
}

fn read_bool<F>(lookup: &F, key: &str) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key)?.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
