//! Modal dialogs shown over the game.
//!
//! At most one dialog is open at a time; while it is open it receives all
//! input and the level ignores movement keys.

use strum::{EnumIter, IntoEnumIterator};

pub const QUIT_TITLE: &str = "Quit Application";
pub const QUIT_MESSAGE: &str = "Do you wish to quit?";
pub const NEW_GAME_TITLE: &str = "New game";
pub const NEW_GAME_LABEL: &str = "Enter game file:";
pub const INVALID_FILE_MESSAGE: &str = "NOT A VALID FILE";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dialog {
    /// Informational message, dismissed with submit or cancel.
    Message(String),
    /// Yes/no confirmation before leaving the application.
    ConfirmQuit,
    /// Text entry for a new game file.
    NewGame(PathPrompt),
    FileMenu(FileMenu),
}

/// Input a dialog understands, already translated from raw keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogInput {
    Char(char),
    Backspace,
    Submit,
    Cancel,
    Next,
    Previous,
}

/// Single-line text entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathPrompt {
    value: String,
}

impl PathPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ch: char) {
        if !ch.is_control() {
            self.value.push(ch);
        }
    }

    pub fn pop(&mut self) {
        self.value.pop();
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum FileAction {
    RestartGame,
    Quit,
}

impl FileAction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::RestartGame => "Restart game",
            Self::Quit => "Quit",
        }
    }
}

/// Drop-down "File" menu with a highlighted entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileMenu {
    selected: usize,
}

impl FileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions() -> impl Iterator<Item = FileAction> {
        FileAction::iter()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> FileAction {
        Self::actions()
            .nth(self.selected)
            .unwrap_or(FileAction::RestartGame)
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % Self::len();
    }

    pub fn previous(&mut self) {
        self.selected = (self.selected + Self::len() - 1) % Self::len();
    }

    fn len() -> usize {
        Self::actions().count()
    }
}
