//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use maze_core::Direction;
use maze_frontend_core::{DialogInput, Point};

use crate::presentation::Hit;

/// High-level outcome of processing an input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Movement key, forwarded to the controller as typed.
    MoveKey(char),
    Move(Direction),
    /// Use the item on this inventory row (0-based).
    UseRow(usize),
    Restart,
    NewGame,
    FileMenu,
    /// Ask for quit confirmation.
    Quit,
    /// Leave immediately (Ctrl+C).
    ForceQuit,
    Dialog(DialogInput),
    /// A level cell was clicked.
    Inspect(Point),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into frontend commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command. While a dialog
    /// is open every key goes to the dialog.
    pub fn handle_key(&self, key: KeyEvent, dialog_open: bool) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::ForceQuit;
        }
        if dialog_open {
            return Self::dialog_key(key);
        }

        match key.code {
            KeyCode::Char(ch) => Self::handle_char(ch),
            KeyCode::Left => KeyAction::Move(Direction::Left),
            KeyCode::Right => KeyAction::Move(Direction::Right),
            KeyCode::Up => KeyAction::Move(Direction::Up),
            KeyCode::Down => KeyAction::Move(Direction::Down),
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    /// Converts a mouse click target into a command.
    pub fn handle_click(&self, hit: Hit, dialog_open: bool) -> KeyAction {
        if dialog_open {
            return KeyAction::None;
        }
        match hit {
            Hit::FileMenu => KeyAction::FileMenu,
            Hit::Level(point) => KeyAction::Inspect(point),
            Hit::InventoryRow(index) => KeyAction::UseRow(index),
            Hit::RestartButton => KeyAction::Restart,
            Hit::NewGameButton => KeyAction::NewGame,
        }
    }

    fn handle_char(raw: char) -> KeyAction {
        let ch = raw.to_ascii_lowercase();
        match ch {
            'w' | 'a' | 's' | 'd' => KeyAction::MoveKey(ch),
            'r' => KeyAction::Restart,
            'n' => KeyAction::NewGame,
            'f' => KeyAction::FileMenu,
            'q' => KeyAction::Quit,
            '1'..='9' => ch
                .to_digit(10)
                .and_then(|digit| usize::try_from(digit).ok())
                .map_or(KeyAction::None, |digit| KeyAction::UseRow(digit - 1)),
            _ => KeyAction::None,
        }
    }

    fn dialog_key(key: KeyEvent) -> KeyAction {
        let input = match key.code {
            KeyCode::Enter => DialogInput::Submit,
            KeyCode::Esc => DialogInput::Cancel,
            KeyCode::Backspace => DialogInput::Backspace,
            KeyCode::Up | KeyCode::BackTab => DialogInput::Previous,
            KeyCode::Down | KeyCode::Tab => DialogInput::Next,
            KeyCode::Char(ch) => DialogInput::Char(ch),
            _ => return KeyAction::None,
        };
        KeyAction::Dialog(input)
    }
}
