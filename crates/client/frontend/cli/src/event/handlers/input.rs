//! Input handling and command dispatch.

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use maze_core::ModelLoader;
use maze_frontend_core::EventImpact;
use ratatui::{Terminal, backend::Backend};
use tokio::time::Duration;
use tracing::info;

use super::super::EventLoop;
use crate::input::KeyAction;

impl<L> EventLoop<'_, L>
where
    L: ModelLoader,
{
    /// Drains pending terminal input without blocking and renders at most
    /// once. Returns `true` to quit.
    pub(in crate::event) fn handle_input_tick<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<bool> {
        let mut impact = EventImpact::none();
        while !impact.quit && term_event::poll(Duration::ZERO)? {
            impact = impact.combine(self.handle_terminal_event(term_event::read()?));
        }

        if impact.requires_redraw && !impact.quit {
            self.render(terminal)?;
        }
        Ok(impact.quit)
    }

    pub(in crate::event) fn handle_terminal_event(&mut self, event: TermEvent) -> EventImpact {
        match event {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_press(key),
            TermEvent::Mouse(mouse) => self.handle_mouse(mouse),
            TermEvent::Resize(_, _) => EventImpact::redraw(),
            _ => EventImpact::none(),
        }
    }

    fn handle_key_press(&mut self, key: KeyEvent) -> EventImpact {
        let dialog_open = self.controller.interface().dialog().is_some();
        let action = self.input.handle_key(key, dialog_open);
        self.dispatch(action)
    }

    pub(in crate::event) fn dispatch(&mut self, action: KeyAction) -> EventImpact {
        match action {
            KeyAction::MoveKey(key) => self.controller.handle_key(key),
            KeyAction::Move(direction) => self.controller.move_player(direction),
            KeyAction::UseRow(index) => self.controller.apply_inventory_row(index),
            KeyAction::Restart => self.controller.restart_game(),
            KeyAction::NewGame => self.controller.open_new_game_prompt(),
            KeyAction::FileMenu => self.controller.open_file_menu(),
            KeyAction::Quit => self.controller.request_quit(),
            KeyAction::ForceQuit => {
                info!("Interrupted");
                EventImpact::quit()
            }
            KeyAction::Dialog(input) => self.controller.handle_dialog_input(input),
            KeyAction::Inspect(point) => self.inspect(point),
            KeyAction::None => EventImpact::none(),
        }
    }
}
