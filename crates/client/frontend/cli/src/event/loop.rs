//! Event loop orchestrating user input, the game clock and rendering.

use anyhow::Result;
use maze_core::ModelLoader;
use maze_frontend_core::GameController;
use ratatui::{Terminal, backend::Backend};
use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use tracing::info;

use crate::config::UiConfig;
use crate::input::InputHandler;
use crate::presentation::{RatatuiTheme, UiLayout};

const FRAME_INTERVAL_MS: u64 = 16;
const CLOCK_INTERVAL_SECS: u64 = 1;

/// Drives a [`GameController`] from terminal events until the player quits.
pub struct EventLoop<'a, L>
where
    L: ModelLoader,
{
    pub(crate) controller: &'a mut GameController<L, RatatuiTheme>,
    pub(crate) input: InputHandler,
    pub(crate) ui: UiConfig,
    /// Layout of the last rendered frame, used for mouse hit testing.
    pub(crate) layout: UiLayout,
}

impl<'a, L> EventLoop<'a, L>
where
    L: ModelLoader,
{
    pub fn new(controller: &'a mut GameController<L, RatatuiTheme>, ui: UiConfig) -> Self {
        Self {
            controller,
            input: InputHandler::new(),
            ui,
            layout: UiLayout::default(),
        }
    }

    pub async fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.controller.play();
        self.render(terminal)?;

        let period = Duration::from_secs(CLOCK_INTERVAL_SECS);
        let mut clock = time::interval_at(Instant::now() + period, period);
        clock.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal)? {
                        break;
                    }
                }
                _ = clock.tick() => {
                    if self.controller.tick_clock().requires_redraw {
                        self.render(terminal)?;
                    }
                }
            }
        }

        info!(elapsed = %self.controller.interface().clock(), "Leaving event loop");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crossterm::event::{
        Event as TermEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    };
    use maze_core::{ItemKind, MazeModel, Position};
    use maze_frontend_core::{Dialog, EventImpact, FrontendConfig};
    use maze_sandbox::GameFileLoader;
    use ratatui::backend::TestBackend;

    use super::*;

    const GAME: &str = r########"(
        levels: [
            (rows: ["#######", "#PW$ D#", "#######"]),
        ],
    )"########;

    fn game_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(GAME.as_bytes()).unwrap();
        file
    }

    fn controller(file: &tempfile::NamedTempFile) -> GameController<GameFileLoader, RatatuiTheme> {
        let config = FrontendConfig {
            game_file: file.path().to_path_buf(),
            ..FrontendConfig::default()
        };
        GameController::new(GameFileLoader, RatatuiTheme::new(), &config).unwrap()
    }

    fn key(ch: char) -> TermEvent {
        TermEvent::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> TermEvent {
        TermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn keys_move_the_player() {
        let file = game_file();
        let mut controller = controller(&file);
        let mut event_loop = EventLoop::new(&mut controller, UiConfig::default());

        assert_eq!(event_loop.handle_terminal_event(key('d')), EventImpact::redraw());
        assert_eq!(event_loop.handle_terminal_event(key('x')), EventImpact::none());

        assert_eq!(controller.model().player_position(), Position::new(1, 2));
        assert_eq!(controller.model().player_inventory().count(ItemKind::Water), 1);
    }

    #[test]
    fn mouse_motion_is_ignored() {
        let file = game_file();
        let mut controller = controller(&file);
        let mut event_loop = EventLoop::new(&mut controller, UiConfig::default());

        let moved = TermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 3,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        let impact = [moved.clone(), moved, key('d')]
            .into_iter()
            .fold(EventImpact::none(), |impact, event| {
                impact.combine(event_loop.handle_terminal_event(event))
            });

        assert_eq!(impact, EventImpact::redraw());
        assert_eq!(controller.model().player_position(), Position::new(1, 2));
    }

    #[test]
    fn clicking_an_inventory_row_uses_the_item() {
        let file = game_file();
        let mut controller = controller(&file);
        controller.play();
        let mut event_loop = EventLoop::new(&mut controller, UiConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(120, 50)).unwrap();

        event_loop.handle_terminal_event(key('d'));
        event_loop.render(&mut terminal).unwrap();

        let row = event_loop.layout.inventory.y + 2;
        let column = event_loop.layout.inventory.x + 2;
        assert_eq!(event_loop.handle_terminal_event(click(column, row)), EventImpact::redraw());

        assert_eq!(controller.model().player_inventory().count(ItemKind::Water), 0);
    }

    #[test]
    fn quitting_needs_confirmation() {
        let file = game_file();
        let mut controller = controller(&file);
        let mut event_loop = EventLoop::new(&mut controller, UiConfig::default());

        event_loop.handle_terminal_event(key('q'));
        assert_eq!(
            event_loop.controller.interface().dialog(),
            Some(&Dialog::ConfirmQuit)
        );
        assert!(event_loop.handle_terminal_event(key('y')).quit);
    }

    #[test]
    fn restart_button_resets_the_game() {
        let file = game_file();
        let mut controller = controller(&file);
        controller.play();
        let mut event_loop = EventLoop::new(&mut controller, UiConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(120, 50)).unwrap();
        event_loop.render(&mut terminal).unwrap();

        event_loop.handle_terminal_event(key('d'));
        let controls = event_loop.layout.controls;
        event_loop.handle_terminal_event(click(controls.x + 2, controls.y + 1));

        assert_eq!(controller.model().player_position(), Position::new(1, 1));
    }
}
