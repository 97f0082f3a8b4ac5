//! Controls frame: restart and new game buttons next to the timer.

use maze_frontend_core::GameClock;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

const RESTART_LABEL: &str = " Restart game ";
const NEW_GAME_LABEL: &str = " New game ";
const GAP: u16 = 2;

/// Screen areas of the clickable parts of the controls frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlRegions {
    pub restart: Rect,
    pub new_game: Rect,
    pub timer: Rect,
}

pub fn regions(area: Rect) -> ControlRegions {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let height = inner.height.min(1);

    let restart = label_rect(inner, inner.x, RESTART_LABEL, height);
    let new_game = label_rect(inner, restart.right().saturating_add(GAP), NEW_GAME_LABEL, height);
    let timer_x = new_game.right().saturating_add(GAP).min(inner.right());
    let timer = Rect::new(timer_x, inner.y, inner.right() - timer_x, height);

    ControlRegions {
        restart,
        new_game,
        timer,
    }
}

fn label_rect(inner: Rect, x: u16, label: &str, height: u16) -> Rect {
    let x = x.min(inner.right());
    let width = u16::try_from(label.len()).unwrap_or(u16::MAX);
    Rect::new(x, inner.y, width.min(inner.right() - x), height)
}

pub fn render(frame: &mut Frame, area: Rect, clock: &GameClock, theme: &RatatuiTheme) {
    let block = Block::default().borders(Borders::ALL);
    frame.render_widget(block, area);

    let regions = regions(area);
    frame.render_widget(
        Paragraph::new(Span::styled(RESTART_LABEL, theme.button())),
        regions.restart,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(NEW_GAME_LABEL, theme.button())),
        regions.new_game,
    );

    let timer = Line::from(vec![
        Span::styled("Timer: ", theme.title()),
        Span::styled(clock.display(), theme.label()),
    ]);
    frame.render_widget(Paragraph::new(timer), regions.timer);
}
