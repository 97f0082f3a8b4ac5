//! Banner with the game title, the File menu button and key hints.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub const TITLE: &str = "MazeRunner";
const FILE_LABEL: &str = " File ";
const HINTS: &str = "  wasd/arrows move | 1-9 use item | r restart | n new game | q quit";

fn block(theme: &RatatuiTheme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(TITLE)
        .title_alignment(Alignment::Center)
        .title_style(theme.title())
}

/// Clickable area of the File menu button.
pub fn file_button(area: Rect) -> Rect {
    let inner = block(&RatatuiTheme).inner(area);
    let width = u16::try_from(FILE_LABEL.len()).unwrap_or(u16::MAX);
    Rect::new(inner.x, inner.y, width.min(inner.width), inner.height.min(1))
}

pub fn render(frame: &mut Frame, area: Rect, theme: &RatatuiTheme) {
    let line = Line::from(vec![
        Span::styled(FILE_LABEL, theme.button()),
        Span::styled(HINTS, theme.label()),
    ]);

    let paragraph = Paragraph::new(line).block(block(theme));
    frame.render_widget(paragraph, area);
}
