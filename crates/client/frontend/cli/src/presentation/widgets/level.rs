//! Level panel: the painted maze canvas inside a border.

use maze_frontend_core::views::LevelView;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders},
};

use super::CanvasWidget;
use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view: &LevelView<Style>, theme: &RatatuiTheme) {
    let block = Block::default().borders(Borders::ALL).title(" Maze ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let canvas = CanvasWidget::new(view.surface().canvas()).text_style(theme.annotation());
    frame.render_widget(canvas, inner);
}
