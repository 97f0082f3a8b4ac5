//! Stats panel: header/value grid painted from the stats canvas.

use maze_frontend_core::views::StatsView;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders},
};

use super::CanvasWidget;
use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view: &StatsView<Style>, theme: &RatatuiTheme) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let canvas = CanvasWidget::new(view.surface().canvas()).text_style(theme.label());
    frame.render_widget(canvas, inner);
}
