//! Inventory panel: header line followed by one coloured row per item.

use maze_frontend_core::views::InventoryView;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

fn inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Screen area of the `index`-th row, if it fits in the panel.
pub fn row_area(area: Rect, index: usize) -> Option<Rect> {
    let inner = inner(area);
    let offset = u16::try_from(index).ok()?.checked_add(1)?;
    let y = inner.y.checked_add(offset)?;
    (y < inner.bottom()).then(|| Rect::new(inner.x, y, inner.width, 1))
}

/// Row index under a terminal cell, if any. The header line is not a row.
pub fn row_at(area: Rect, column: u16, row: u16) -> Option<usize> {
    let inner = inner(area);
    let inside = column >= inner.x && column < inner.right() && row < inner.bottom();
    if !inside || row <= inner.y {
        return None;
    }
    Some(usize::from(row - inner.y - 1))
}

pub fn render(frame: &mut Frame, area: Rect, view: &InventoryView<Style>, theme: &RatatuiTheme) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }
    let header = Paragraph::new(view.header())
        .alignment(Alignment::Center)
        .style(theme.title());
    frame.render_widget(header, Rect::new(inner.x, inner.y, inner.width, 1));

    for (index, row) in view.rows().iter().enumerate() {
        let Some(row_rect) = row_area(area, index) else {
            break;
        };
        let paragraph = Paragraph::new(row.label.as_str())
            .alignment(Alignment::Center)
            .style(row.fill);
        frame.render_widget(paragraph, row_rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_start_below_the_header() {
        let area = Rect::new(10, 5, 12, 6);
        assert_eq!(row_area(area, 0), Some(Rect::new(11, 7, 10, 1)));
        assert_eq!(row_area(area, 2), Some(Rect::new(11, 9, 10, 1)));
        assert_eq!(row_area(area, 3), None);

        assert_eq!(row_at(area, 11, 7), Some(0));
        assert_eq!(row_at(area, 20, 9), Some(2));
        assert_eq!(row_at(area, 11, 6), None);
        assert_eq!(row_at(area, 10, 7), None);
    }
}
