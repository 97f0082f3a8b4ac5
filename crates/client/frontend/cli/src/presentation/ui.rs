//! Screen layout, the render entry point and mouse hit testing.
//!
//! Panels have fixed sizes taken from [`LayoutConfig`], so canvas cells map
//! one-to-one onto terminal cells.
use anyhow::Result;
use maze_frontend_core::{GameInterface, LayoutConfig, Point};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
};

use crate::presentation::{theme::RatatuiTheme, widgets};

const BANNER_HEIGHT: u16 = 3;
const BORDER: u16 = 2;

/// Rendering context containing all state needed to draw a frame.
pub struct RenderContext<'a> {
    pub interface: &'a GameInterface<RatatuiTheme>,
    pub controls_height: u16,
}

/// Something clickable under the mouse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
    FileMenu,
    /// Cell inside the level canvas, in canvas coordinates.
    Level(Point),
    InventoryRow(usize),
    RestartButton,
    NewGameButton,
}

/// Outer areas (borders included) of every panel in the last frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiLayout {
    pub banner: Rect,
    pub level: Rect,
    pub inventory: Rect,
    pub stats: Rect,
    pub controls: Rect,
}

impl UiLayout {
    pub fn compute(area: Rect, layout: LayoutConfig, controls_height: u16) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(BANNER_HEIGHT),                         // Banner
                Constraint::Length(layout.maze_height.saturating_add(BORDER)),  // Level + inventory
                Constraint::Length(layout.stats_height.saturating_add(BORDER)), // Stats
                Constraint::Length(controls_height),                       // Controls
                Constraint::Min(0),
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(layout.maze_width.saturating_add(BORDER)),
                Constraint::Length(layout.inventory_width.saturating_add(BORDER)),
                Constraint::Min(0),
            ])
            .split(rows[1]);

        let stats_width = layout.stats_width().saturating_add(BORDER);
        Self {
            banner: rows[0],
            level: body[0],
            inventory: body[1],
            stats: narrow(rows[2], stats_width),
            controls: narrow(rows[3], stats_width),
        }
    }

    /// Area the level canvas is painted into.
    pub fn level_canvas(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.level)
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        if contains(widgets::header::file_button(self.banner), column, row) {
            return Some(Hit::FileMenu);
        }

        let canvas = self.level_canvas();
        if contains(canvas, column, row) {
            return Some(Hit::Level(Point::new(column - canvas.x, row - canvas.y)));
        }

        if let Some(index) = widgets::inventory::row_at(self.inventory, column, row) {
            return Some(Hit::InventoryRow(index));
        }

        let controls = widgets::controls::regions(self.controls);
        if contains(controls.restart, column, row) {
            return Some(Hit::RestartButton);
        }
        if contains(controls.new_game, column, row) {
            return Some(Hit::NewGameButton);
        }

        None
    }
}

/// Render the whole UI and return the layout used, for hit testing.
pub fn render(frame: &mut Frame, ctx: &RenderContext) -> UiLayout {
    let theme = ctx.interface.mapper();
    let layout = UiLayout::compute(frame.area(), ctx.interface.layout(), ctx.controls_height);

    widgets::header::render(frame, layout.banner, theme);
    widgets::level::render(frame, layout.level, ctx.interface.level(), theme);
    widgets::inventory::render(frame, layout.inventory, ctx.interface.inventory(), theme);
    widgets::stats::render(frame, layout.stats, ctx.interface.stats(), theme);
    widgets::controls::render(frame, layout.controls, ctx.interface.clock(), theme);

    if let Some(dialog) = ctx.interface.dialog() {
        let area = centered_rect(60, 30, frame.area());
        widgets::dialog::render(frame, area, dialog, theme);
    }

    layout
}

pub fn draw<B: Backend>(terminal: &mut Terminal<B>, ctx: &RenderContext) -> Result<UiLayout> {
    let mut layout = UiLayout::default();
    terminal.draw(|frame| layout = render(frame, ctx))?;
    Ok(layout)
}

fn narrow(area: Rect, width: u16) -> Rect {
    Rect {
        width: area.width.min(width),
        ..area
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Create a centered rectangle for modal overlays.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> UiLayout {
        let config = LayoutConfig {
            maze_width: 20,
            maze_height: 10,
            inventory_width: 12,
            stats_height: 2,
        };
        UiLayout::compute(Rect::new(0, 0, 80, 40), config, 3)
    }

    #[test]
    fn panels_follow_configured_sizes() {
        let layout = layout();
        assert_eq!(layout.banner, Rect::new(0, 0, 80, 3));
        assert_eq!(layout.level, Rect::new(0, 3, 22, 12));
        assert_eq!(layout.inventory, Rect::new(22, 3, 14, 12));
        assert_eq!(layout.stats, Rect::new(0, 15, 34, 4));
        assert_eq!(layout.controls, Rect::new(0, 19, 34, 3));
        assert_eq!(layout.level_canvas(), Rect::new(1, 4, 20, 10));
    }

    #[test]
    fn hit_testing() {
        let layout = layout();
        assert_eq!(layout.hit(2, 1), Some(Hit::FileMenu));
        assert_eq!(layout.hit(5, 6), Some(Hit::Level(Point::new(4, 2))));
        assert_eq!(layout.hit(25, 5), Some(Hit::InventoryRow(0)));
        assert_eq!(layout.hit(25, 4), None);
        assert_eq!(layout.hit(3, 20), Some(Hit::RestartButton));
        assert_eq!(layout.hit(20, 20), Some(Hit::NewGameButton));
        assert_eq!(layout.hit(70, 30), None);
    }
}
