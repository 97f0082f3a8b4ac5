//! Paints a frontend-core [`Canvas`] into a ratatui buffer.
//!
//! Canvas coordinates are terminal cells relative to the widget area. Every
//! shape is clipped to that area.

use maze_frontend_core::{BoundingBox, Canvas, Point, Shape, Sprite};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

pub struct CanvasWidget<'a> {
    canvas: &'a Canvas<Style>,
    text_style: Style,
}

impl<'a> CanvasWidget<'a> {
    pub fn new(canvas: &'a Canvas<Style>) -> Self {
        Self {
            canvas,
            text_style: Style::default(),
        }
    }

    /// Style patched onto text cells; unset fields keep the underlying fill.
    pub fn text_style(mut self, style: Style) -> Self {
        self.text_style = style;
        self
    }
}

impl Widget for CanvasWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut painter = Painter { area, buf };
        for shape in self.canvas.shapes() {
            match shape {
                Shape::Rectangle { bbox, fill } => painter.fill_rect(*bbox, *fill),
                Shape::Oval { bbox, fill } => painter.fill_oval(*bbox, *fill),
                Shape::Text { at, text } => painter.text(*at, text, self.text_style),
                Shape::Image { at, size, sprite } => {
                    painter.sprite(BoundingBox::centered(*at, *size), sprite)
                }
            }
        }
    }
}

struct Painter<'b> {
    area: Rect,
    buf: &'b mut Buffer,
}

impl Painter<'_> {
    fn cell(&mut self, x: u16, y: u16) -> Option<&mut ratatui::buffer::Cell> {
        if x >= self.area.width || y >= self.area.height {
            return None;
        }
        self.buf.cell_mut((self.area.x + x, self.area.y + y))
    }

    fn fill_rect(&mut self, bbox: BoundingBox, fill: Style) {
        for y in bbox.y_min..bbox.y_max {
            for x in bbox.x_min..bbox.x_max {
                if let Some(cell) = self.cell(x, y) {
                    cell.set_symbol(" ").set_style(fill);
                }
            }
        }
    }

    /// Fills the cells whose centre lies inside the inscribed ellipse.
    fn fill_oval(&mut self, bbox: BoundingBox, fill: Style) {
        let rx = f32::from(bbox.width()) / 2.0;
        let ry = f32::from(bbox.height()) / 2.0;
        if rx == 0.0 || ry == 0.0 {
            return;
        }
        let cx = f32::from(bbox.x_min) + rx;
        let cy = f32::from(bbox.y_min) + ry;

        for y in bbox.y_min..bbox.y_max {
            for x in bbox.x_min..bbox.x_max {
                let dx = (f32::from(x) + 0.5 - cx) / rx;
                let dy = (f32::from(y) + 0.5 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    if let Some(cell) = self.cell(x, y) {
                        cell.set_symbol(" ").set_style(fill);
                    }
                }
            }
        }
    }

    /// Writes `text` centred horizontally on `at`.
    fn text(&mut self, at: Point, text: &str, style: Style) {
        let len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let start = at.x.saturating_sub(len / 2);
        for (offset, ch) in (0..len).zip(text.chars()) {
            let mut symbol = [0u8; 4];
            if let Some(cell) = self.cell(start.saturating_add(offset), at.y) {
                cell.set_symbol(ch.encode_utf8(&mut symbol)).set_style(style);
            }
        }
    }

    fn sprite(&mut self, bbox: BoundingBox, sprite: &Sprite<Style>) {
        let mut symbol = [0u8; 4];
        let glyph: &str = sprite.glyph.encode_utf8(&mut symbol);
        for y in bbox.y_min..bbox.y_max {
            for x in bbox.x_min..bbox.x_max {
                if let Some(cell) = self.cell(x, y) {
                    cell.set_symbol(glyph).set_style(sprite.style);
                }
            }
        }
    }
}
