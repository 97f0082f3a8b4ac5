//! Grid geometry over a fixed-size drawing surface.
//!
//! A [`GridSurface`] splits `size` pixels into `dimensions` cells of equal
//! integer size and records drawing on a [`Canvas`]. Any remainder pixels on
//! the right/bottom edge are left unused.

use maze_core::Position;

use crate::canvas::{BoundingBox, Canvas, Point};

#[derive(Clone, Debug)]
pub struct GridSurface<S> {
    /// `(rows, columns)`.
    dimensions: (usize, usize),
    /// `(width, height)` in pixels.
    size: (u16, u16),
    canvas: Canvas<S>,
}

impl<S> GridSurface<S> {
    pub fn new(dimensions: (usize, usize), size: (u16, u16)) -> Self {
        Self {
            dimensions,
            size,
            canvas: Canvas::new(),
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.dimensions
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    /// Changes the cell count, e.g. after a level up. Drawing is not redone.
    pub fn set_dimensions(&mut self, dimensions: (usize, usize)) {
        self.dimensions = dimensions;
    }

    /// `(width, height)` of a single cell; zero when the grid has no rows or
    /// columns.
    pub fn cell_size(&self) -> (u16, u16) {
        let (rows, cols) = self.dimensions;
        let (width, height) = self.size;
        (divide(width, cols), divide(height, rows))
    }

    pub fn bbox(&self, position: Position) -> BoundingBox {
        let (cell_width, cell_height) = self.cell_size();
        let x_min = scale(position.col, cell_width);
        let y_min = scale(position.row, cell_height);
        BoundingBox::new(
            x_min,
            y_min,
            x_min.saturating_add(cell_width),
            y_min.saturating_add(cell_height),
        )
    }

    pub fn midpoint(&self, position: Position) -> Point {
        let (cell_width, cell_height) = self.cell_size();
        let bbox = self.bbox(position);
        Point::new(bbox.x_min + cell_width / 2, bbox.y_min + cell_height / 2)
    }

    /// Grid cell containing the pixel, if any.
    pub fn pixel_to_position(&self, pixel: Point) -> Option<Position> {
        let (cell_width, cell_height) = self.cell_size();
        if cell_width == 0 || cell_height == 0 {
            return None;
        }

        let position = Position::new(
            usize::from(pixel.y / cell_height),
            usize::from(pixel.x / cell_width),
        );
        let (rows, cols) = self.dimensions;
        (position.row < rows && position.col < cols).then_some(position)
    }

    /// Writes `text` centred in the cell at `position`.
    pub fn annotate_position(&mut self, position: Position, text: impl ToString) {
        let at = self.midpoint(position);
        self.canvas.create_text(at, text.to_string());
    }

    pub fn canvas(&self) -> &Canvas<S> {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas<S> {
        &mut self.canvas
    }

    pub fn clear(&mut self) {
        self.canvas.clear();
    }
}

fn divide(length: u16, count: usize) -> u16 {
    if count == 0 {
        return 0;
    }
    u16::try_from(usize::from(length) / count).unwrap_or(u16::MAX)
}

fn scale(index: usize, step: u16) -> u16 {
    u16::try_from(index.saturating_mul(usize::from(step))).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Shape;

    fn surface() -> GridSurface<()> {
        // 5 rows x 4 columns over 40x20 pixels -> 10x4 cells.
        GridSurface::new((5, 4), (40, 20))
    }

    #[test]
    fn cell_size_uses_integer_division() {
        assert_eq!(surface().cell_size(), (10, 4));
        assert_eq!(GridSurface::<()>::new((3, 3), (10, 10)).cell_size(), (3, 3));
    }

    #[test]
    fn bbox_and_midpoint() {
        let grid = surface();
        assert_eq!(grid.bbox(Position::new(0, 0)), BoundingBox::new(0, 0, 10, 4));
        assert_eq!(
            grid.bbox(Position::new(2, 3)),
            BoundingBox::new(30, 8, 40, 12)
        );
        assert_eq!(grid.midpoint(Position::new(2, 3)), Point::new(35, 10));
    }

    #[test]
    fn pixel_to_position_inverts_bbox() {
        let grid = surface();
        assert_eq!(
            grid.pixel_to_position(Point::new(35, 10)),
            Some(Position::new(2, 3))
        );
        assert_eq!(
            grid.pixel_to_position(Point::new(0, 19)),
            Some(Position::new(4, 0))
        );
        assert_eq!(grid.pixel_to_position(Point::new(40, 0)), None);
        assert_eq!(grid.pixel_to_position(Point::new(0, 20)), None);
    }

    #[test]
    fn empty_grid_has_no_cells() {
        let grid = GridSurface::<()>::new((0, 0), (40, 20));
        assert_eq!(grid.cell_size(), (0, 0));
        assert_eq!(grid.bbox(Position::new(1, 1)), BoundingBox::new(0, 0, 0, 0));
        assert_eq!(grid.pixel_to_position(Point::new(1, 1)), None);
    }

    #[test]
    fn set_dimensions_rescales_cells() {
        let mut grid = surface();
        grid.set_dimensions((10, 8));
        assert_eq!(grid.cell_size(), (5, 2));
    }

    #[test]
    fn annotate_and_clear() {
        let mut grid = surface();
        grid.annotate_position(Position::new(1, 1), 'P');
        assert_eq!(
            grid.canvas().shapes(),
            &[Shape::Text {
                at: Point::new(15, 6),
                text: "P".to_string()
            }]
        );

        grid.clear();
        assert!(grid.canvas().is_empty());
    }
}
