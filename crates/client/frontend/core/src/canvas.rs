//! Retained drawing primitives.
//!
//! Views record what they draw as [`Shape`]s on a [`Canvas`]; a concrete
//! frontend later paints the shapes with its own toolkit. The style type `S`
//! is whatever the frontend's [`crate::PresentationMapper`] produces.

/// A point in surface-local pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box; `x_max`/`y_max` are exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub x_min: u16,
    pub y_min: u16,
    pub x_max: u16,
    pub y_max: u16,
}

impl BoundingBox {
    pub const fn new(x_min: u16, y_min: u16, x_max: u16, y_max: u16) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Box of `size` (width, height) centred on `center`.
    pub fn centered(center: Point, (width, height): (u16, u16)) -> Self {
        let x_min = center.x.saturating_sub(width / 2);
        let y_min = center.y.saturating_sub(height / 2);
        Self::new(
            x_min,
            y_min,
            x_min.saturating_add(width),
            y_min.saturating_add(height),
        )
    }

    pub const fn width(&self) -> u16 {
        self.x_max.saturating_sub(self.x_min)
    }

    pub const fn height(&self) -> u16 {
        self.y_max.saturating_sub(self.y_min)
    }

    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x_min && point.x < self.x_max && point.y >= self.y_min && point.y < self.y_max
    }
}

/// Image stand-in: a glyph tiled over the image rect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite<S> {
    pub glyph: char,
    pub style: S,
}

impl<S> Sprite<S> {
    pub const fn new(glyph: char, style: S) -> Self {
        Self { glyph, style }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shape<S> {
    Rectangle { bbox: BoundingBox, fill: S },
    Oval { bbox: BoundingBox, fill: S },
    /// Text centred on `at`.
    Text { at: Point, text: String },
    /// Sprite centred on `at`, scaled to `size`.
    Image {
        at: Point,
        size: (u16, u16),
        sprite: Sprite<S>,
    },
}

/// Ordered list of shapes; later shapes paint over earlier ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas<S> {
    shapes: Vec<Shape<S>>,
}

impl<S> Default for Canvas<S> {
    fn default() -> Self {
        Self { shapes: Vec::new() }
    }
}

impl<S> Canvas<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_rectangle(&mut self, bbox: BoundingBox, fill: S) {
        self.shapes.push(Shape::Rectangle { bbox, fill });
    }

    pub fn create_oval(&mut self, bbox: BoundingBox, fill: S) {
        self.shapes.push(Shape::Oval { bbox, fill });
    }

    pub fn create_text(&mut self, at: Point, text: impl Into<String>) {
        self.shapes.push(Shape::Text {
            at,
            text: text.into(),
        });
    }

    pub fn create_image(&mut self, at: Point, size: (u16, u16), sprite: Sprite<S>) {
        self.shapes.push(Shape::Image { at, size, sprite });
    }

    /// Removes every shape.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn shapes(&self) -> &[Shape<S>] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_box_clamps_at_origin() {
        let bbox = BoundingBox::centered(Point::new(1, 1), (6, 4));
        assert_eq!(bbox, BoundingBox::new(0, 0, 6, 4));

        let bbox = BoundingBox::centered(Point::new(10, 5), (6, 4));
        assert_eq!(bbox, BoundingBox::new(7, 3, 13, 7));
        assert_eq!((bbox.width(), bbox.height()), (6, 4));
    }

    #[test]
    fn contains_excludes_max_edges() {
        let bbox = BoundingBox::new(2, 2, 4, 4);
        assert!(bbox.contains(Point::new(2, 3)));
        assert!(!bbox.contains(Point::new(4, 3)));
        assert!(!bbox.contains(Point::new(3, 4)));
    }

    #[test]
    fn clear_empties_the_canvas() {
        let mut canvas = Canvas::new();
        canvas.create_rectangle(BoundingBox::new(0, 0, 1, 1), "grey");
        canvas.create_text(Point::new(0, 0), "P");
        assert_eq!(canvas.len(), 2);

        canvas.clear();
        assert!(canvas.is_empty());
    }
}
