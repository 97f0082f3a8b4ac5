//! Maze panel: tiles first, then items, then the player on top.

use std::collections::BTreeMap;

use maze_core::{EntityKind, ItemKind, Position, TileKind};

use crate::config::RenderMode;
use crate::grid::GridSurface;
use crate::presentation::PresentationMapper;

#[derive(Clone, Debug)]
pub struct LevelView<S> {
    surface: GridSurface<S>,
    mode: RenderMode,
}

impl<S: Clone> LevelView<S> {
    pub fn new(dimensions: (usize, usize), size: (u16, u16), mode: RenderMode) -> Self {
        Self {
            surface: GridSurface::new(dimensions, size),
            mode,
        }
    }

    pub fn surface(&self) -> &GridSurface<S> {
        &self.surface
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn set_dimensions(&mut self, dimensions: (usize, usize)) {
        self.surface.set_dimensions(dimensions);
    }

    pub fn clear(&mut self) {
        self.surface.clear();
    }

    /// Repaints the whole level.
    ///
    /// `tiles` is row-major; `items` are drawn in position order.
    pub fn draw<M>(
        &mut self,
        tiles: &[Vec<TileKind>],
        items: &BTreeMap<Position, ItemKind>,
        player: Position,
        mapper: &M,
    ) where
        M: PresentationMapper<Style = S>,
    {
        self.clear();

        for (row, tiles) in tiles.iter().enumerate() {
            for (col, tile) in tiles.iter().enumerate() {
                self.draw_tile(Position::new(row, col), *tile, mapper);
            }
        }

        for (position, item) in items {
            self.draw_entity(*position, EntityKind::Item(*item), mapper);
        }

        self.draw_entity(player, EntityKind::Player, mapper);
    }

    fn draw_tile<M>(&mut self, position: Position, tile: TileKind, mapper: &M)
    where
        M: PresentationMapper<Style = S>,
    {
        match self.mode {
            RenderMode::Shapes => {
                let bbox = self.surface.bbox(position);
                self.surface
                    .canvas_mut()
                    .create_rectangle(bbox, mapper.tile_fill(tile));
            }
            RenderMode::Images => {
                let at = self.surface.midpoint(position);
                let size = self.surface.cell_size();
                self.surface
                    .canvas_mut()
                    .create_image(at, size, mapper.tile_sprite(tile));
            }
        }
    }

    fn draw_entity<M>(&mut self, position: Position, entity: EntityKind, mapper: &M)
    where
        M: PresentationMapper<Style = S>,
    {
        match self.mode {
            RenderMode::Shapes => {
                let bbox = self.surface.bbox(position);
                self.surface
                    .canvas_mut()
                    .create_oval(bbox, mapper.entity_fill(entity));
                self.surface.annotate_position(position, entity.id());
            }
            RenderMode::Images => {
                let at = self.surface.midpoint(position);
                let size = self.surface.cell_size();
                self.surface
                    .canvas_mut()
                    .create_image(at, size, mapper.entity_sprite(entity));
            }
        }
    }
}
