//! Framework-agnostic styling contract.
//!
//! Views ask a [`PresentationMapper`] for the colour (or image) of each tile
//! and entity so the same drawing code serves any frontend. The lookup is
//! keyed by the symbolic kind, never by position.

use maze_core::{EntityKind, TileKind};

use crate::canvas::Sprite;

pub trait PresentationMapper {
    /// Frontend-specific style value (a colour, a terminal style, ...).
    type Style: Clone;

    /// Fill colour of a tile rectangle.
    fn tile_fill(&self, tile: TileKind) -> Self::Style;

    /// Fill colour of an entity oval, also used as the inventory row
    /// background.
    fn entity_fill(&self, entity: EntityKind) -> Self::Style;

    /// Image drawn for a tile in image mode.
    fn tile_sprite(&self, tile: TileKind) -> Sprite<Self::Style>;

    /// Image drawn for an entity in image mode.
    fn entity_sprite(&self, entity: EntityKind) -> Sprite<Self::Style>;
}
