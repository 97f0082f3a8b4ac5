use maze_core::{EntityKind, ItemKind, TileKind};

use crate::canvas::Sprite;
use crate::presentation::PresentationMapper;

/// Mapper producing colour names, handy for asserting on canvases.
pub struct NamedColours;

impl PresentationMapper for NamedColours {
    type Style = &'static str;

    fn tile_fill(&self, tile: TileKind) -> &'static str {
        match tile {
            TileKind::Wall => "grey",
            TileKind::Empty => "light grey",
            TileKind::Lava => "orange",
            TileKind::Door => "red",
        }
    }

    fn entity_fill(&self, entity: EntityKind) -> &'static str {
        match entity {
            EntityKind::Player => "blue",
            EntityKind::Item(ItemKind::Potion) => "purple",
            EntityKind::Item(ItemKind::Coin) => "gold",
            EntityKind::Item(ItemKind::Honey) => "yellow",
            EntityKind::Item(ItemKind::Apple) => "green",
            EntityKind::Item(ItemKind::Water) => "cyan",
        }
    }

    fn tile_sprite(&self, tile: TileKind) -> Sprite<&'static str> {
        Sprite::new(tile.id(), self.tile_fill(tile))
    }

    fn entity_sprite(&self, entity: EntityKind) -> Sprite<&'static str> {
        Sprite::new(entity.id(), self.entity_fill(entity))
    }
}
