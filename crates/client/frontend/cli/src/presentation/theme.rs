//! Ratatui theme implementation of PresentationMapper.
//!
//! Fills become background colours so rectangles and ovals paint as solid
//! blocks of terminal cells. Sprites carry a glyph on top of the fill.

use maze_core::{EntityKind, ItemKind, TileKind};
use maze_frontend_core::{PresentationMapper, Sprite};
use ratatui::style::{Color, Modifier, Style};

/// Ratatui-specific theme implementing PresentationMapper.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    /// Style of id annotations drawn over fills.
    pub fn annotation(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(Color::White)
    }

    pub fn button(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Gray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    fn tile_colour(tile: TileKind) -> Color {
        match tile {
            TileKind::Wall => Color::DarkGray,
            TileKind::Empty => Color::Gray,
            TileKind::Lava => Color::LightRed,
            TileKind::Door => Color::Red,
        }
    }

    fn entity_colour(entity: EntityKind) -> Color {
        match entity {
            EntityKind::Player => Color::Blue,
            EntityKind::Item(ItemKind::Potion) => Color::Magenta,
            EntityKind::Item(ItemKind::Coin) => Color::Yellow,
            EntityKind::Item(ItemKind::Honey) => Color::LightYellow,
            EntityKind::Item(ItemKind::Apple) => Color::Green,
            EntityKind::Item(ItemKind::Water) => Color::Cyan,
        }
    }
}

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn tile_fill(&self, tile: TileKind) -> Style {
        Style::default().bg(Self::tile_colour(tile))
    }

    fn entity_fill(&self, entity: EntityKind) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::entity_colour(entity))
    }

    fn tile_sprite(&self, tile: TileKind) -> Sprite<Style> {
        let glyph = match tile {
            TileKind::Wall => '▓',
            TileKind::Empty => ' ',
            TileKind::Lava => '≈',
            TileKind::Door => '▯',
        };
        let style = Style::default()
            .fg(Color::Black)
            .bg(Self::tile_colour(tile));
        Sprite::new(glyph, style)
    }

    fn entity_sprite(&self, entity: EntityKind) -> Sprite<Style> {
        let glyph = match entity {
            EntityKind::Player => '@',
            EntityKind::Item(ItemKind::Potion) => '!',
            EntityKind::Item(ItemKind::Coin) => '$',
            EntityKind::Item(ItemKind::Honey) => '%',
            EntityKind::Item(ItemKind::Apple) => '*',
            EntityKind::Item(ItemKind::Water) => '~',
        };
        let style = Style::default()
            .fg(Color::White)
            .bg(Self::entity_colour(entity))
            .add_modifier(Modifier::BOLD);
        Sprite::new(glyph, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_entities() -> Vec<EntityKind> {
        let mut entities = vec![EntityKind::Player];
        entities.extend(
            [
                ItemKind::Potion,
                ItemKind::Coin,
                ItemKind::Honey,
                ItemKind::Apple,
                ItemKind::Water,
            ]
            .map(EntityKind::Item),
        );
        entities
    }

    #[test]
    fn entities_have_distinct_fills() {
        let theme = RatatuiTheme::new();
        let fills: Vec<_> = all_entities()
            .into_iter()
            .map(|entity| theme.entity_fill(entity).bg)
            .collect();
        for (index, fill) in fills.iter().enumerate() {
            assert!(fill.is_some());
            assert!(!fills[index + 1..].contains(fill));
        }
    }

    #[test]
    fn sprites_share_the_fill_colour() {
        let theme = RatatuiTheme::new();
        for entity in all_entities() {
            assert_eq!(
                theme.entity_sprite(entity).style.bg,
                theme.entity_fill(entity).bg
            );
        }
        assert_eq!(
            theme.tile_sprite(TileKind::Lava).style.bg,
            theme.tile_fill(TileKind::Lava).bg
        );
    }
}
