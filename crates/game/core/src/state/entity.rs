/// Collectable item classes.
///
/// `Display`/`FromStr` use the item's name (`"Apple"`), which is also how the
/// inventory panel labels it.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    strum::Display,
    strum::EnumString,
)]
pub enum ItemKind {
    Potion,
    Coin,
    Honey,
    Apple,
    Water,
}

impl ItemKind {
    pub const fn id(self) -> char {
        match self {
            ItemKind::Potion => 'M',
            ItemKind::Coin => '$',
            ItemKind::Honey => 'H',
            ItemKind::Apple => 'A',
            ItemKind::Water => 'W',
        }
    }

    pub const fn from_id(id: char) -> Option<Self> {
        match id {
            'M' => Some(ItemKind::Potion),
            '$' => Some(ItemKind::Coin),
            'H' => Some(ItemKind::Honey),
            'A' => Some(ItemKind::Apple),
            'W' => Some(ItemKind::Water),
            _ => None,
        }
    }

    /// Parses an item by its display name.
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// Coins are counted in the stats panel, not listed as usable items.
    pub const fn is_usable(self) -> bool {
        !matches!(self, ItemKind::Coin)
    }
}

/// Anything drawn on top of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Item(ItemKind),
}

impl EntityKind {
    pub const PLAYER_ID: char = 'P';

    /// Symbolic identifier used for annotations and colour/image lookup.
    pub const fn id(self) -> char {
        match self {
            EntityKind::Player => Self::PLAYER_ID,
            EntityKind::Item(item) => item.id(),
        }
    }
}

impl From<ItemKind> for EntityKind {
    fn from(item: ItemKind) -> Self {
        EntityKind::Item(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn names_and_ids_round_trip() {
        for item in ItemKind::iter() {
            assert_eq!(ItemKind::from_id(item.id()), Some(item));
            assert_eq!(ItemKind::from_name(&item.to_string()), Some(item));
        }
        assert_eq!(ItemKind::from_name("Sword"), None);
    }

    #[test]
    fn player_id_is_distinct_from_items() {
        assert_eq!(EntityKind::Player.id(), 'P');
        assert!(ItemKind::iter().all(|item| item.id() != EntityKind::PLAYER_ID));
        assert_eq!(EntityKind::from(ItemKind::Coin).id(), '$');
    }

    #[test]
    fn only_coins_are_unusable() {
        let unusable: Vec<_> = ItemKind::iter().filter(|item| !item.is_usable()).collect();
        assert_eq!(unusable, vec![ItemKind::Coin]);
    }
}
