//! Tuning constants for the sandbox rules.

use maze_core::{ItemKind, PlayerStats};

pub const MAX_HEALTH: u32 = 100;
pub const MAX_HUNGER: u32 = 10;
pub const MAX_THIRST: u32 = 10;

/// Hunger and thirst grow by one every this many successful moves.
pub const MOVES_PER_DECAY: u32 = 5;

pub const LAVA_DAMAGE: u32 = 5;

pub const STARTING_STATS: PlayerStats = PlayerStats::new(MAX_HEALTH, 0, 0);

/// Applies the effect of consuming `item` to `stats`.
///
/// Returns `false` for items with no consumable effect (coins).
pub fn consume(item: ItemKind, stats: &mut PlayerStats) -> bool {
    match item {
        ItemKind::Potion => stats.hp = (stats.hp + 20).min(MAX_HEALTH),
        ItemKind::Honey => stats.hunger = stats.hunger.saturating_sub(5),
        ItemKind::Apple => stats.hunger = stats.hunger.saturating_sub(1),
        ItemKind::Water => stats.thirst = stats.thirst.saturating_sub(5),
        ItemKind::Coin => return false,
    }
    true
}

/// A player is lost once any stat runs out.
pub fn is_depleted(stats: &PlayerStats) -> bool {
    stats.hp == 0 || stats.hunger >= MAX_HUNGER || stats.thirst >= MAX_THIRST
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn potion_heals_up_to_cap() {
        let mut stats = PlayerStats::new(90, 0, 0);
        assert!(consume(ItemKind::Potion, &mut stats));
        assert_eq!(stats.hp, MAX_HEALTH);
    }

    #[test]
    fn food_and_water_never_underflow() {
        let mut stats = PlayerStats::new(50, 3, 2);
        consume(ItemKind::Honey, &mut stats);
        consume(ItemKind::Water, &mut stats);
        assert_eq!(stats, PlayerStats::new(50, 0, 0));

        stats.hunger = 4;
        consume(ItemKind::Apple, &mut stats);
        assert_eq!(stats.hunger, 3);
    }

    #[test]
    fn coins_are_not_consumable() {
        let mut stats = STARTING_STATS;
        assert!(!consume(ItemKind::Coin, &mut stats));
        assert_eq!(stats, STARTING_STATS);
    }

    #[test]
    fn depletion() {
        assert!(!is_depleted(&STARTING_STATS));
        assert!(is_depleted(&PlayerStats::new(0, 0, 0)));
        assert!(is_depleted(&PlayerStats::new(10, MAX_HUNGER, 0)));
        assert!(is_depleted(&PlayerStats::new(10, 0, MAX_THIRST)));
    }
}
