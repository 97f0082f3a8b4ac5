use super::ItemKind;

/// Count of one item kind held by the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InventoryEntry {
    pub kind: ItemKind,
    pub count: usize,
}

/// Player inventory grouped by item kind, in acquisition order.
///
/// Invariant: no entry has a zero count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    entries: Vec<InventoryEntry>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: ItemKind) {
        match self.entries.iter_mut().find(|entry| entry.kind == kind) {
            Some(entry) => entry.count += 1,
            None => self.entries.push(InventoryEntry { kind, count: 1 }),
        }
    }

    /// Removes one item of `kind`; returns `false` when none was held.
    pub fn remove(&mut self, kind: ItemKind) -> bool {
        let Some(index) = self.entries.iter().position(|entry| entry.kind == kind) else {
            return false;
        };

        self.entries[index].count -= 1;
        if self.entries[index].count == 0 {
            self.entries.remove(index);
        }
        true
    }

    pub fn count(&self, kind: ItemKind) -> usize {
        self.entries
            .iter()
            .find(|entry| entry.kind == kind)
            .map_or(0, |entry| entry.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryEntry> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ItemKind> for Inventory {
    fn from_iter<T: IntoIterator<Item = ItemKind>>(iter: T) -> Self {
        let mut inventory = Self::new();
        for kind in iter {
            inventory.add(kind);
        }
        inventory
    }
}
