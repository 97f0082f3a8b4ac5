//! Inventory panel: a fixed header over one clickable row per usable item.

use maze_core::{EntityKind, Inventory, ItemKind};

use crate::presentation::PresentationMapper;

pub const HEADER: &str = "Inventory";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryRow<S> {
    pub item: ItemKind,
    /// `"<Name>: <count>"`.
    pub label: String,
    pub fill: S,
}

#[derive(Clone, Debug)]
pub struct InventoryView<S> {
    rows: Vec<InventoryRow<S>>,
}

impl<S> Default for InventoryView<S> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<S: Clone> InventoryView<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> &'static str {
        HEADER
    }

    /// Removes the item rows; the header stays.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Adds a row for every non-coin item in `inventory`, in inventory order.
    pub fn draw_inventory<M>(&mut self, inventory: &Inventory, mapper: &M)
    where
        M: PresentationMapper<Style = S>,
    {
        for entry in inventory.iter().filter(|entry| entry.kind.is_usable()) {
            self.rows.push(InventoryRow {
                item: entry.kind,
                label: format!("{}: {}", entry.kind, entry.count),
                fill: mapper.entity_fill(EntityKind::Item(entry.kind)),
            });
        }
    }

    pub fn rows(&self) -> &[InventoryRow<S>] {
        &self.rows
    }

    /// Item shown on the `index`-th row (0-based), used for click handling.
    pub fn item_at(&self, index: usize) -> Option<ItemKind> {
        self.rows.get(index).map(|row| row.item)
    }
}
