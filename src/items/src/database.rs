//src/items/src/database.rs
use std::rc::Rc;

use tracing::debug;

use crate::{ItemRecord, ItemRef, Weapon, WeaponKind};

/// Append-only registry of item definitions.
///
/// Construct it once at startup (usually with [`ItemDatabase::seeded`]) and
/// pass it by reference to everything that needs catalog access. Records are
/// handed out as shared [`ItemRef`] handles; the registry keeps its own handle
/// until the entry is removed.
#[derive(Debug, Default)]
pub struct ItemDatabase {
    items: Vec<ItemRef>,
    next_id: u32,
}

impl ItemDatabase {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in catalog
    pub fn seeded() -> Self {
        let mut db = Self::new();
        db.populate();
        db
    }

    fn populate(&mut self) {
        // Weapons
        self.add(ItemRecord::weapon(
            self.next_available_id(),
            "sword",
            2,
            1,
            300,
            Weapon::new(20, WeaponKind::Primary),
        ));
        self.add(ItemRecord::weapon(
            self.next_available_id(),
            "axe",
            3,
            1,
            450,
            Weapon::new(30, WeaponKind::Secondary),
        ));

        // Consumables
        self.add(ItemRecord::consumable(self.next_available_id(), "apple", 1, 1, 15, 5));
        self.add(ItemRecord::consumable(self.next_available_id(), "pear", 1, 1, 15, 5));
        self.add(ItemRecord::consumable(self.next_available_id(), "carrot", 1, 1, 10, 3));

        // Quest objects
        self.add(ItemRecord::quest_object(self.next_available_id(), "scarf", 1, 1, 200, 7));
    }

    /// Id to give the next record so ids keep increasing; removed ids are not reused
    pub fn next_available_id(&self) -> u32 {
        self.next_id
    }

    /// Appends a record and returns its index
    pub fn add(&mut self, item: ItemRecord) -> usize {
        self.next_id = self.next_id.max(item.id().saturating_add(1));
        debug!(id = item.id(), name = item.name(), kind = %item.kind(), "Registered item");
        self.items.push(Rc::new(item));
        self.items.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&ItemRef> {
        self.items.get(index)
    }

    /// First record whose name matches exactly
    pub fn get_by_name(&self, name: &str) -> Option<&ItemRef> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Mutable access for tooling, only while no inventory shares the record
    pub fn get_mut(&mut self, index: usize) -> Option<&mut ItemRecord> {
        self.items.get_mut(index).and_then(Rc::get_mut)
    }

    /// Removes the record at `index`; later entries shift down by one
    pub fn remove(&mut self, index: usize) -> Option<ItemRef> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        debug!(id = item.id(), name = item.name(), "Unregistered item");
        Some(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemRef> {
        self.items.iter()
    }
}
