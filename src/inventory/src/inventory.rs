// src/inventory/src/inventory.rs
use std::fmt;

use tracing::debug;

use items::{Occupant, Upgrade, UpgradeQuality, WeightAccumulator};

use crate::container::{Container, InventoryError};
use crate::listener::{ContainerListener, NoopListener};

/// A character's bag: a bounded container of catalog items and upgrades
#[derive(Debug)]
pub struct Inventory<L = NoopListener> {
    container: Container<Occupant, L>,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self::with_listener(capacity, NoopListener)
    }
}

impl<L: ContainerListener<Occupant>> Inventory<L> {
    pub fn with_listener(capacity: usize, listener: L) -> Self {
        Self {
            container: Container::with_listener(capacity, listener),
        }
    }

    /// Puts an item (or an upgrade) in the next free slot
    pub fn add(&mut self, item: impl Into<Occupant>) -> Result<usize, InventoryError> {
        self.container.add(item.into())
    }

    pub fn get(&self, index: usize) -> Option<&Occupant> {
        self.container.get(index)
    }

    /// First occupant whose display name (upgrade prefix included) is `name`
    pub fn get_by_name(&self, name: &str) -> Option<&Occupant> {
        self.container
            .find(|occupant| occupant.name() == name)
            .and_then(|index| self.container.get(index))
    }

    /// Replaces the occupant at `index`; out of range changes nothing
    pub fn set(&mut self, index: usize, item: impl Into<Occupant>) -> Option<Occupant> {
        self.container.set(index, item.into())
    }

    pub fn remove(&mut self, index: usize) -> Result<Occupant, InventoryError> {
        self.container.remove(index)
    }

    pub fn clear(&mut self) {
        self.container.clear();
    }

    pub fn len(&self) -> usize {
        self.container.len()
    }

    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.container.capacity()
    }

    pub fn is_full(&self) -> bool {
        self.container.is_full()
    }

    pub fn free_slots(&self) -> usize {
        self.container.free_slots()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Occupant> {
        self.container.iter()
    }

    pub fn listener(&self) -> &L {
        self.container.listener()
    }

    /// Total weight of everything carried
    pub fn weight(&self) -> u32 {
        let mut acc = WeightAccumulator::new();
        for occupant in self.container.iter() {
            acc.visit(occupant);
        }
        acc.total()
    }

    /// Wraps the item at `index` in an upgrade of `quality`.
    ///
    /// An existing upgrade is discarded first, so upgrades never stack.
    pub fn upgrade_item(
        &mut self,
        index: usize,
        quality: UpgradeQuality,
    ) -> Result<(), InventoryError> {
        self.downgrade_item(index)?;
        self.container.replace_with(index, |bare| {
            let upgrade = Upgrade::new(quality, bare);
            debug!(slot = index, kind = %upgrade.kind(), %quality, "Upgraded item");
            Occupant::Upgraded(upgrade)
        })
    }

    /// Restores the bare catalog item at `index`.
    ///
    /// Returns `Ok(false)` when the slot held no upgrade.
    pub fn downgrade_item(&mut self, index: usize) -> Result<bool, InventoryError> {
        let upgraded = self
            .container
            .get(index)
            .map(Occupant::is_upgraded)
            .ok_or(InventoryError::InvalidIndex {
                index,
                len: self.container.len(),
            })?;
        if !upgraded {
            return Ok(false);
        }
        self.container
            .replace_with(index, |occupant| Occupant::Item(occupant.strip()))?;
        debug!(slot = index, "Downgraded item");
        Ok(true)
    }

    /// Display names of all occupants, in slot order
    pub fn names(&self) -> Vec<String> {
        self.container.iter().map(Occupant::name).collect()
    }

    /// Writes the current contents to stdout
    pub fn print(&self) {
        println!("{self}");
    }
}

impl<L> fmt::Display for Inventory<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Inventory ({}/{})", self.container.len(), self.container.capacity())?;
        for (slot, occupant) in self.container.iter().enumerate() {
            write!(f, "\n  [{slot}] {occupant}")?;
        }
        Ok(())
    }
}
