//! Characters and the inventory each one carries

use std::rc::Rc;

use error::EconomyError;
use inventory::{ContainerListener, Inventory, InventoryError, TracingListener};
use items::{ItemDatabase, ItemRef, Occupant};

use crate::config::EconomyConfig;

/// Descriptive data, kept apart from gameplay state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterData {
    name: String,
    description: String,
}

impl CharacterData {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A character with its own inventory
#[derive(Debug)]
pub struct Character<L = TracingListener> {
    data: CharacterData,
    pub inventory: Inventory<L>,
}

impl Character {
    /// Creates a character whose inventory logs every add and remove
    pub fn new(name: impl Into<String>, description: impl Into<String>, capacity: usize) -> Self {
        Self::with_inventory(
            CharacterData::new(name, description),
            Inventory::with_listener(capacity, TracingListener),
        )
    }

    pub fn from_config(config: &EconomyConfig) -> Self {
        Self::new(
            config.character_name.clone(),
            config.character_description.clone(),
            config.inventory_capacity,
        )
    }
}

impl<L: ContainerListener<Occupant>> Character<L> {
    pub fn with_inventory(data: CharacterData, inventory: Inventory<L>) -> Self {
        Self { data, inventory }
    }

    pub fn name(&self) -> &str {
        self.data.name()
    }

    pub fn description(&self) -> &str {
        self.data.description()
    }

    /// Picks up the catalog entry at `index`
    pub fn collect(&mut self, db: &ItemDatabase, index: usize) -> Result<&Occupant, EconomyError> {
        let item = db
            .get(index)
            .ok_or(EconomyError::UnknownCatalogIndex(index))?;
        self.stow(Rc::clone(item))
    }

    /// Picks up the first catalog entry called `name`
    pub fn collect_named(
        &mut self,
        db: &ItemDatabase,
        name: &str,
    ) -> Result<&Occupant, EconomyError> {
        let item = db
            .get_by_name(name)
            .ok_or_else(|| EconomyError::UnknownCatalogName(name.to_string()))?;
        self.stow(Rc::clone(item))
    }

    fn stow(&mut self, item: ItemRef) -> Result<&Occupant, EconomyError> {
        let slot = self.inventory.add(item)?;
        let len = self.inventory.len();
        self.inventory
            .get(slot)
            .ok_or(EconomyError::Inventory(InventoryError::InvalidIndex { index: slot, len }))
    }

    /// Carried weight against inventory capacity, e.g. `"5/30"`
    pub fn load_report(&self) -> String {
        format!("{}/{}", self.inventory.weight(), self.inventory.capacity())
    }
}
