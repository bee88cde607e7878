//src/items/src/lib.rs
//! Item catalog entries, upgrades and the shared item registry.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use strum_macros::{Display, EnumIter};

pub use crate::consumable::Consumable;
pub use crate::database::ItemDatabase;
pub use crate::occupant::{Occupant, Variant};
pub use crate::quest::QuestObject;
pub use crate::upgrade::{Upgrade, UpgradeError, UpgradeQuality};
pub use crate::weapon::{Weapon, WeaponKind};
pub use crate::weight::WeightAccumulator;

pub mod consumable;
pub mod database;
pub mod occupant;
pub mod quest;
pub mod upgrade;
pub mod weapon;
pub mod weight;


/// Shared, non-owning view of a catalog record.
///
/// The database keeps one handle for as long as the entry is registered;
/// inventories and upgrades hold clones of it.
pub type ItemRef = Rc<ItemRecord>;

/// Closed set of item categories
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, Serialize, Deserialize,
)]
pub enum ItemKind {
    Weapon,
    Consumable,
    #[strum(to_string = "Quest Object")]
    QuestObject,
}

/// Kind-specific catalog data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemDetails {
    Weapon(Weapon),
    Consumable(Consumable),
    QuestObject(QuestObject),
}

impl ItemDetails {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemDetails::Weapon(_) => ItemKind::Weapon,
            ItemDetails::Consumable(_) => ItemKind::Consumable,
            ItemDetails::QuestObject(_) => ItemKind::QuestObject,
        }
    }
}

/// A catalog entry (immutable apart from the tooling setters)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    id: u32,
    name: String,
    weight: u32,
    level: u32,
    cost: u32,
    details: ItemDetails, // the kind is derived from this and never changes
}

impl ItemRecord {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        weight: u32,
        level: u32,
        cost: u32,
        details: ItemDetails,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
            level,
            cost,
            details,
        }
    }

    pub fn weapon(
        id: u32,
        name: impl Into<String>,
        weight: u32,
        level: u32,
        cost: u32,
        weapon: Weapon,
    ) -> Self {
        Self::new(id, name, weight, level, cost, ItemDetails::Weapon(weapon))
    }

    pub fn consumable(
        id: u32,
        name: impl Into<String>,
        weight: u32,
        level: u32,
        cost: u32,
        effect: u32,
    ) -> Self {
        Self::new(
            id,
            name,
            weight,
            level,
            cost,
            ItemDetails::Consumable(Consumable::new(effect)),
        )
    }

    pub fn quest_object(
        id: u32,
        name: impl Into<String>,
        weight: u32,
        level: u32,
        cost: u32,
        rarity: u32,
    ) -> Self {
        Self::new(
            id,
            name,
            weight,
            level,
            cost,
            ItemDetails::QuestObject(QuestObject::new(rarity)),
        )
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ItemKind {
        self.details.kind()
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn details(&self) -> &ItemDetails {
        &self.details
    }

    pub fn as_weapon(&self) -> Option<&Weapon> {
        match &self.details {
            ItemDetails::Weapon(w) => Some(w),
            _ => None,
        }
    }

    /// Current durability, weapons only
    pub fn durability(&self) -> Option<u32> {
        self.as_weapon().map(|w| w.current_durability)
    }

    /// Whether the item can be equipped (a weapon that is not broken)
    pub fn is_equipable(&self) -> bool {
        self.as_weapon().is_some_and(Weapon::is_equipable)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_weight(&mut self, weight: u32) {
        self.weight = weight;
    }
}
