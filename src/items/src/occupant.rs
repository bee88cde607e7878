//src/items/src/occupant.rs
use std::fmt;
use std::rc::Rc;

use crate::{ItemKind, ItemRef, Upgrade};

/// What an inventory slot holds: a catalog record or an upgrade wrapping one
#[derive(Debug, PartialEq)]
pub enum Occupant {
    Item(ItemRef),
    Upgraded(Upgrade),
}

/// Concrete variant tag, one per item kind and upgrade kind
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Weapon,
    Consumable,
    QuestObject,
    WeaponUpgrade,
    ConsumableUpgrade,
    QuestUpgrade,
}

impl Occupant {
    pub fn variant(&self) -> Variant {
        match self {
            Occupant::Item(item) => match item.kind() {
                ItemKind::Weapon => Variant::Weapon,
                ItemKind::Consumable => Variant::Consumable,
                ItemKind::QuestObject => Variant::QuestObject,
            },
            Occupant::Upgraded(upgrade) => match upgrade.kind() {
                ItemKind::Weapon => Variant::WeaponUpgrade,
                ItemKind::Consumable => Variant::ConsumableUpgrade,
                ItemKind::QuestObject => Variant::QuestUpgrade,
            },
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Occupant::Item(item) => item.kind(),
            Occupant::Upgraded(upgrade) => upgrade.kind(),
        }
    }

    /// Display name, decorated by any upgrade
    pub fn name(&self) -> String {
        match self {
            Occupant::Item(item) => item.name().to_string(),
            Occupant::Upgraded(upgrade) => upgrade.name(),
        }
    }

    pub fn weight(&self) -> u32 {
        match self {
            Occupant::Item(item) => item.weight(),
            Occupant::Upgraded(upgrade) => upgrade.weight(),
        }
    }

    /// Effective durability for weapons and weapon upgrades
    pub fn durability(&self) -> Option<u32> {
        match self {
            Occupant::Item(item) => item.durability(),
            Occupant::Upgraded(upgrade) => upgrade.durability(),
        }
    }

    pub fn is_upgraded(&self) -> bool {
        matches!(self, Occupant::Upgraded(_))
    }

    pub fn as_item(&self) -> Option<&ItemRef> {
        match self {
            Occupant::Item(item) => Some(item),
            Occupant::Upgraded(_) => None,
        }
    }

    pub fn as_upgrade(&self) -> Option<&Upgrade> {
        match self {
            Occupant::Upgraded(upgrade) => Some(upgrade),
            Occupant::Item(_) => None,
        }
    }

    /// The catalog record underneath every upgrade layer
    pub fn base_item(&self) -> &ItemRef {
        match self {
            Occupant::Item(item) => item,
            Occupant::Upgraded(upgrade) => upgrade.base_item(),
        }
    }

    /// Whether this occupant is (or wraps) exactly `item`, compared by identity
    pub fn holds(&self, item: &ItemRef) -> bool {
        Rc::ptr_eq(self.base_item(), item)
    }

    /// Peels off every upgrade layer
    pub fn strip(self) -> ItemRef {
        let mut current = self;
        loop {
            match current {
                Occupant::Item(item) => return item,
                Occupant::Upgraded(upgrade) => current = upgrade.remove(),
            }
        }
    }
}

impl From<ItemRef> for Occupant {
    fn from(item: ItemRef) -> Self {
        Occupant::Item(item)
    }
}

impl From<Upgrade> for Occupant {
    fn from(upgrade: Upgrade) -> Self {
        Occupant::Upgraded(upgrade)
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occupant::Item(item) => f.write_str(item.name()),
            Occupant::Upgraded(upgrade) => write!(f, "{}", upgrade.name()),
        }
    }
}
