//src/items/src/weapon.rs
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// How a weapon is carried into a fight
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize, Default,
)]
pub enum WeaponKind {
    #[default]
    Primary,
    Secondary,
    Throwable,
}

/// Weapon catalog data
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub max_durability: u32,
    pub current_durability: u32, // starts at max_durability
    pub kind: WeaponKind,
}

impl Weapon {
    pub fn new(durability: u32, kind: WeaponKind) -> Self {
        Self {
            max_durability: durability,
            current_durability: durability,
            kind,
        }
    }

    /// Broken weapons (no durability left) cannot be equipped
    pub fn is_equipable(&self) -> bool {
        self.current_durability > 0
    }
}
