//src/items/src/weight.rs
use crate::{Occupant, Variant};

/// Sums the weight of a mixed run of bare items and upgrades.
///
/// Build a fresh accumulator for every query; `total` consumes it.
#[derive(Debug, Default)]
pub struct WeightAccumulator {
    total: u32,
    visited: usize,
}

impl WeightAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visit(&mut self, occupant: &Occupant) {
        let weight = match occupant.variant() {
            Variant::Weapon | Variant::Consumable | Variant::QuestObject => {
                occupant.base_item().weight()
            }
            // pass-through to whatever the upgrade wraps
            Variant::WeaponUpgrade | Variant::ConsumableUpgrade | Variant::QuestUpgrade => {
                occupant.weight()
            }
        };
        self.total = self.total.saturating_add(weight);
        self.visited += 1;
    }

    pub fn visited(&self) -> usize {
        self.visited
    }

    pub fn total(self) -> u32 {
        self.total
    }

    /// Weight of every occupant yielded by `occupants`
    pub fn sum<'a>(occupants: impl IntoIterator<Item = &'a Occupant>) -> u32 {
        let mut acc = Self::new();
        for occupant in occupants {
            acc.visit(occupant);
        }
        acc.total()
    }
}
