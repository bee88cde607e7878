//src/items/src/consumable.rs
use serde::{Deserialize, Serialize};

/// Consumable catalog data
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumable {
    pub effect: u32, // magnitude applied when consumed
}

impl Consumable {
    pub fn new(effect: u32) -> Self {
        Self { effect }
    }
}
