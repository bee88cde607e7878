//src/items/src/quest.rs
use serde::{Deserialize, Serialize};

/// Quest object catalog data
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestObject {
    pub rarity: u32,
}

impl QuestObject {
    pub fn new(rarity: u32) -> Self {
        Self { rarity }
    }
}
