//src/items/src/upgrade.rs
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use thiserror::Error;

use crate::{ItemKind, ItemRef, Occupant};

/// Upgrade construction errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UpgradeError {
    #[error("{expected} upgrade cannot wrap a {found}")]
    KindMismatch { expected: ItemKind, found: ItemKind },
}

/// Upgrade tiers, ordered from weakest to strongest
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum UpgradeQuality {
    Common,
    Fair,
    Great,
    Amazing,
    Best,
}

impl UpgradeQuality {
    /// Durability added to an upgraded weapon
    pub const fn durability_bonus(self) -> u32 {
        match self {
            UpgradeQuality::Common => 2,
            UpgradeQuality::Fair => 4,
            UpgradeQuality::Great => 6,
            UpgradeQuality::Amazing => 8,
            UpgradeQuality::Best => 10,
        }
    }

    /// Prefix shown in front of the upgraded item's name
    pub const fn label(self) -> &'static str {
        match self {
            UpgradeQuality::Common => "COMMONLY UPGRADED",
            UpgradeQuality::Fair => "FAIRLY UPGRADED",
            UpgradeQuality::Great => "GREATLY UPGRADED",
            UpgradeQuality::Amazing => "AMAZINGLY UPGRADED",
            UpgradeQuality::Best => "BEST UPGRADED",
        }
    }
}

/// Decorator that overlays upgraded properties on the item it owns.
///
/// The wrapped record is never touched: the name, weight and durability
/// reported here are computed from it on every call. An upgrade cannot be
/// cloned, so the occupant inside always has exactly one owner.
#[derive(Debug, PartialEq)]
pub struct Upgrade {
    quality: UpgradeQuality,
    kind: ItemKind,
    label: &'static str,
    inner: Box<Occupant>,
}

impl Upgrade {
    /// Wraps `inner`, restricting the upgrade to the inner item's kind
    pub fn new(quality: UpgradeQuality, inner: impl Into<Occupant>) -> Self {
        let inner = inner.into();
        Self {
            quality,
            kind: inner.kind(),
            label: quality.label(),
            inner: Box::new(inner),
        }
    }

    /// Wraps `inner` only if it is of the requested kind
    pub fn with_kind(
        kind: ItemKind,
        quality: UpgradeQuality,
        inner: impl Into<Occupant>,
    ) -> Result<Self, UpgradeError> {
        let inner = inner.into();
        if inner.kind() != kind {
            return Err(UpgradeError::KindMismatch {
                expected: kind,
                found: inner.kind(),
            });
        }
        Ok(Self::new(quality, inner))
    }

    pub fn quality(&self) -> UpgradeQuality {
        self.quality
    }

    /// The item kind this upgrade applies to
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn name(&self) -> String {
        format!("{} {}", self.label, self.inner.name())
    }

    /// Upgrades add no weight of their own
    pub fn weight(&self) -> u32 {
        self.inner.weight()
    }

    /// Effective durability, `None` unless this is a weapon upgrade
    pub fn durability(&self) -> Option<u32> {
        match self.kind {
            ItemKind::Weapon => self
                .inner
                .durability()
                .map(|d| d.saturating_add(self.quality.durability_bonus())),
            ItemKind::Consumable | ItemKind::QuestObject => None,
        }
    }

    pub fn inner(&self) -> &Occupant {
        &self.inner
    }

    /// The catalog record at the bottom of the wrap chain
    pub fn base_item(&self) -> &ItemRef {
        self.inner.base_item()
    }

    /// Dissolves the upgrade, handing back what it wrapped
    pub fn remove(self) -> Occupant {
        *self.inner
    }
}
