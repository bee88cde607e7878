//! Property tests for upgrades and inventory bounds

use inventory::{Inventory, InventoryError};
use items::{ItemDatabase, ItemRecord, Occupant, UpgradeQuality, Weapon, WeaponKind};
use proptest::prelude::*;
use proptest::sample::{Index, select};
use std::rc::Rc;
use strum::IntoEnumIterator;

fn quality() -> impl Strategy<Value = UpgradeQuality> {
    select(UpgradeQuality::iter().collect::<Vec<_>>())
}

/// Indices into the seeded catalog
fn catalog_picks() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..6, 1..12)
}

fn fill(db: &ItemDatabase, picks: &[usize]) -> Inventory {
    let mut inventory = Inventory::new(picks.len());
    for &index in picks {
        inventory.add(Rc::clone(db.get(index).unwrap())).unwrap();
    }
    inventory
}

proptest! {
    #[test]
    fn downgrade_restores_the_original_record(
        picks in catalog_picks(),
        slot in any::<Index>(),
        q in quality(),
    ) {
        let db = ItemDatabase::seeded();
        let mut inventory = fill(&db, &picks);
        let slot = slot.index(picks.len());
        let original = Rc::clone(inventory.get(slot).unwrap().as_item().unwrap());

        inventory.upgrade_item(slot, q).unwrap();
        prop_assert!(inventory.get(slot).unwrap().is_upgraded());
        prop_assert_eq!(inventory.downgrade_item(slot), Ok(true));

        let restored = inventory.get(slot).unwrap().as_item().unwrap();
        prop_assert!(Rc::ptr_eq(restored, &original));
    }

    #[test]
    fn upgrades_never_stack(durability in 1u32..500, first in quality(), second in quality()) {
        let blade = Rc::new(ItemRecord::weapon(
            0,
            "blade",
            2,
            1,
            100,
            Weapon::new(durability, WeaponKind::Primary),
        ));
        let mut inventory = Inventory::new(1);
        inventory.add(blade).unwrap();

        inventory.upgrade_item(0, first).unwrap();
        inventory.upgrade_item(0, second).unwrap();

        let upgrade = inventory.get(0).unwrap().as_upgrade().unwrap();
        prop_assert_eq!(upgrade.quality(), second);
        prop_assert!(matches!(upgrade.inner(), Occupant::Item(_)));
        prop_assert_eq!(upgrade.durability(), Some(durability + second.durability_bonus()));
    }

    #[test]
    fn upgrades_add_no_weight(
        picks in catalog_picks(),
        qualities in prop::collection::vec(quality(), 12),
    ) {
        let db = ItemDatabase::seeded();
        let mut inventory = fill(&db, &picks);
        let before = inventory.weight();
        for slot in 0..picks.len() {
            inventory.upgrade_item(slot, qualities[slot]).unwrap();
        }
        prop_assert_eq!(inventory.weight(), before);
    }

    #[test]
    fn full_inventory_rejects_adds(picks in catalog_picks(), extra in 0usize..6) {
        let db = ItemDatabase::seeded();
        let mut inventory = fill(&db, &picks);
        let size = inventory.len();

        let result = inventory.add(Rc::clone(db.get(extra).unwrap()));
        prop_assert_eq!(result, Err(InventoryError::Full { capacity: picks.len() }));
        prop_assert_eq!(inventory.len(), size);
        prop_assert_eq!(inventory.names().len(), size);
    }
}
