//! End-to-end walk through the catalog, a character and its inventory

use error::EconomyError;
use inventory::{Inventory, InventoryError, NoopListener};
use item_economy::character::{Character, CharacterData};
use item_economy::config::EconomyConfig;
use items::{ItemDatabase, UpgradeQuality};
use pretty_assertions::assert_eq;
use std::rc::Rc;

fn quiet_character(capacity: usize) -> Character<NoopListener> {
    Character::with_inventory(
        CharacterData::new("johny", "apple seed collector"),
        Inventory::new(capacity),
    )
}

#[test]
fn sword_upgrade_and_downgrade() {
    let db = ItemDatabase::seeded();
    let sword = Rc::clone(db.get_by_name("sword").unwrap());
    let mut hero = quiet_character(30);

    hero.collect(&db, 0).unwrap();
    assert_eq!(hero.inventory.len(), 1);
    assert_eq!(hero.inventory.weight(), 2);

    hero.inventory.upgrade_item(0, UpgradeQuality::Common).unwrap();
    assert!(hero.inventory.get(0).unwrap().is_upgraded());
    assert_eq!(hero.inventory.get(0).unwrap().durability(), Some(22));

    hero.inventory.downgrade_item(0).unwrap();
    let slot = hero.inventory.get(0).unwrap();
    assert!(!slot.is_upgraded());
    assert!(Rc::ptr_eq(slot.as_item().unwrap(), &sword));
}

#[test]
fn desert_to_forest_weights() {
    let db = ItemDatabase::seeded();
    let mut hero = quiet_character(30);

    let mut reports = Vec::new();
    for index in 0..3 {
        hero.collect(&db, index).unwrap();
        reports.push(hero.load_report());
    }
    assert_eq!(reports, vec!["2/30", "5/30", "6/30"]);
}

#[test]
fn collecting_reports_catalog_and_capacity_failures() {
    let db = ItemDatabase::seeded();
    let mut hero = quiet_character(1);

    assert_eq!(
        hero.collect(&db, 42).unwrap_err(),
        EconomyError::UnknownCatalogIndex(42)
    );
    assert_eq!(
        hero.collect_named(&db, "dragon egg").unwrap_err(),
        EconomyError::UnknownCatalogName("dragon egg".to_string())
    );

    assert_eq!(hero.collect_named(&db, "scarf").unwrap().name(), "scarf");
    assert_eq!(
        hero.collect_named(&db, "apple").unwrap_err(),
        EconomyError::Inventory(InventoryError::Full { capacity: 1 })
    );
    assert_eq!(hero.inventory.len(), 1);
}

#[test]
fn character_from_default_config() {
    let hero = Character::from_config(&EconomyConfig::default());
    assert_eq!(hero.name(), "johny");
    assert_eq!(hero.description(), "apple seed collector");
    assert_eq!(hero.inventory.capacity(), 30);
    assert!(hero.inventory.is_empty());
}
