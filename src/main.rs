use anyhow::{Context, Result};
use error::handle_error;
use item_economy::{character::Character, config::EconomyConfig};
use items::{ItemDatabase, UpgradeQuality};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = EconomyConfig::load().context("Failed to load settings")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("Invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let db = ItemDatabase::seeded();
    tracing::info!(entries = db.len(), "Seeded item catalog");

    println!("New Game");
    let mut hero = Character::from_config(&config);
    println!("New Character: {} ({})", hero.name(), hero.description());
    println!("Starting Journey...");

    println!("Walking across the desert...");
    pick_up(&mut hero, &db, 0);

    println!("Finally made it out of the desert, made it to the forest");
    pick_up(&mut hero, &db, 1);
    pick_up(&mut hero, &db, 2);

    println!("Found a whetstone by the river");
    hero.inventory.upgrade_item(0, UpgradeQuality::Common)?;
    if let Some(sword) = hero.inventory.get(0) {
        println!(
            "{} now has {} durability",
            sword,
            sword.durability().unwrap_or_default()
        );
    }

    println!("A blacksmith offers a better edge");
    hero.inventory.upgrade_item(0, UpgradeQuality::Amazing)?;
    hero.inventory.print();

    println!("The edge wears off overnight");
    hero.inventory.downgrade_item(0)?;
    hero.inventory.print();

    println!("killed... Game Over");
    Ok(())
}

fn pick_up(hero: &mut Character, db: &ItemDatabase, index: usize) {
    match hero.collect(db, index) {
        Ok(item) => println!("Item Collected: {item}"),
        Err(e) => println!("{}", handle_error(&e)),
    }
    println!("New Weight: {}", hero.load_report());
    println!("Onward!");
}
