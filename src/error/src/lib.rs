//! Item economy error handling
//!
//! Collects the failures of the catalog, upgrade and inventory layers into one
//! type for callers that drive all of them, such as the character layer and
//! the demo binary.

use thiserror::Error;

pub use inventory::InventoryError;
pub use items::UpgradeError;

/// Errors surfaced across the item economy
#[derive(Debug, Error, PartialEq)]
pub enum EconomyError {
    /// Inventory operation failed
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// An upgrade could not be built for the item
    #[error(transparent)]
    Upgrade(#[from] UpgradeError),

    /// No catalog entry at the requested index
    #[error("No catalog entry at index {0}")]
    UnknownCatalogIndex(usize),

    /// No catalog entry with the requested name
    #[error("No catalog entry named {0:?}")]
    UnknownCatalogName(String),

    /// Settings failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Converts an error into a short message suitable for the player
pub fn handle_error(error: &EconomyError) -> String {
    match error {
        EconomyError::Inventory(InventoryError::Full { capacity }) => {
            format!("Your bag is full ({capacity} slots)")
        }
        EconomyError::Inventory(InventoryError::InvalidIndex { index, .. }) => {
            format!("There is nothing in slot {index}")
        }
        EconomyError::Inventory(InventoryError::Upgrade(e)) | EconomyError::Upgrade(e) => {
            format!("That upgrade does not fit: {e}")
        }
        EconomyError::UnknownCatalogIndex(_) | EconomyError::UnknownCatalogName(_) => {
            "No such item exists".to_string()
        }
        _ => error.to_string(),
    }
}
