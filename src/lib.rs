//! Item economy: a shared item catalog, upgrades, and the characters whose
//! inventories carry them.

pub mod character;
pub mod config;

pub use error;
pub use inventory;
pub use items;
