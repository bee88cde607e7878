//! Capacity-bounded containers and the item inventory built on them

pub mod container;
pub mod inventory;
pub mod listener;


pub use container::{Container, InventoryError};
pub use inventory::Inventory;
pub use listener::{ContainerListener, NoopListener, TracingListener};
