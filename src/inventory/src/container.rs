// src/inventory/src/container.rs
use thiserror::Error;

use items::UpgradeError;

use crate::listener::{ContainerListener, NoopListener};

/// Container and inventory errors
#[derive(Debug, Error, PartialEq)]
pub enum InventoryError {
    #[error("Container is full ({capacity} slots)")]
    Full { capacity: usize },
    #[error("Invalid slot index {index} (size {len})")]
    InvalidIndex { index: usize, len: usize },
    #[error(transparent)]
    Upgrade(#[from] UpgradeError),
}

/// Fixed-capacity ordered collection
///
/// Slots are packed: removing one shifts every later occupant down. The
/// listener sees each add and remove.
#[derive(Clone, Debug)]
pub struct Container<T, L = NoopListener> {
    slots: Vec<T>,
    capacity: usize,
    listener: L,
}

impl<T> Container<T> {
    pub fn new(capacity: usize) -> Self {
        Self::with_listener(capacity, NoopListener)
    }
}

impl<T, L> Container<T, L> {
    pub fn with_listener(capacity: usize, listener: L) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            listener,
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    /// Index of the first occupant matching `predicate`
    pub fn find<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(&T) -> bool,
    {
        self.slots.iter().position(predicate)
    }

    /// Replaces the occupant at `index`, returning the old one.
    ///
    /// Out of range is a no-op that returns `None`.
    pub fn set(&mut self, index: usize, item: T) -> Option<T> {
        self.slots
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, item))
    }

    /// Moves the occupant at `index` through `f` and stores the result in its place
    pub fn replace_with<F>(&mut self, index: usize, f: F) -> Result<(), InventoryError>
    where
        F: FnOnce(T) -> T,
    {
        self.check_index(index)?;
        let current = self.slots.swap_remove(index);
        self.slots.push(f(current));
        let last = self.slots.len() - 1;
        self.slots.swap(index, last);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    pub fn free_slots(&self) -> usize {
        self.capacity.saturating_sub(self.slots.len())
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    fn check_index(&self, index: usize) -> Result<(), InventoryError> {
        if index >= self.slots.len() {
            return Err(InventoryError::InvalidIndex {
                index,
                len: self.slots.len(),
            });
        }
        Ok(())
    }
}

impl<T, L: ContainerListener<T>> Container<T, L> {
    /// Appends `item` and returns its slot; a full container is left untouched
    pub fn add(&mut self, item: T) -> Result<usize, InventoryError> {
        if self.is_full() {
            return Err(InventoryError::Full {
                capacity: self.capacity,
            });
        }
        self.slots.push(item);
        let slot = self.slots.len() - 1;
        self.listener.on_added(slot, &self.slots[slot]);
        Ok(slot)
    }

    pub fn remove(&mut self, index: usize) -> Result<T, InventoryError> {
        self.check_index(index)?;
        self.listener.on_removed(index, &self.slots[index]);
        Ok(self.slots.remove(index))
    }

    /// Removes every occupant, notifying the listener for each
    pub fn clear(&mut self) {
        while !self.slots.is_empty() {
            let last = self.slots.len() - 1;
            self.listener.on_removed(last, &self.slots[last]);
            self.slots.pop();
        }
    }
}
