// src/inventory/src/listener.rs
use std::fmt;

use tracing::info;

/// Lifecycle hooks fired by a [`Container`](crate::Container)
pub trait ContainerListener<T> {
    /// Called after `item` was appended at `slot`
    fn on_added(&mut self, _slot: usize, _item: &T) {}

    /// Called with the previous occupant of `slot`, before it is erased
    fn on_removed(&mut self, _slot: usize, _item: &T) {}
}

/// Listener that ignores every event
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopListener;

impl<T> ContainerListener<T> for NoopListener {}

/// Listener that logs every event through `tracing`
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingListener;

impl<T: fmt::Display> ContainerListener<T> for TracingListener {
    fn on_added(&mut self, slot: usize, item: &T) {
        info!(slot, item = %item, "Added object");
    }

    fn on_removed(&mut self, slot: usize, item: &T) {
        info!(slot, item = %item, "Removed object");
    }
}
