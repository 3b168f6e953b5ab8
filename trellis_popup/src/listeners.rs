// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Global listener table and scoped registrations.
//!
//! ## Overview
//!
//! Window-level listeners (pointer-down, key-up) are a process-wide resource. [`Listeners`]
//! is the table of which component instances currently listen for which kinds. The host's
//! event loop consults [`Listeners::instances`] to decide which components receive a window
//! event.
//!
//! A component registers through a [`ListenerScope`]: [`open`](ListenerScope::open) registers,
//! [`close`](ListenerScope::close) deregisters, and both are idempotent. The scope holds a
//! [`ListenerGuard`] that also deregisters on drop, so an unmounted or dropped component never
//! leaks a registration, and rapid open/close cycles never produce duplicates.
//!
//! ```
//! use trellis_popup::{ListenerKinds, ListenerScope, Listeners};
//!
//! let listeners = Listeners::new();
//! let mut scope = ListenerScope::new(&listeners);
//! scope.open(ListenerKinds::POINTER_DOWN | ListenerKinds::KEY_UP);
//! scope.open(ListenerKinds::POINTER_DOWN | ListenerKinds::KEY_UP);
//! assert_eq!(listeners.len(), 1);
//!
//! drop(scope);
//! assert!(listeners.is_empty());
//! ```

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use tracing::{debug, warn};

bitflags::bitflags! {
    /// Kinds of window-level listeners.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ListenerKinds: u8 {
        /// Pointer pressed anywhere.
        const POINTER_DOWN = 0b0000_0001;
        /// Key released anywhere.
        const KEY_UP       = 0b0000_0010;
    }
}

/// Identity of one component instance in the listener table.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct InstanceId(u32);

#[derive(Debug, Default)]
struct Table {
    next_id: u32,
    // Registration order is preserved; dispatch follows it.
    entries: Vec<(InstanceId, ListenerKinds)>,
}

/// Shared handle to the listener table. Clones refer to the same table.
#[derive(Clone, Debug, Default)]
pub struct Listeners {
    table: Rc<RefCell<Table>>,
}

impl Listeners {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh instance identity.
    pub fn allocate_id(&self) -> InstanceId {
        let mut table = self.table.borrow_mut();
        let id = InstanceId(table.next_id);
        table.next_id = table.next_id.wrapping_add(1);
        id
    }

    /// Register `id` for `kinds`, returning a guard that deregisters on drop.
    ///
    /// Registering an instance that is already registered replaces its kinds; the table
    /// never holds two entries for one instance.
    pub fn register(&self, id: InstanceId, kinds: ListenerKinds) -> ListenerGuard {
        let mut table = self.table.borrow_mut();
        if let Some(entry) = table.entries.iter_mut().find(|(i, _)| *i == id) {
            warn!(?id, "instance registered twice; replacing listener kinds");
            entry.1 = kinds;
        } else {
            table.entries.push((id, kinds));
        }
        debug!(?id, ?kinds, "listeners registered");
        ListenerGuard {
            table: Rc::clone(&self.table),
            id,
        }
    }

    /// Kinds `id` is registered for; empty if none.
    pub fn kinds_of(&self, id: InstanceId) -> ListenerKinds {
        self.table
            .borrow()
            .entries
            .iter()
            .find(|(i, _)| *i == id)
            .map_or(ListenerKinds::empty(), |(_, k)| *k)
    }

    /// Instances listening for any of `kinds`, in registration order.
    pub fn instances(&self, kinds: ListenerKinds) -> Vec<InstanceId> {
        self.table
            .borrow()
            .entries
            .iter()
            .filter(|(_, k)| k.intersects(kinds))
            .map(|(i, _)| *i)
            .collect()
    }

    /// Number of registered instances.
    pub fn len(&self) -> usize {
        self.table.borrow().entries.len()
    }

    /// Returns `true` when no instance is registered.
    pub fn is_empty(&self) -> bool {
        self.table.borrow().entries.is_empty()
    }
}

/// Deregisters its instance when dropped.
#[derive(Debug)]
pub struct ListenerGuard {
    table: Rc<RefCell<Table>>,
    id: InstanceId,
}

impl ListenerGuard {
    /// The registered instance.
    pub fn id(&self) -> InstanceId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let mut table = self.table.borrow_mut();
        table.entries.retain(|(i, _)| *i != self.id);
        debug!(id = ?self.id, "listeners removed");
    }
}

/// Per-instance registration scope with idempotent open and close.
#[derive(Debug)]
pub struct ListenerScope {
    listeners: Listeners,
    id: InstanceId,
    guard: Option<ListenerGuard>,
}

impl ListenerScope {
    /// Create a closed scope with a fresh instance identity in `listeners`.
    pub fn new(listeners: &Listeners) -> Self {
        Self {
            listeners: listeners.clone(),
            id: listeners.allocate_id(),
            guard: None,
        }
    }

    /// The instance identity.
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// The table this scope registers in.
    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    /// Register for `kinds`. No-op if already open.
    pub fn open(&mut self, kinds: ListenerKinds) {
        if self.guard.is_none() {
            self.guard = Some(self.listeners.register(self.id, kinds));
        }
    }

    /// Deregister. No-op if already closed.
    pub fn close(&mut self) {
        self.guard = None;
    }

    /// Returns `true` while registered.
    pub fn is_open(&self) -> bool {
        self.guard.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct() {
        let listeners = Listeners::new();
        let a = listeners.allocate_id();
        let b = listeners.allocate_id();
        assert_ne!(a, b);
    }

    #[test]
    fn guard_deregisters_on_drop() {
        let listeners = Listeners::new();
        let id = listeners.allocate_id();
        let guard = listeners.register(id, ListenerKinds::KEY_UP);
        assert_eq!(listeners.kinds_of(id), ListenerKinds::KEY_UP);
        assert_eq!(guard.id(), id);
        drop(guard);
        assert_eq!(listeners.kinds_of(id), ListenerKinds::empty());
        assert!(listeners.is_empty());
    }

    #[test]
    fn instances_are_filtered_by_kind_in_registration_order() {
        let listeners = Listeners::new();
        let mut a = ListenerScope::new(&listeners);
        let mut b = ListenerScope::new(&listeners);
        let mut c = ListenerScope::new(&listeners);
        c.open(ListenerKinds::POINTER_DOWN);
        a.open(ListenerKinds::KEY_UP);
        b.open(ListenerKinds::POINTER_DOWN | ListenerKinds::KEY_UP);
        assert_eq!(listeners.instances(ListenerKinds::POINTER_DOWN), [c.id(), b.id()]);
        assert_eq!(listeners.instances(ListenerKinds::KEY_UP), [a.id(), b.id()]);
    }

    #[test]
    fn rapid_open_close_never_duplicates() {
        let listeners = Listeners::new();
        let mut scope = ListenerScope::new(&listeners);
        for _ in 0..10 {
            scope.open(ListenerKinds::all());
            scope.open(ListenerKinds::all());
            assert_eq!(listeners.len(), 1);
            scope.close();
            scope.close();
            assert!(listeners.is_empty());
        }
        assert!(!scope.is_open());
    }

    #[test]
    fn reregistering_replaces_kinds() {
        let listeners = Listeners::new();
        let id = listeners.allocate_id();
        let first = listeners.register(id, ListenerKinds::KEY_UP);
        let second = listeners.register(id, ListenerKinds::POINTER_DOWN);
        assert_eq!(listeners.len(), 1);
        assert_eq!(listeners.kinds_of(id), ListenerKinds::POINTER_DOWN);
        drop(first);
        assert!(listeners.is_empty());
        drop(second);
        assert!(listeners.is_empty());
    }
}
