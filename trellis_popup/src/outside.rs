// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window events and outside-interaction detection.
//!
//! Elements are identified by a caller-chosen key `K`. Ancestry comes from a
//! [`ParentLookup`], so the same detection works over a DOM, a box tree, or an ECS
//! hierarchy.

use crate::listeners::ListenerKinds;

/// Look up the parent of an element.
pub trait ParentLookup<K> {
    /// Returns the parent of `node`, or `None` if `node` is a root.
    fn parent_of(&self, node: &K) -> Option<K>;
}

/// Returns `true` if `node` is `root` or one of its descendants.
///
/// Walks parents from `node` upward; the caller ensures acyclic ancestry.
pub fn is_within<K: PartialEq, P: ParentLookup<K> + ?Sized>(tree: &P, root: &K, node: &K) -> bool {
    if node == root {
        return true;
    }
    let mut cur = tree.parent_of(node);
    while let Some(p) = cur {
        if p == *root {
            return true;
        }
        cur = tree.parent_of(&p);
    }
    false
}

/// Key identity, as far as popups care.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// Escape.
    Escape,
    /// Enter.
    Enter,
    /// Tab.
    Tab,
    /// Any other key.
    Other,
}

/// A window-level event with the element it targets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent<K> {
    /// A pointer was pressed on `target`.
    PointerDown {
        /// Element under the pointer.
        target: K,
    },
    /// A key was released while `target` had focus.
    KeyUp {
        /// Focused element.
        target: K,
        /// The key.
        key: Key,
    },
}

impl<K> UiEvent<K> {
    /// The targeted element.
    pub fn target(&self) -> &K {
        match self {
            Self::PointerDown { target } | Self::KeyUp { target, .. } => target,
        }
    }

    /// The listener kind that receives this event.
    pub fn kind(&self) -> ListenerKinds {
        match self {
            Self::PointerDown { .. } => ListenerKinds::POINTER_DOWN,
            Self::KeyUp { .. } => ListenerKinds::KEY_UP,
        }
    }

    /// The key, for key events.
    pub fn key(&self) -> Option<Key> {
        match self {
            Self::PointerDown { .. } => None,
            Self::KeyUp { key, .. } => Some(*key),
        }
    }
}

/// Returns `true` if `event` targets something outside `root`.
pub fn is_outside<K: PartialEq, P: ParentLookup<K> + ?Sized>(
    tree: &P,
    root: &K,
    event: &UiEvent<K>,
) -> bool {
    !is_within(tree, root, event.target())
}
