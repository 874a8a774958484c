use std::sync::atomic::{AtomicU64, Ordering};

use crate::collections::Direction;

pub(crate) type Link = Option<usize>;

/// Identifies the list that issued a [`NodeHandle`]. A list takes a fresh id whenever it is
/// created, cloned or cleared, so handles never outlive the nodes they were issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct OwnerId(u64);

impl OwnerId {
    pub fn next() -> OwnerId {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        OwnerId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// An opaque reference to a node in a [`LinkedList`](super::LinkedList).
///
/// Handles are cheap to copy and stay valid while the node remains linked, regardless of how it
/// is moved around within its list. A handle is only accepted by the list that issued it; after
/// its node is removed (or the list is cleared), every operation treats it as foreign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    pub(crate) owner: OwnerId,
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link,
    pub next: Link,
}

impl<T> Node<T> {
    pub const fn detached(value: T) -> Node<T> {
        Node {
            value,
            prev: None,
            next: None,
        }
    }

    /// The link followed when walking in `direction`.
    pub const fn towards(&self, direction: Direction) -> Link {
        match direction {
            Direction::Fifo => self.next,
            Direction::Lifo => self.prev,
        }
    }
}

/// A slot in a list's node arena. The generation advances every time an occupied slot is
/// vacated, which invalidates handles to the node that used to live there.
pub(crate) enum Slot<T> {
    Occupied {
        generation: u32,
        node: Node<T>,
    },
    Vacant {
        generation: u32,
        next_vacant: Link,
    },
}

impl<T> Slot<T> {
    pub const fn generation(&self) -> u32 {
        match self {
            Slot::Occupied { generation, .. } | Slot::Vacant { generation, .. } => *generation,
        }
    }

    pub const fn node(&self) -> Option<&Node<T>> {
        match self {
            Slot::Occupied { node, .. } => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub const fn node_mut(&mut self) -> Option<&mut Node<T>> {
        match self {
            Slot::Occupied { node, .. } => Some(node),
            Slot::Vacant { .. } => None,
        }
    }
}
