use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::rc::Rc;

use derive_more::IsVariant;
use log::trace;

use super::{NodePtr, SimpleNode};
use crate::collections::version::VersionTracker;
use crate::collections::{Length, ONE};
use crate::util::error::CapacityOverflow;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in one direction, supporting insertion at both ends but removal only from
/// the front. This is the shared storage behind [`Stack`](super::Stack) and
/// [`Queue`](super::Queue), which expose the subset of it that suits each discipline.
///
/// Nodes are never exposed, only the values they hold.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `clear` | `O(n)` |
pub struct SimpleLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) tracker: Rc<VersionTracker>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> SimpleLinkedList<T> {
    /// Creates a new SimpleLinkedList with no elements.
    pub fn new() -> SimpleLinkedList<T> {
        SimpleLinkedList {
            state: Empty,
            tracker: VersionTracker::new(),
            _phantom: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        self.state.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            // SAFETY: The head is owned by the list, which is borrowed for the returned lifetime.
            Full(ListContents { head, .. }) => Some(unsafe { head.value() }),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            // SAFETY: The head is owned by the list, which is mutably borrowed for the returned
            // lifetime.
            Full(ListContents { head, .. }) => Some(unsafe { head.value_mut() }),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            // SAFETY: The tail is owned by the list, which is borrowed for the returned lifetime.
            Full(ListContents { tail, .. }) => Some(unsafe { tail.value() }),
        }
    }

    /// Add the provided element to the front of the list.
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
        self.tracker.bump();
    }

    /// Add the provided element to the back of the list.
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
        self.tracker.bump();
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = match &mut self.state {
            Empty => return None,
            Full(ListContents { len, head, .. }) => {
                // SAFETY: The head is owned by the list and is replaced below, so the pointer
                // isn't used again.
                let node = unsafe { head.take_node() };

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the first element is
                        // followed by at least one more.
                        *head = unsafe { node.next.unreachable() };
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                node
            },
        };

        self.tracker.bump();
        Some(node.value)
    }

    /// Removes every element from the list.
    pub fn clear(&mut self) {
        trace!("clearing simple linked list with {} elements", self.len());
        mem::replace(&mut self.state, Empty).drop_nodes();
        self.tracker.bump();
    }
}

impl<T> ListContents<T> {
    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        self.head = NodePtr::from_node(SimpleNode {
            value,
            next: Some(self.head),
        });
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(SimpleNode {
            value,
            next: None,
        });

        // SAFETY: The tail is owned by the list and nothing borrows it during a push.
        unsafe { self.tail.set_next(Some(node)) };
        self.tail = node;
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(SimpleNode {
            value,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    pub const fn head(&self) -> Option<NodePtr<T>> {
        match self {
            Empty => None,
            Full(ListContents { head, .. }) => Some(*head),
        }
    }

    /// Frees every node reachable from this state. The state has to be the sole owner of its
    /// nodes, which is the case once it has been taken out of its list.
    fn drop_nodes(self) {
        let mut curr = self.head();
        while let Some(ptr) = curr {
            // SAFETY: Each node is owned by this state and visited once.
            let node = unsafe { ptr.take_node() };
            curr = node.next;
        }
    }
}

impl<T> Clone for ListContents<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListContents<T> {}

impl<T> Clone for ListState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListState<T> {}

impl<T> FromIterator<T> for SimpleLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SimpleLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SimpleLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleLinkedList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> AsRef<SimpleLinkedList<T>> for SimpleLinkedList<T> {
    fn as_ref(&self) -> &SimpleLinkedList<T> {
        self
    }
}

impl<T> Default for SimpleLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SimpleLinkedList<T> {
    fn drop(&mut self) {
        mem::replace(&mut self.state, Empty).drop_nodes();
    }
}

impl<T: Clone> Clone for SimpleLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SimpleLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SimpleLinkedList<T> {}

impl<T: Hash> Hash for SimpleLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }

        // Terminate variable length hashing sequence.
        0xFF.hash(state);
    }
}

impl<T: Debug> Debug for SimpleLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleLinkedList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for SimpleLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") -> (")
        )
    }
}
