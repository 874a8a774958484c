use std::fmt::{self, Debug, Formatter};

use super::{Iter, SimpleEnumerator, SimpleLinkedList};
#[doc(inline)]
pub use crate::util::error::EmptyCollection;
use crate::util::result::ResultExtension;

/// A first in, first out collection built on a [`SimpleLinkedList`]. Values are enqueued at the
/// back and dequeued from the front.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    pub(crate) list: SimpleLinkedList<T>,
}

impl<T> Queue<T> {
    /// Creates a new Queue with no elements.
    pub fn new() -> Queue<T> {
        Queue {
            list: SimpleLinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Adds `value` to the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes the value at the front of the queue and returns it, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn dequeue(&mut self) -> T {
        self.try_dequeue().throw()
    }

    /// Removes the value at the front of the queue and returns it, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_dequeue(&mut self) -> Result<T, EmptyCollection> {
        self.list.pop_front().ok_or(EmptyCollection)
    }

    /// Returns a reference to the value at the front of the queue, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn peek(&self) -> &T {
        self.try_peek().throw()
    }

    pub fn try_peek(&self) -> Result<&T, EmptyCollection> {
        self.list.front().ok_or(EmptyCollection)
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.list.front_mut()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns an iterator over the queue, from the front to the back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }

    /// Creates an enumerator over the queue, from the front to the back. The enumerator is passed
    /// the queue itself on every call.
    pub fn enumerator(&self) -> SimpleEnumerator<T> {
        self.list.enumerator()
    }

    /// Returns the underlying list, with the front of the queue at its front.
    pub const fn as_list(&self) -> &SimpleLinkedList<T> {
        &self.list
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T, const N: usize> From<[T; N]> for Queue<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;

    type IntoIter = super::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("contents", &self.list.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl<T> AsRef<SimpleLinkedList<T>> for Queue<T> {
    fn as_ref(&self) -> &SimpleLinkedList<T> {
        &self.list
    }
}
