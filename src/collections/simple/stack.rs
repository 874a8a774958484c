use std::fmt::{self, Debug, Formatter};

use super::{Iter, SimpleEnumerator, SimpleLinkedList};
#[doc(inline)]
pub use crate::util::error::EmptyCollection;
use crate::util::result::ResultExtension;

/// A last in, first out collection built on a [`SimpleLinkedList`]. Values are pushed onto and
/// popped from the top, which is the front of the underlying list.
///
/// Iteration visits values from the top of the stack to the bottom.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    pub(crate) list: SimpleLinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates a new Stack with no elements.
    pub fn new() -> Stack<T> {
        Stack {
            list: SimpleLinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Pushes `value` onto the top of the stack.
    pub fn push(&mut self, value: T) {
        self.list.push_front(value);
    }

    /// Removes the value on top of the stack and returns it, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    pub fn pop(&mut self) -> T {
        self.try_pop().throw()
    }

    /// Removes the value on top of the stack and returns it, returning an [`Err`] on a failure
    /// rather than panicking.
    pub fn try_pop(&mut self) -> Result<T, EmptyCollection> {
        self.list.pop_front().ok_or(EmptyCollection)
    }

    /// Returns a reference to the value on top of the stack, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the stack is empty.
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

    /// Returns an iterator over the stack, from the top to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }

    /// Creates an enumerator over the stack, from the top to the bottom. The enumerator is passed
    /// the stack itself on every call.
    pub fn enumerator(&self) -> SimpleEnumerator<T> {
        self.list.enumerator()
    }

    /// Returns the underlying list, with the top of the stack at its front.
    pub const fn as_list(&self) -> &SimpleLinkedList<T> {
        &self.list
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes every value in order, leaving the last one on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Stack<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;

    type IntoIter = super::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("top", &self.list.front())
            .field("len", &self.len())
            .finish()
    }
}

impl<T> AsRef<SimpleLinkedList<T>> for Stack<T> {
    fn as_ref(&self) -> &SimpleLinkedList<T> {
        &self.list
    }
}
