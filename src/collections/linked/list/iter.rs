use std::iter::{FusedIterator, Rev};
use std::marker::PhantomData;
use std::ptr::NonNull;

use ListState::*;

use super::{LinkedList, ListContents, ListState, Slot};

impl<T> LinkedList<T> {
    /// Returns an iterator over the elements of the list in FIFO order, first to last.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over the elements of the list in LIFO order, last to first.
    pub fn iter_rev(&self) -> Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

pub struct IntoIter<T> {
    // There is no point rewriting unlinking logic when the iterator can just hold the list and
    // remove from either end.
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.try_remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.try_remove_last().ok()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            list: self,
            state: self.state,
        }
    }
}

pub struct Iter<'a, T> {
    // The copied state shrinks from both ends as elements are yielded, using len to track the
    // number of items left.
    pub(crate) list: &'a LinkedList<T>,
    pub(crate) state: ListState,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list;
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                let node = list.node(*head);

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // With items left, the current head is followed by at least one more.
                        if let Some(next) = node.next {
                            *head = next;
                        }
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(&node.value)
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let list = self.list;
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, tail, .. }) => {
                let node = list.node(*tail);

                match len.checked_sub(1) {
                    Some(new_len) => {
                        if let Some(prev) = node.prev {
                            *tail = prev;
                        }
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(&node.value)
            },
        }
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            list: self.list,
            state: self.state,
        }
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            state: self.state,
            slots: NonNull::from(self.slots.as_mut_slice()).cast(),
            _phantom: PhantomData,
        }
    }
}

pub struct IterMut<'a, T> {
    // Walks the same way as Iter, but through a pointer to the arena so that each yielded node can
    // be borrowed mutably for 'a.
    pub(crate) state: ListState,
    pub(crate) slots: NonNull<Slot<T>>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    /// # Safety
    /// `index` has to refer to a node of the borrowed list that hasn't been yielded yet.
    unsafe fn node_at(&mut self, index: usize) -> (&'a mut T, super::Link, super::Link) {
        // SAFETY: The list is exclusively borrowed for 'a and `index` is in bounds of its arena.
        // Each index is yielded at most once, because the chain is acyclic and both ends stop
        // once len reaches zero.
        let slot = unsafe { &mut *self.slots.as_ptr().add(index) };
        match slot.node_mut() {
            Some(node) => (&mut node.value, node.prev, node.next),
            None => unreachable!("linked index {index} refers to a vacant slot"),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, remaining) = match self.state {
            Empty => return None,
            Full(ListContents { len, head, .. }) => (head, len.checked_sub(1)),
        };

        // SAFETY: `index` is the head of the part of the list that is yet to be yielded.
        let (value, _, next) = unsafe { self.node_at(index) };

        match (remaining, &mut self.state) {
            (Some(new_len), Full(ListContents { len, head, .. })) => {
                if let Some(next) = next {
                    *head = next;
                }
                *len = new_len;
            },
            _ => self.state = Empty,
        }

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (index, remaining) = match self.state {
            Empty => return None,
            Full(ListContents { len, tail, .. }) => (tail, len.checked_sub(1)),
        };

        // SAFETY: `index` is the tail of the part of the list that is yet to be yielded.
        let (value, prev, _) = unsafe { self.node_at(index) };

        match (remaining, &mut self.state) {
            (Some(new_len), Full(ListContents { len, tail, .. })) => {
                if let Some(prev) = prev {
                    *tail = prev;
                }
                *len = new_len;
            },
            _ => self.state = Empty,
        }

        Some(value)
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}
