/// A collection with a known length that can be iterated in a fixed order.
pub trait Sequence<T> {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns true if the collection contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over all elements in the collection, in its natural (FIFO) order.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    /// Returns true if any element in the collection is equal to `value`. This is always `O(n)`.
    fn contains_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }
}

/// A [`Sequence`] that can also be iterated in reverse (LIFO) order.
pub trait BidirectionalSequence<T>: Sequence<T> {
    type RevIter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns an iterator over all elements in the collection, in reverse order.
    fn iter_rev<'a>(&'a self) -> Self::RevIter<'a>;
}

#[cfg(feature = "linked")]
mod linked {
    use std::iter::Rev;

    use super::{BidirectionalSequence, Sequence};
    use crate::collections::linked::LinkedList;
    use crate::collections::linked::list::Iter;

    impl<T> Sequence<T> for LinkedList<T> {
        type Iter<'a>
            = Iter<'a, T>
        where
            T: 'a;

        fn len(&self) -> usize {
            LinkedList::len(self)
        }

        fn iter<'a>(&'a self) -> Self::Iter<'a> {
            LinkedList::iter(self)
        }
    }

    impl<T> BidirectionalSequence<T> for LinkedList<T> {
        type RevIter<'a>
            = Rev<Iter<'a, T>>
        where
            T: 'a;

        fn iter_rev<'a>(&'a self) -> Self::RevIter<'a> {
            LinkedList::iter_rev(self)
        }
    }
}

#[cfg(feature = "simple")]
mod simple {
    use super::Sequence;
    use crate::collections::simple::{Iter, Queue, SimpleLinkedList, Stack};

    impl<T> Sequence<T> for SimpleLinkedList<T> {
        type Iter<'a>
            = Iter<'a, T>
        where
            T: 'a;

        fn len(&self) -> usize {
            SimpleLinkedList::len(self)
        }

        fn iter<'a>(&'a self) -> Self::Iter<'a> {
            SimpleLinkedList::iter(self)
        }
    }

    impl<T> Sequence<T> for Stack<T> {
        type Iter<'a>
            = Iter<'a, T>
        where
            T: 'a;

        fn len(&self) -> usize {
            Stack::len(self)
        }

        fn iter<'a>(&'a self) -> Self::Iter<'a> {
            Stack::iter(self)
        }
    }

    impl<T> Sequence<T> for Queue<T> {
        type Iter<'a>
            = Iter<'a, T>
        where
            T: 'a;

        fn len(&self) -> usize {
            Queue::len(self)
        }

        fn iter<'a>(&'a self) -> Self::Iter<'a> {
            Queue::iter(self)
        }
    }
}
