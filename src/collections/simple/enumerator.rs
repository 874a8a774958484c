use super::{NodePtr, SimpleLinkedList};
use crate::collections::version::VersionGuard;
use crate::util::error::{EnumerationError, NotPositioned};

/// A versioned cursor over the values of a [`SimpleLinkedList`], front to back. The same rules as
/// for [`linked::Enumerator`](crate::collections::linked::Enumerator) apply: the list stays free
/// to be mutated, and any structural modification makes every further call fail.
///
/// Every call is passed the collection the enumerator was created from. This can be the
/// [`SimpleLinkedList`] itself or the [`Stack`](super::Stack) or [`Queue`](super::Queue) wrapping
/// it, as all of them implement [`AsRef<SimpleLinkedList<T>>`].
#[derive(Debug)]
pub struct SimpleEnumerator<T> {
    pub(crate) guard: VersionGuard,
    pub(crate) position: Position<T>,
}

#[derive(Debug)]
pub(crate) enum Position<T> {
    Before,
    At(NodePtr<T>),
    After,
}

use Position::*;

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> SimpleLinkedList<T> {
    /// Creates an enumerator over the list, front to back.
    pub fn enumerator(&self) -> SimpleEnumerator<T> {
        SimpleEnumerator {
            guard: VersionGuard::register(&self.tracker),
            position: Before,
        }
    }
}

impl<T> SimpleEnumerator<T> {
    /// Advances the enumerator to the next value, returning false once the list is exhausted.
    pub fn move_next<L>(&mut self, list: &L) -> Result<bool, EnumerationError>
    where
        L: AsRef<SimpleLinkedList<T>>,
    {
        let list = list.as_ref();
        self.guard.check(&list.tracker)?;

        let next = match self.position {
            Before => list.state.head(),
            // SAFETY: The version is unchanged, so the node is still linked into `list`.
            At(node) => unsafe { node.next() },
            After => None,
        };

        self.position = match next {
            Some(node) => At(node),
            None => After,
        };
        Ok(self.position.is_at())
    }

    /// Returns a reference to the value the enumerator is positioned on.
    pub fn current<'a, L>(&self, list: &'a L) -> Result<&'a T, EnumerationError>
    where
        L: AsRef<SimpleLinkedList<T>>,
    {
        let list = list.as_ref();
        self.guard.check(&list.tracker)?;
        match self.position {
            // SAFETY: The version is unchanged, so the node is still linked into `list`, which is
            // borrowed for 'a.
            At(node) => Ok(unsafe { node.value() }),
            Before | After => Err(NotPositioned.into()),
        }
    }

    /// Moves the enumerator back before the front of the list.
    pub fn reset<L>(&mut self, list: &L) -> Result<(), EnumerationError>
    where
        L: AsRef<SimpleLinkedList<T>>,
    {
        self.guard.check(&list.as_ref().tracker)?;
        self.position = Before;
        Ok(())
    }
}

impl<T> Position<T> {
    const fn is_at(&self) -> bool {
        matches!(self, At(_))
    }
}
