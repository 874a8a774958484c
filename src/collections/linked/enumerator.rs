//! A versioned enumerator over a [`LinkedList`], which doesn't borrow the list between steps.
//!
//! Unlike [`Iter`](super::list::Iter), an [`Enumerator`] leaves the list free to be mutated while
//! it is alive. It keeps a snapshot of the list's version instead, and every step, read or reset
//! fails with [`VersionChanged`] once the list has been structurally modified.

use std::rc::Rc;

use super::list::{LinkedList, NodeHandle};
use crate::collections::version::{VersionGuard, VersionTracker};
use crate::collections::Direction;
use crate::util::result::ResultExtension;
#[doc(inline)]
pub use crate::util::error::{
    EnumerationError, NotContained, NotPositioned, RangeOutOfBounds, VersionChanged, WindowError,
};

/// A cursor over the nodes of a [`LinkedList`] in either [`Direction`], optionally restricted to
/// a window of the list. See [`LinkedList::enumerator`] and [`LinkedList::enumerator_between`] to
/// create one.
///
/// The enumerator is passed the list it was created from on every call. Passing any other list
/// fails with [`ForeignEnumerator`](crate::collections::ForeignEnumerator).
#[derive(Debug)]
pub struct Enumerator {
    pub(crate) guard: VersionGuard,
    pub(crate) direction: Direction,
    pub(crate) start: Option<NodeHandle>,
    pub(crate) end: Option<NodeHandle>,
    pub(crate) position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Position {
    Before,
    At(NodeHandle),
    After,
}

use Position::*;

impl<T> LinkedList<T> {
    /// Creates an enumerator over the whole list in the provided `direction`.
    pub fn enumerator(&self, direction: Direction) -> Enumerator {
        Enumerator::register(&self.tracker, direction, None, None)
    }

    /// Creates an enumerator over part of the list in the provided `direction`, panicking on a
    /// failure. See [`LinkedList::try_enumerator_between`].
    ///
    /// # Panics
    /// Panics if either node doesn't belong to the list or if `end` can't be reached from `start`.
    pub fn enumerator_between(
        &self,
        direction: Direction,
        start: Option<NodeHandle>,
        end: Option<NodeHandle>,
    ) -> Enumerator {
        self.try_enumerator_between(direction, start, end).throw()
    }

    /// Creates an enumerator over part of the list in the provided `direction`.
    ///
    /// Enumeration starts at `start`, or the natural first node for `direction` if absent, and
    /// stops before `end`, or after the natural last node if absent. `end` is found by walking the
    /// list from `start`, so construction is `O(n)` when `end` is provided.
    pub fn try_enumerator_between(
        &self,
        direction: Direction,
        start: Option<NodeHandle>,
        end: Option<NodeHandle>,
    ) -> Result<Enumerator, WindowError> {
        let first = match start {
            Some(start) => Some(self.resolve(start)?),
            None => self.boundary(direction),
        };

        if let Some(end) = end {
            let end = self.resolve(end)?;
            let mut curr = first;
            loop {
                match curr {
                    Some(index) if index == end => break,
                    Some(index) => curr = self.node(index).towards(direction),
                    None => return Err(RangeOutOfBounds.into()),
                }
            }
        }

        Ok(Enumerator::register(&self.tracker, direction, start, end))
    }
}

impl Enumerator {
    fn register(
        tracker: &Rc<VersionTracker>,
        direction: Direction,
        start: Option<NodeHandle>,
        end: Option<NodeHandle>,
    ) -> Enumerator {
        Enumerator {
            guard: VersionGuard::register(tracker),
            direction,
            start,
            end,
            position: Before,
        }
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Advances the enumerator to the next node of the window, returning false once the window is
    /// exhausted. The first call moves to the start of the window.
    pub fn move_next<T>(&mut self, list: &LinkedList<T>) -> Result<bool, EnumerationError> {
        self.guard.check(&list.tracker)?;

        let next = match self.position {
            Before => match self.start {
                Some(start) => Some(start),
                None => list.boundary(self.direction).map(|index| list.handle_at(index)),
            },
            At(curr) => list
                .try_neighbour(curr, self.direction)
                .map_err(|_| VersionChanged)?,
            After => None,
        };

        match next {
            Some(node) if Some(node) != self.end => {
                self.position = At(node);
                Ok(true)
            },
            _ => {
                self.position = After;
                Ok(false)
            },
        }
    }

    /// Returns a handle to the node the enumerator is positioned on.
    pub fn current_node<T>(&self, list: &LinkedList<T>) -> Result<NodeHandle, EnumerationError> {
        self.guard.check(&list.tracker)?;
        match self.position {
            At(node) => Ok(node),
            Before | After => Err(NotPositioned.into()),
        }
    }

    /// Returns a reference to the value the enumerator is positioned on.
    pub fn current<'a, T>(&self, list: &'a LinkedList<T>) -> Result<&'a T, EnumerationError> {
        let node = self.current_node(list)?;
        // An unchanged version means the node is still linked.
        list.try_get(node).map_err(|_| VersionChanged.into())
    }

    /// Moves the enumerator back before the start of its window.
    pub fn reset<T>(&mut self, list: &LinkedList<T>) -> Result<(), EnumerationError> {
        self.guard.check(&list.tracker)?;
        self.position = Before;
        Ok(())
    }
}
