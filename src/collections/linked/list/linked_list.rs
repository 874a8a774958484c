use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut};
use std::rc::Rc;

use derive_more::IsVariant;
use log::trace;

use super::{Link, Node, NodeHandle, OwnerId, Slot};
use crate::collections::version::VersionTracker;
use crate::collections::{Direction, Length, ONE};
#[doc(inline)]
pub use crate::util::error::{EmptyCollection, EqualNodes, NodePairError, NotContained};
use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// A list with links in both directions, whose nodes can be addressed through [`NodeHandle`]s.
/// See also: [`Enumerator`](crate::collections::linked::Enumerator) for traversal that doesn't
/// borrow the list.
///
/// Nodes are stored in an arena owned by the list, so a handle is a plain index paired with the
/// generation of its slot and the id of the issuing list. Handles are never dereferenced without
/// being checked against all three.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `m`: The number of items in the other LinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `first/last`, `front/back` | `O(1)` |
/// | `add_first/last` | `O(1)` |
/// | `add_before/after` | `O(1)` |
/// | `remove`, `remove_first/last` | `O(1)` |
/// | `move_before/after` | `O(1)` |
/// | `swap` | `O(1)` |
/// | `find/find_last` | `O(n)` |
/// | `contains` | `O(n)` |
/// | `append` | `O(m)` |
/// | `clear` | `O(n)` |
pub struct LinkedList<T> {
    pub(crate) state: ListState,
    pub(crate) slots: Vec<Slot<T>>,
    pub(crate) vacant: Link,
    pub(crate) owner: OwnerId,
    pub(crate) tracker: Rc<VersionTracker>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum ListState {
    #[default]
    Empty,
    Full(ListContents),
}

use ListState::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListContents {
    pub len: Length,
    pub head: usize,
    pub tail: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            slots: Vec::new(),
            vacant: None,
            owner: OwnerId::next(),
            tracker: VersionTracker::new(),
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a handle to the first node in the list, if it exists.
    pub fn first(&self) -> Option<NodeHandle> {
        self.head_link().map(|index| self.handle_at(index))
    }

    /// Returns a handle to the last node in the list, if it exists.
    pub fn last(&self) -> Option<NodeHandle> {
        self.tail_link().map(|index| self.handle_at(index))
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head_link().map(|index| &self.node(index).value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head_link().map(|index| &mut self.node_mut(index).value)
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.tail_link().map(|index| &self.node(index).value)
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.tail_link().map(|index| &mut self.node_mut(index).value)
    }

    /// Returns true if `node` refers to a node currently linked into this list.
    pub fn contains_node(&self, node: NodeHandle) -> bool {
        self.resolve(node).is_ok()
    }

    /// Returns a reference to the value of `node`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `node` doesn't belong to this list.
    pub fn get(&self, node: NodeHandle) -> &T {
        self.try_get(node).throw()
    }

    /// Returns a reference to the value of `node`, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_get(&self, node: NodeHandle) -> Result<&T, NotContained> {
        Ok(&self.node(self.resolve(node)?).value)
    }

    /// Returns a mutable reference to the value of `node`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `node` doesn't belong to this list.
    pub fn get_mut(&mut self, node: NodeHandle) -> &mut T {
        self.try_get_mut(node).throw()
    }

    /// Returns a mutable reference to the value of `node`, returning an [`Err`] on a failure
    /// rather than panicking.
    pub fn try_get_mut(&mut self, node: NodeHandle) -> Result<&mut T, NotContained> {
        let index = self.resolve(node)?;
        Ok(&mut self.node_mut(index).value)
    }

    /// Returns a handle to the node following `node`, if there is one.
    ///
    /// # Panics
    /// Panics if `node` doesn't belong to this list.
    pub fn next(&self, node: NodeHandle) -> Option<NodeHandle> {
        self.try_next(node).throw()
    }

    pub fn try_next(&self, node: NodeHandle) -> Result<Option<NodeHandle>, NotContained> {
        self.try_neighbour(node, Direction::Fifo)
    }

    /// Returns a handle to the node preceding `node`, if there is one.
    ///
    /// # Panics
    /// Panics if `node` doesn't belong to this list.
    pub fn prev(&self, node: NodeHandle) -> Option<NodeHandle> {
        self.try_prev(node).throw()
    }

    pub fn try_prev(&self, node: NodeHandle) -> Result<Option<NodeHandle>, NotContained> {
        self.try_neighbour(node, Direction::Lifo)
    }

    /// Add the provided element to the front of the LinkedList, returning a handle to its node.
    pub fn add_first(&mut self, value: T) -> NodeHandle {
        let head = self.head_link();
        let index = self.alloc(value);
        self.link_between(index, None, head);
        self.tracker.bump();
        self.handle_at(index)
    }

    /// Add the provided element to the back of the LinkedList, returning a handle to its node.
    pub fn add_last(&mut self, value: T) -> NodeHandle {
        let tail = self.tail_link();
        let index = self.alloc(value);
        self.link_between(index, tail, None);
        self.tracker.bump();
        self.handle_at(index)
    }

    /// Inserts `value` directly before `node`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `node` doesn't belong to this list.
    pub fn add_before(&mut self, node: NodeHandle, value: T) -> NodeHandle {
        self.try_add_before(node, value).throw()
    }

    /// Inserts `value` directly before `node`, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_add_before(
        &mut self,
        node: NodeHandle,
        value: T,
    ) -> Result<NodeHandle, NotContained> {
        let next = self.resolve(node)?;
        let prev = self.node(next).prev;
        let index = self.alloc(value);
        self.link_between(index, prev, Some(next));
        self.tracker.bump();
        Ok(self.handle_at(index))
    }

    /// Inserts `value` directly after `node`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `node` doesn't belong to this list.
    pub fn add_after(&mut self, node: NodeHandle, value: T) -> NodeHandle {
        self.try_add_after(node, value).throw()
    }

    /// Inserts `value` directly after `node`, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_add_after(
        &mut self,
        node: NodeHandle,
        value: T,
    ) -> Result<NodeHandle, NotContained> {
        let prev = self.resolve(node)?;
        let next = self.node(prev).next;
        let index = self.alloc(value);
        self.link_between(index, Some(prev), next);
        self.tracker.bump();
        Ok(self.handle_at(index))
    }

    /// Removes `node` from the list and returns its value, panicking on a failure. The handle (and
    /// any copy of it) is invalid afterwards.
    ///
    /// # Panics
    /// Panics if `node` doesn't belong to this list.
    pub fn remove(&mut self, node: NodeHandle) -> T {
        self.try_remove(node).throw()
    }

    /// Removes `node` from the list and returns its value, returning an [`Err`] on a failure rather
    /// than panicking.
    pub fn try_remove(&mut self, node: NodeHandle) -> Result<T, NotContained> {
        let index = self.resolve(node)?;
        Ok(self.remove_at(index))
    }

    /// Removes the first element from the list and returns it, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn remove_first(&mut self) -> T {
        self.try_remove_first().throw()
    }

    pub fn try_remove_first(&mut self) -> Result<T, EmptyCollection> {
        match self.head_link() {
            Some(head) => Ok(self.remove_at(head)),
            None => Err(EmptyCollection),
        }
    }

    /// Removes the last element from the list and returns it, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn remove_last(&mut self) -> T {
        self.try_remove_last().throw()
    }

    pub fn try_remove_last(&mut self) -> Result<T, EmptyCollection> {
        match self.tail_link() {
            Some(tail) => Ok(self.remove_at(tail)),
            None => Err(EmptyCollection),
        }
    }

    /// Relocates `node` so that it directly follows `after`, panicking on a failure. Returns false
    /// if `node` already follows `after`, in which case the list is left untouched.
    ///
    /// # Panics
    /// Panics if either node doesn't belong to this list or if both are the same node.
    pub fn move_after(&mut self, node: NodeHandle, after: NodeHandle) -> bool {
        self.try_move_after(node, after).throw()
    }

    pub fn try_move_after(
        &mut self,
        node: NodeHandle,
        after: NodeHandle,
    ) -> Result<bool, NodePairError> {
        let (node, after) = self.resolve_pair(node, after)?;
        if self.node(after).next == Some(node) {
            return Ok(false);
        }

        self.unlink(node);
        let next = self.node(after).next;
        self.link_between(node, Some(after), next);
        self.tracker.bump();
        Ok(true)
    }

    /// Relocates `node` so that it directly precedes `before`, panicking on a failure. Returns
    /// false if `node` already precedes `before`, in which case the list is left untouched.
    ///
    /// # Panics
    /// Panics if either node doesn't belong to this list or if both are the same node.
    pub fn move_before(&mut self, node: NodeHandle, before: NodeHandle) -> bool {
        self.try_move_before(node, before).throw()
    }

    pub fn try_move_before(
        &mut self,
        node: NodeHandle,
        before: NodeHandle,
    ) -> Result<bool, NodePairError> {
        let (node, before) = self.resolve_pair(node, before)?;
        if self.node(before).prev == Some(node) {
            return Ok(false);
        }

        self.unlink(node);
        let prev = self.node(before).prev;
        self.link_between(node, prev, Some(before));
        self.tracker.bump();
        Ok(true)
    }

    /// Exchanges the positions of `x` and `y`, panicking on a failure. Both handles stay valid and
    /// keep referring to the same values.
    ///
    /// # Panics
    /// Panics if either node doesn't belong to this list or if both are the same node.
    pub fn swap(&mut self, x: NodeHandle, y: NodeHandle) {
        self.try_swap(x, y).throw()
    }

    pub fn try_swap(&mut self, x: NodeHandle, y: NodeHandle) -> Result<(), NodePairError> {
        let (x, y) = self.resolve_pair(x, y)?;
        let (x_prev, x_next) = (self.node(x).prev, self.node(x).next);
        let (y_prev, y_next) = (self.node(y).prev, self.node(y).next);

        if x_next == Some(y) {
            // x directly precedes y: x_prev, y, x, y_next.
            self.unlink(x);
            self.link_between(x, Some(y), y_next);
        } else if y_next == Some(x) {
            // y directly precedes x: y_prev, x, y, x_next.
            self.unlink(y);
            self.link_between(y, Some(x), x_next);
        } else {
            // With neither node adjacent to the other, all four neighbours are distinct from x and
            // y and each pair stays adjacent once both nodes are unlinked.
            self.unlink(x);
            self.unlink(y);
            self.link_between(x, y_prev, y_next);
            self.link_between(y, x_prev, x_next);
        }

        self.tracker.bump();
        Ok(())
    }

    /// Removes every element from the list. Every handle issued before the clear becomes invalid.
    pub fn clear(&mut self) {
        trace!("clearing linked list with {} elements", self.len());
        self.slots.clear();
        self.vacant = None;
        self.state = Empty;
        self.owner = OwnerId::next();
        self.tracker.bump();
    }

    /// Moves every element of `other` to the back of this list, in order.
    pub fn append(&mut self, other: LinkedList<T>) {
        self.extend(other);
    }

    /// Returns the number of nodes allocated by the list, including vacated slots awaiting reuse.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns a handle to the first node holding a value equal to `value`.
    pub fn find(&self, value: &T) -> Option<NodeHandle> {
        self.find_towards(value, Direction::Fifo)
    }

    /// Returns a handle to the last node holding a value equal to `value`.
    pub fn find_last(&self, value: &T) -> Option<NodeHandle> {
        self.find_towards(value, Direction::Lifo)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Removes the first node holding a value equal to `value`. Returns false if there was none.
    pub fn remove_value(&mut self, value: &T) -> bool {
        match self.find(value) {
            Some(node) => self.try_remove(node).is_ok(),
            None => false,
        }
    }

    fn find_towards(&self, value: &T, direction: Direction) -> Option<NodeHandle> {
        let mut curr = self.boundary(direction);
        while let Some(index) = curr {
            let node = self.node(index);
            if node.value == *value {
                return Some(self.handle_at(index));
            }
            curr = node.towards(direction);
        }
        None
    }
}

impl<T> LinkedList<T> {
    pub(crate) const fn head_link(&self) -> Link {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head),
        }
    }

    pub(crate) const fn tail_link(&self) -> Link {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail),
        }
    }

    /// The node an enumeration in `direction` starts from.
    pub(crate) const fn boundary(&self, direction: Direction) -> Link {
        match direction {
            Direction::Fifo => self.head_link(),
            Direction::Lifo => self.tail_link(),
        }
    }

    /// Returns the arena index of `node` if it is linked into this list.
    pub(crate) fn resolve(&self, node: NodeHandle) -> Result<usize, NotContained> {
        if node.owner != self.owner {
            return Err(NotContained);
        }
        match self.slots.get(node.index) {
            Some(Slot::Occupied { generation, .. }) if *generation == node.generation => {
                Ok(node.index)
            },
            _ => Err(NotContained),
        }
    }

    pub(crate) fn resolve_pair(
        &self,
        a: NodeHandle,
        b: NodeHandle,
    ) -> Result<(usize, usize), NodePairError> {
        let a = self.resolve(a)?;
        let b = self.resolve(b)?;
        if a == b {
            return Err(EqualNodes.into());
        }
        Ok((a, b))
    }

    pub(crate) fn try_neighbour(
        &self,
        node: NodeHandle,
        direction: Direction,
    ) -> Result<Option<NodeHandle>, NotContained> {
        let index = self.resolve(node)?;
        Ok(self.node(index).towards(direction).map(|index| self.handle_at(index)))
    }

    pub(crate) fn handle_at(&self, index: usize) -> NodeHandle {
        NodeHandle {
            owner: self.owner,
            index,
            generation: self.slots[index].generation(),
        }
    }

    /// Returns the node at `index`, which has to be linked into the list.
    pub(crate) fn node(&self, index: usize) -> &Node<T> {
        match self.slots.get(index).and_then(Slot::node) {
            Some(node) => node,
            None => unreachable!("linked index {index} refers to a vacant slot"),
        }
    }

    pub(crate) fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        match self.slots.get_mut(index).and_then(Slot::node_mut) {
            Some(node) => node,
            None => unreachable!("linked index {index} refers to a vacant slot"),
        }
    }

    /// Places `value` in a detached node, reusing a vacant slot if there is one.
    fn alloc(&mut self, value: T) -> usize {
        let node = Node::detached(value);
        match self.vacant {
            Some(index) => {
                let generation = match &self.slots[index] {
                    Slot::Vacant { generation, next_vacant } => {
                        self.vacant = *next_vacant;
                        *generation
                    },
                    Slot::Occupied { .. } => unreachable!("vacant index {index} is occupied"),
                };
                self.slots[index] = Slot::Occupied { generation, node };
                index
            },
            None => {
                self.slots.push(Slot::Occupied { generation: 0, node });
                self.slots.len() - 1
            },
        }
    }

    /// Vacates the slot of a detached node, returning its value.
    fn release(&mut self, index: usize) -> T {
        let vacant = Slot::Vacant {
            generation: self.slots[index].generation().wrapping_add(1),
            next_vacant: self.vacant,
        };
        self.vacant = Some(index);
        match mem::replace(&mut self.slots[index], vacant) {
            Slot::Occupied { node, .. } => node.value,
            Slot::Vacant { .. } => unreachable!("released index {index} was already vacant"),
        }
    }

    fn remove_at(&mut self, index: usize) -> T {
        self.unlink(index);
        self.tracker.bump();
        self.release(index)
    }

    /// Links the detached node at `index` between `prev` and `next`, which have to be adjacent
    /// (or the matching boundary when absent).
    fn link_between(&mut self, index: usize, prev: Link, next: Link) {
        let node = self.node_mut(index);
        node.prev = prev;
        node.next = next;

        if let Some(prev) = prev {
            self.node_mut(prev).next = Some(index);
        }
        if let Some(next) = next {
            self.node_mut(next).prev = Some(index);
        }

        self.state = match self.state {
            Empty => Full(ListContents {
                len: ONE,
                head: index,
                tail: index,
            }),
            Full(ListContents { len, head, tail }) => Full(ListContents {
                len: len.checked_add(1).ok_or(CapacityOverflow).throw(),
                head: if prev.is_none() { index } else { head },
                tail: if next.is_none() { index } else { tail },
            }),
        };
    }

    /// Detaches the node at `index` from its neighbours, leaving its slot occupied.
    fn unlink(&mut self, index: usize) {
        let node = self.node_mut(index);
        let prev = mem::take(&mut node.prev);
        let next = mem::take(&mut node.next);

        if let Some(prev) = prev {
            self.node_mut(prev).next = next;
        }
        if let Some(next) = next {
            self.node_mut(next).prev = prev;
        }

        self.state = match self.state {
            Empty => Empty,
            Full(ListContents { len, head, tail }) => match len.checked_sub(1) {
                None => Empty,
                // With other nodes remaining, a boundary node always has a neighbour on its inner
                // side to take its place.
                Some(len) => Full(ListContents {
                    len,
                    head: if head == index { next.unwrap_or(head) } else { head },
                    tail: if tail == index { prev.unwrap_or(tail) } else { tail },
                }),
            },
        };
    }

    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        let mut forward = 0;
        let mut curr = self.head_link();
        let mut last = None;
        while let Some(index) = curr {
            assert_eq!(self.node(index).prev, last, "Node should link back to its predecessor.");
            forward += 1;
            last = Some(index);
            curr = self.node(index).next;
        }
        assert_eq!(last, self.tail_link(), "Walking forward should end at the tail.");

        let mut backward = 0;
        let mut curr = self.tail_link();
        while let Some(index) = curr {
            backward += 1;
            curr = self.node(index).prev;
        }

        assert_eq!(forward, self.len(), "Forward walk should visit every node.");
        assert_eq!(backward, self.len(), "Backward walk should visit every node.");
    }
}

impl ListState {
    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

impl<T> Index<NodeHandle> for LinkedList<T> {
    type Output = T;

    fn index(&self, node: NodeHandle) -> &Self::Output {
        self.get(node)
    }
}

impl<T> IndexMut<NodeHandle> for LinkedList<T> {
    fn index_mut(&mut self, node: NodeHandle) -> &mut Self::Output {
        self.get_mut(node)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add_last(item);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        // The clone is a separate list, so it has to issue its own handles.
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }

        // Terminate variable length hashing sequence.
        0xFF.hash(state);
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
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
