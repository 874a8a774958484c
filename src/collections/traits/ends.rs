use super::Sequence;
use crate::util::error::{EmptyCollection, NodePairError, NotContained};

/// A [`Sequence`] that can be added to and removed from at both ends. Insertions return a handle
/// to the inserted element.
pub trait MutableEnds<T>: Sequence<T> {
    type Handle: Copy + Eq;

    fn front(&self) -> Option<&T>;

    fn back(&self) -> Option<&T>;

    fn add_first(&mut self, value: T) -> Self::Handle;

    fn add_last(&mut self, value: T) -> Self::Handle;

    fn try_remove_first(&mut self) -> Result<T, EmptyCollection>;

    fn try_remove_last(&mut self) -> Result<T, EmptyCollection>;
}

/// A [`MutableEnds`] collection whose elements can also be inserted, removed and rearranged
/// relative to a handle.
pub trait MutableMiddle<T>: MutableEnds<T> {
    fn try_add_before(
        &mut self,
        node: Self::Handle,
        value: T,
    ) -> Result<Self::Handle, NotContained>;

    fn try_add_after(&mut self, node: Self::Handle, value: T) -> Result<Self::Handle, NotContained>;

    fn try_remove(&mut self, node: Self::Handle) -> Result<T, NotContained>;

    /// Moves `node` directly before `before`. Returns false if it was already there.
    fn try_move_before(
        &mut self,
        node: Self::Handle,
        before: Self::Handle,
    ) -> Result<bool, NodePairError>;

    /// Moves `node` directly after `after`. Returns false if it was already there.
    fn try_move_after(
        &mut self,
        node: Self::Handle,
        after: Self::Handle,
    ) -> Result<bool, NodePairError>;

    fn try_swap(&mut self, x: Self::Handle, y: Self::Handle) -> Result<(), NodePairError>;
}

#[cfg(feature = "linked")]
mod linked {
    use super::{MutableEnds, MutableMiddle};
    use crate::collections::linked::{LinkedList, NodeHandle};
    use crate::util::error::{EmptyCollection, NodePairError, NotContained};

    impl<T> MutableEnds<T> for LinkedList<T> {
        type Handle = NodeHandle;

        fn front(&self) -> Option<&T> {
            LinkedList::front(self)
        }

        fn back(&self) -> Option<&T> {
            LinkedList::back(self)
        }

        fn add_first(&mut self, value: T) -> NodeHandle {
            LinkedList::add_first(self, value)
        }

        fn add_last(&mut self, value: T) -> NodeHandle {
            LinkedList::add_last(self, value)
        }

        fn try_remove_first(&mut self) -> Result<T, EmptyCollection> {
            LinkedList::try_remove_first(self)
        }

        fn try_remove_last(&mut self) -> Result<T, EmptyCollection> {
            LinkedList::try_remove_last(self)
        }
    }

    impl<T> MutableMiddle<T> for LinkedList<T> {
        fn try_add_before(
            &mut self,
            node: NodeHandle,
            value: T,
        ) -> Result<NodeHandle, NotContained> {
            LinkedList::try_add_before(self, node, value)
        }

        fn try_add_after(
            &mut self,
            node: NodeHandle,
            value: T,
        ) -> Result<NodeHandle, NotContained> {
            LinkedList::try_add_after(self, node, value)
        }

        fn try_remove(&mut self, node: NodeHandle) -> Result<T, NotContained> {
            LinkedList::try_remove(self, node)
        }

        fn try_move_before(
            &mut self,
            node: NodeHandle,
            before: NodeHandle,
        ) -> Result<bool, NodePairError> {
            LinkedList::try_move_before(self, node, before)
        }

        fn try_move_after(
            &mut self,
            node: NodeHandle,
            after: NodeHandle,
        ) -> Result<bool, NodePairError> {
            LinkedList::try_move_after(self, node, after)
        }

        fn try_swap(&mut self, x: NodeHandle, y: NodeHandle) -> Result<(), NodePairError> {
            LinkedList::try_swap(self, x, y)
        }
    }
}
