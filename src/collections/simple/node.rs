use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: This implementation uses Box<T> rather than alloc to allocate space on the heap, because
// Box<T> has the special property that dereferencing it allows a value to be moved out of the heap.

#[derive(Debug)]
pub(crate) struct NodePtr<T>(NonNull<SimpleNode<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: SimpleNode<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// # Safety
    /// The node has to be live and no other pointer to it may be used afterwards.
    pub unsafe fn take_node(self) -> SimpleNode<T> {
        // SAFETY: The pointer was created from a leaked Box in from_node and, per the caller, is
        // reclaimed only once.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    /// # Safety
    /// The node has to be live for `'a` and not mutably borrowed during it.
    pub const unsafe fn value<'a>(self) -> &'a T {
        // SAFETY: Upheld by the caller.
        unsafe { &(*self.0.as_ptr()).value }
    }

    /// # Safety
    /// The node has to be live for `'a` and not otherwise borrowed during it.
    pub unsafe fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: Upheld by the caller.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    /// # Safety
    /// The node has to be live.
    pub unsafe fn next(self) -> Link<T> {
        // SAFETY: Upheld by the caller.
        unsafe { (*self.0.as_ptr()).next }
    }

    /// # Safety
    /// The node has to be live and not borrowed.
    pub unsafe fn set_next(self, next: Link<T>) {
        // SAFETY: Upheld by the caller.
        unsafe { (*self.0.as_ptr()).next = next }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct SimpleNode<T> {
    pub value: T,
    pub next: Link<T>,
}
