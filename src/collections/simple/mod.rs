//! Singly linked collection types. [`SimpleLinkedList`] holds the nodes, while [`Stack`] and
//! [`Queue`] restrict it to push/pop and enqueue/dequeue respectively.

mod enumerator;
mod iter;
mod node;
mod queue;
mod simple_list;
mod stack;

pub use enumerator::SimpleEnumerator;
pub use iter::*;
pub(crate) use node::*;
pub use queue::Queue;
pub use simple_list::SimpleLinkedList;
pub(crate) use simple_list::{ListContents, ListState};
pub use stack::Stack;
