//! Doubly linked collection types. Primarily revolves around [`LinkedList`], the [`NodeHandle`]s
//! it issues and its accompanying versioned [`Enumerator`] type.

pub mod enumerator;
pub mod list;

#[doc(inline)]
pub use enumerator::Enumerator;
#[doc(inline)]
pub use list::{LinkedList, NodeHandle};
