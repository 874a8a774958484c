//! Linked collections with stable node handles and versioned enumeration.
//!
//! # Purpose
//! This crate provides a doubly linked [`LinkedList`](collections::linked::LinkedList) whose nodes
//! can be addressed directly through [`NodeHandle`](collections::linked::NodeHandle)s, along with
//! singly linked [`Stack`](collections::simple::Stack) and [`Queue`](collections::simple::Queue)
//! types built on a shared [`SimpleLinkedList`](collections::simple::SimpleLinkedList).
//!
//! Handles make it possible to insert, remove, move and swap nodes in `O(1)` without first seeking
//! to a position. A handle is only ever valid for the list that issued it: handing it to another
//! list, or using it after its node was removed, is reported as an error rather than touching
//! unrelated memory.
//!
//! # Enumeration
//! Borrowing iterators ([`LinkedList::iter`](collections::linked::LinkedList::iter) and friends)
//! are the usual way to walk a collection. Alongside them, each list can hand out an enumerator
//! that doesn't borrow the list at all. Because the list stays mutable while an enumerator is
//! alive, every enumerator step compares a version snapshot against the list's live version and
//! fails with [`VersionChanged`](collections::VersionChanged) once the structure has been modified.
//! The version is only maintained while at least one enumerator is alive.
//!
//! # Error Handling
//! Fallible methods come in pairs. The plain form panics with the message of the error, and a
//! `try_` form returns a [`Result`] instead. Errors are small structs (mostly ZSTs) implementing
//! [`Error`](std::error::Error), combined into enums where a method can fail in more than one way,
//! so that callers can match on them statically.
//!
//! # Dependencies
//! `derive_more` removes some very repetitive trait implementations for the error types and
//! `log` is used to emit `trace` level events for whole-structure operations. No logger is
//! installed by this crate.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
