//! Linked collection types and the capability traits they implement.
//!
//! # Method
//! Every list here tracks a [`Length`] that can't be zero while the list holds nodes, wrapped in a
//! state enum with an `Empty` variant, so that an empty list never carries dangling head or tail
//! links.
//!
//! All errors are re-exported from this module.

#[cfg(any(feature = "linked", feature = "simple"))]
mod length;
#[cfg(any(feature = "linked", feature = "simple"))]
pub(crate) mod version;

#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "simple")]
pub mod simple;
#[cfg(feature = "traits")]
pub mod traits;

#[cfg(any(feature = "linked", feature = "simple"))]
pub(crate) use length::*;
#[cfg(any(feature = "linked", feature = "simple"))]
pub use version::Direction;

#[doc(inline)]
pub use crate::util::error::{
    CapacityOverflow, EmptyCollection, EnumerationError, EqualNodes, ForeignEnumerator,
    NodePairError, NotContained, NotPositioned, RangeOutOfBounds, VersionChanged, WindowError,
};
