#[cfg(any(feature = "linked", feature = "simple"))]
pub mod alloc;
#[cfg(feature = "collections")]
pub mod error;
#[cfg(feature = "simple")]
pub mod option;
pub mod panic;
#[cfg(any(feature = "linked", feature = "simple"))]
pub mod result;
