//! Capability traits shared by the collections in this crate.
//!
//! Rather than one interface per collection, each trait describes a single capability, so that
//! generic code can ask for exactly what it uses.

mod ends;
mod sequence;

pub use ends::*;
pub use sequence::*;
mod tests;
