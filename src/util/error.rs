use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The provided node handle doesn't refer to a node linked into this list. This is the case for
/// handles issued by another list, handles to removed nodes and handles issued before a clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Node does not belong to this list!")]
pub struct NotContained;

/// Two node arguments that need to refer to different nodes refer to the same one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Node arguments must refer to different nodes!")]
pub struct EqualNodes;

/// A removal or read was attempted on an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Collection is empty!")]
pub struct EmptyCollection;

/// The collection was structurally modified after an enumerator took its version snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Collection was modified, enumeration version changed!")]
pub struct VersionChanged;

/// An enumerator was read before its first successful step or after it was exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Enumerator isn't positioned on an element!")]
pub struct NotPositioned;

/// An enumerator was used with a collection other than the one that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Enumerator belongs to a different collection!")]
pub struct ForeignEnumerator;

/// The end of an enumeration window can't be reached from its start in the requested direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Enumeration end is out of range of its start!")]
pub struct RangeOutOfBounds;

/// A collection's length would exceed `usize::MAX`. Growth operations panic with this error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// Errors for operations taking two distinct nodes, such as moves and swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum NodePairError {
    NotContained(NotContained),
    EqualNodes(EqualNodes),
}

/// Errors raised while stepping or reading an enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum EnumerationError {
    VersionChanged(VersionChanged),
    NotPositioned(NotPositioned),
    ForeignEnumerator(ForeignEnumerator),
}

/// Errors raised while constructing a bounded enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum WindowError {
    NotContained(NotContained),
    RangeOutOfBounds(RangeOutOfBounds),
}
