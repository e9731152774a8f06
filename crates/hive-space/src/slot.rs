//! Slot storage: the shared sentinel and the per-slot views handed out by
//! lookups.
//!
//! Every lookup has three outcomes that must stay distinct:
//!
//! - `None`: the coordinate is outside the hive.
//! - `Some(Slot::Sentinel(_))`: the position exists but holds no node yet.
//! - `Some(Slot::Node(_))`: a populated node.

use crate::hive::Hive;
use crate::node::NodeRef;
use hive_core::Coord;
use std::fmt;

/// Marker for a valid but unpopulated slot.
///
/// There is exactly one, [`SENTINEL`], shared by every hive. It carries no
/// data and compares by address.
pub struct Sentinel {
    // Non-zero size so the static has a unique address.
    _marker: u8,
}

/// The process-wide sentinel.
pub static SENTINEL: Sentinel = Sentinel { _marker: 0 };

/// The process-wide sentinel.
pub fn sentinel() -> &'static Sentinel {
    &SENTINEL
}

impl PartialEq for Sentinel {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for Sentinel {}

impl fmt::Debug for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sentinel")
    }
}

/// A populated slot as stored in the hive.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) coord: Coord,
}

/// Storage cell for one slot. Only ever moves from `Vacant` to `Occupied`.
#[derive(Debug)]
pub(crate) enum Entry<T> {
    Vacant,
    Occupied(Node<T>),
}

impl<T> Entry<T> {
    pub(crate) fn from_value(value: Option<T>, coord: Coord) -> Self {
        match value {
            Some(data) => Entry::Occupied(Node { data, coord }),
            None => Entry::Vacant,
        }
    }
}

/// Borrowed view of one slot of a hive.
pub enum Slot<'a, T> {
    /// Valid position, no node yet. Always points at [`SENTINEL`].
    Sentinel(&'static Sentinel),
    /// A populated node.
    Node(NodeRef<'a, T>),
}

impl<'a, T> Slot<'a, T> {
    pub(crate) fn at(hive: &'a Hive<T>, index: usize) -> Option<Self> {
        match hive.entry(index)? {
            Entry::Vacant => Some(Slot::Sentinel(&SENTINEL)),
            Entry::Occupied(_) => Some(Slot::Node(NodeRef::new(hive, index))),
        }
    }

    /// `true` for an unpopulated slot.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Slot::Sentinel(_))
    }

    /// The node, if this slot is populated.
    pub fn node(self) -> Option<NodeRef<'a, T>> {
        match self {
            Slot::Node(n) => Some(n),
            Slot::Sentinel(_) => None,
        }
    }

    /// Payload of a populated slot.
    pub fn data(&self) -> Option<&'a T> {
        match self {
            Slot::Node(n) => Some(n.data()),
            Slot::Sentinel(_) => None,
        }
    }
}

impl<T> Clone for Slot<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<'_, T> {}

/// Identity comparison: two sentinels are equal, two nodes are equal when
/// they are the same slot of the same hive.
impl<T> PartialEq for Slot<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Slot::Sentinel(a), Slot::Sentinel(b)) => a == b,
            (Slot::Node(a), Slot::Node(b)) => a == b,
            _ => false,
        }
    }
}

impl<T> Eq for Slot<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Slot<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Sentinel(s) => s.fmt(f),
            Slot::Node(n) => n.fmt(f),
        }
    }
}
