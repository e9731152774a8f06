//! Navigation from a populated slot to its six neighbours.

use crate::hive::Hive;
use crate::slot::{Entry, Node, Slot};
use hive_core::{Coord, Direction};
use smallvec::SmallVec;
use std::fmt;

/// A populated slot, borrowed from its hive.
///
/// Holds the hive by shared reference plus the slot index; the hive owns
/// the node. Neighbour accessors apply a [`Direction`] delta to the node's
/// coordinate and resolve the result through [`Hive::get`], so each one
/// returns:
///
/// - `Some(Slot::Node(_))` for a populated neighbour,
/// - `Some(Slot::Sentinel(_))` for an empty one,
/// - `None` past the edge of the hive.
pub struct NodeRef<'a, T> {
    hive: &'a Hive<T>,
    index: usize,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(hive: &'a Hive<T>, index: usize) -> Self {
        Self { hive, index }
    }

    fn node(&self) -> &'a Node<T> {
        match self.hive.entry(self.index) {
            Some(Entry::Occupied(node)) => node,
            _ => unreachable!("NodeRef always points at an occupied slot"),
        }
    }

    /// Position in the hive's flat slot array.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The owning hive.
    pub fn hive(&self) -> &'a Hive<T> {
        self.hive
    }

    /// Canonical coordinate, fixed when the node was created.
    pub fn coord(&self) -> Coord {
        self.node().coord
    }

    /// The payload.
    pub fn data(&self) -> &'a T {
        &self.node().data
    }

    /// The slot one step in `dir`.
    pub fn neighbour(&self, dir: Direction) -> Option<Slot<'a, T>> {
        let c = self.coord().step(dir)?;
        self.hive.get(c.x, c.y, c.z)
    }

    /// `(x - 1, y, z)`
    pub fn north(&self) -> Option<Slot<'a, T>> {
        self.neighbour(Direction::North)
    }

    /// `(x + 1, y, z)`
    pub fn south(&self) -> Option<Slot<'a, T>> {
        self.neighbour(Direction::South)
    }

    /// `(x, y, z - 1)`
    pub fn northwest(&self) -> Option<Slot<'a, T>> {
        self.neighbour(Direction::NorthWest)
    }

    /// `(x, y, z + 1)`
    pub fn southeast(&self) -> Option<Slot<'a, T>> {
        self.neighbour(Direction::SouthEast)
    }

    /// `(x, y - 1, z)`
    pub fn northeast(&self) -> Option<Slot<'a, T>> {
        self.neighbour(Direction::NorthEast)
    }

    /// `(x, y + 1, z)`
    pub fn southwest(&self) -> Option<Slot<'a, T>> {
        self.neighbour(Direction::SouthWest)
    }

    /// All six neighbours in [`Direction::ALL`] order.
    pub fn neighbours(&self) -> SmallVec<[Option<Slot<'a, T>>; 6]> {
        Direction::ALL.iter().map(|&d| self.neighbour(d)).collect()
    }

    /// Follow `path` one step at a time.
    ///
    /// Stepping off the hive ends the walk with `None`. Once the walk
    /// reaches an empty slot it stays on the sentinel for the remaining
    /// steps: the sentinel has no position to step from.
    pub fn walk(self, path: &[Direction]) -> Option<Slot<'a, T>> {
        let mut here = Slot::Node(self);
        for &dir in path {
            here = match here {
                Slot::Node(n) => n.neighbour(dir)?,
                sentinel @ Slot::Sentinel(_) => sentinel,
            };
        }
        Some(here)
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

/// Identity: same hive, same slot.
impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.hive, other.hive) && self.index == other.index
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("index", &self.index)
            .field("coord", &self.coord())
            .field("data", self.data())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data().fmt(f)
    }
}
