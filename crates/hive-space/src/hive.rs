//! The hive: a fixed-shape hexagonal grid over a flat slot array.

use crate::config::HiveConfig;
use crate::error::HiveError;
use crate::find::Find;
use crate::layout::Layout;
use crate::shape::Shape;
use crate::slot::{Entry, Slot};
use hive_core::{Coord, HiveInstanceId, RingAxis};
use std::iter::Rev;
use std::ops::Range;
use tracing::{debug, trace, warn};

/// An irregular hexagonal grid with O(1) neighbour lookup.
///
/// The shape is fixed at construction: slots are never added or removed,
/// and a populated slot is never emptied again. Only payloads change, and
/// an empty slot may be populated through [`set`](Self::set).
///
/// # Examples
///
/// ```
/// use hive_space::{Hexagon, Hive, Slot};
///
/// let labels = ["n", "centre", "s", "nw", "sw", "ne", "se"];
/// let hive = Hive::new(&Hexagon::new(2).unwrap(), labels.map(Some)).unwrap();
///
/// let centre = hive.get(1, 0, 0).and_then(Slot::node).unwrap();
/// assert_eq!(*centre.data(), "centre");
/// assert_eq!(centre.north(), hive.get(0, 0, 0));
/// assert_eq!(centre.southeast().and_then(|s| s.data()), Some(&"se"));
///
/// // Off the edge.
/// let ne = centre.northeast().and_then(Slot::node).unwrap();
/// assert_eq!(ne.north(), None);
/// ```
#[derive(Debug)]
pub struct Hive<T> {
    slots: Vec<Entry<T>>,
    layout: Layout,
    instance_id: HiveInstanceId,
}

impl<T> Hive<T> {
    /// Build a hive with default limits.
    ///
    /// `values` are consumed in walk order, one per slot. `None`, or running
    /// out of values, leaves the slot empty.
    pub fn new<S, I>(shape: &S, values: I) -> Result<Self, HiveError>
    where
        S: Shape + ?Sized,
        I: IntoIterator<Item = Option<T>>,
    {
        Self::with_config(shape, values, &HiveConfig::default())
    }

    /// Build a hive with explicit limits.
    pub fn with_config<S, I>(shape: &S, values: I, config: &HiveConfig) -> Result<Self, HiveError>
    where
        S: Shape + ?Sized,
        I: IntoIterator<Item = Option<T>>,
    {
        let layout = Layout::generate(shape, config)?;
        let mut values = values.into_iter();
        let slots = layout
            .coords()
            .map(|coord| Entry::from_value(values.next().flatten(), coord))
            .collect();
        if values.next().is_some() {
            warn!(
                slots = layout.len(),
                "more initial values than slots; surplus ignored"
            );
        }
        Ok(Self::assemble(layout, slots))
    }

    /// Build a hive by asking `f` for the payload of every coordinate.
    pub fn from_fn<S, F>(shape: &S, mut f: F) -> Result<Self, HiveError>
    where
        S: Shape + ?Sized,
        F: FnMut(Coord) -> Option<T>,
    {
        let layout = Layout::generate(shape, &HiveConfig::default())?;
        let slots = layout
            .coords()
            .map(|coord| Entry::from_value(f(coord), coord))
            .collect();
        Ok(Self::assemble(layout, slots))
    }

    /// Start a [`HiveBuilder`].
    pub fn builder<'s>() -> HiveBuilder<'s, T> {
        HiveBuilder::new()
    }

    fn assemble(layout: Layout, slots: Vec<Entry<T>>) -> Self {
        let hive = Self {
            slots,
            layout,
            instance_id: HiveInstanceId::next(),
        };
        debug!(
            hive = %hive.instance_id,
            slots = hive.len(),
            populated = hive.populated_count(),
            "built hive"
        );
        hive
    }

    pub(crate) fn entry(&self, index: usize) -> Option<&Entry<T>> {
        self.slots.get(index)
    }

    /// Number of slots, populated or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always returns `false`: construction rejects empty shapes.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of populated slots.
    pub fn populated_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|e| matches!(e, Entry::Occupied(_)))
            .count()
    }

    /// Slots in the base row.
    pub fn x0(&self) -> usize {
        self.layout.x0()
    }

    /// Rings along y, base row included.
    pub fn yspan(&self) -> usize {
        self.layout.yspan()
    }

    /// Rings along z, base row included.
    pub fn zspan(&self) -> usize {
        self.layout.zspan()
    }

    /// Slot range of ring `k` along `axis`; ring 0 is the base row.
    pub fn ring_range(&self, axis: RingAxis, k: usize) -> Option<Range<usize>> {
        self.layout.ring_range(axis, k)
    }

    /// The ring offset tables.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Unique identifier of this hive.
    pub fn instance_id(&self) -> HiveInstanceId {
        self.instance_id
    }

    /// Flat index of `(x, y, z)`, or `None` outside the hive.
    ///
    /// Any equivalent triple resolves to the same index.
    pub fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        self.layout.index(Coord::new(x, y, z))
    }

    /// The slot at `(x, y, z)`.
    ///
    /// `None` means no such position; an empty position yields
    /// [`Slot::Sentinel`].
    pub fn get(&self, x: i32, y: i32, z: i32) -> Option<Slot<'_, T>> {
        self.nodes(self.index(x, y, z)?)
    }

    /// The slot at flat index `i`.
    pub fn nodes(&self, i: usize) -> Option<Slot<'_, T>> {
        Slot::at(self, i)
    }

    /// Assign the payload at `(x, y, z)`.
    ///
    /// An empty slot is populated with a new node at the canonical
    /// coordinate. A populated slot keeps its node and only the payload
    /// changes. Fails with [`HiveError::IndexOutOfRange`] if the coordinate
    /// addresses no slot.
    pub fn set(&mut self, x: i32, y: i32, z: i32, value: T) -> Result<(), HiveError> {
        let coord = Coord::new(x, y, z);
        let out_of_range = || HiveError::IndexOutOfRange { coord };
        let canonical = coord.canonical().ok_or_else(out_of_range)?;
        let index = self.layout.index(canonical).ok_or_else(out_of_range)?;
        let entry = self.slots.get_mut(index).ok_or_else(out_of_range)?;
        match entry {
            Entry::Occupied(node) => node.data = value,
            Entry::Vacant => {
                *entry = Entry::from_value(Some(value), canonical);
                trace!(
                    hive = %self.instance_id,
                    index,
                    coord = %canonical,
                    "promoted sentinel slot"
                );
            }
        }
        Ok(())
    }

    /// Mutable payload at `(x, y, z)`, if that slot is populated.
    pub fn data_mut(&mut self, x: i32, y: i32, z: i32) -> Option<&mut T> {
        let index = self.index(x, y, z)?;
        match self.slots.get_mut(index)? {
            Entry::Occupied(node) => Some(&mut node.data),
            Entry::Vacant => None,
        }
    }

    /// Every slot in flat order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Slot<'_, T>> + '_ {
        (0..self.len()).filter_map(move |i| self.nodes(i))
    }

    /// Lazily yield the slots for which `predicate(slot, index)` holds,
    /// scanning forward.
    pub fn find<P>(&self, predicate: P) -> Find<'_, T, P>
    where
        P: FnMut(&Slot<'_, T>, usize) -> bool,
    {
        Find::new(self, predicate)
    }

    /// Like [`find`](Self::find), scanning backward from the last slot.
    pub fn rfind<P>(&self, predicate: P) -> Rev<Find<'_, T, P>>
    where
        P: FnMut(&Slot<'_, T>, usize) -> bool,
    {
        Find::new(self, predicate).rev()
    }

    /// First match scanning forward.
    pub fn find_one<P>(&self, predicate: P) -> Option<Slot<'_, T>>
    where
        P: FnMut(&Slot<'_, T>, usize) -> bool,
    {
        self.find(predicate).next()
    }

    /// First match scanning backward.
    pub fn rfind_one<P>(&self, predicate: P) -> Option<Slot<'_, T>>
    where
        P: FnMut(&Slot<'_, T>, usize) -> bool,
    {
        self.rfind(predicate).next()
    }
}

/// Step-by-step hive construction.
///
/// ```
/// use hive_space::{Hexagon, Hive, HiveConfig, HiveError};
///
/// let hive = Hive::builder()
///     .shape(Hexagon::new(3).unwrap())
///     .values((0..19).map(|i| (i % 2 == 0).then_some(i)))
///     .config(HiveConfig { max_rings: 4, ..HiveConfig::default() })
///     .build()
///     .unwrap();
/// assert_eq!(hive.populated_count(), 10);
///
/// let missing = Hive::<u8>::builder().build();
/// assert_eq!(missing.unwrap_err(), HiveError::MissingShape);
/// ```
pub struct HiveBuilder<'s, T> {
    shape: Option<Box<dyn Shape + 's>>,
    values: Vec<Option<T>>,
    config: HiveConfig,
}

impl<'s, T> HiveBuilder<'s, T> {
    /// An empty builder with default limits and no shape.
    pub fn new() -> Self {
        Self {
            shape: None,
            values: Vec::new(),
            config: HiveConfig::default(),
        }
    }

    /// The outline to walk. Required.
    pub fn shape(mut self, shape: impl Shape + 's) -> Self {
        self.shape = Some(Box::new(shape));
        self
    }

    /// Initial payloads in walk order.
    pub fn values(mut self, values: impl IntoIterator<Item = Option<T>>) -> Self {
        self.values = values.into_iter().collect();
        self
    }

    /// Construction limits.
    pub fn config(mut self, config: HiveConfig) -> Self {
        self.config = config;
        self
    }

    /// Walk the shape and build the hive.
    pub fn build(self) -> Result<Hive<T>, HiveError> {
        let shape = self.shape.ok_or(HiveError::MissingShape)?;
        Hive::with_config(&shape, self.values, &self.config)
    }
}

impl<T> Default for HiveBuilder<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}
