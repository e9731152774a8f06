//! Ring offset tables and coordinate-to-index resolution.
//!
//! A [`Layout`] is produced once per hive by walking its [`Shape`]. It
//! records where every ring starts in the flat slot array and answers
//! [`index`](Layout::index) queries in O(1).
//!
//! Slots are laid out in walk order:
//!
//! ```text
//! [ base row: 0..x0 | y ring 1 | y ring 2 | … | z ring 1 | z ring 2 | … ]
//! ```
//!
//! Each axis table keeps the start of ring `k` at position `k`, and at
//! position 0 the end of that axis' last ring. The y table's bound is taken
//! when the y phase finishes, before any z ring is appended.

use crate::config::HiveConfig;
use crate::error::HiveError;
use crate::shape::Shape;
use hive_core::{Coord, RingAxis};
use std::ops::Range;
use tracing::debug;

/// Start offsets of the rings along one axis.
#[derive(Clone, Debug, PartialEq, Eq)]
struct RingTable {
    /// `starts[0]` is the exclusive end of the last ring; `starts[k]`
    /// for `k >= 1` is the first slot of ring `k`.
    starts: Vec<usize>,
}

impl RingTable {
    fn span(&self) -> usize {
        self.starts.len()
    }

    /// Slot range of ring `k >= 1`.
    fn range(&self, k: usize) -> Option<Range<usize>> {
        if k == 0 {
            return None;
        }
        let start = *self.starts.get(k)?;
        let end = self.starts.get(k + 1).copied().unwrap_or(self.starts[0]);
        Some(start..end)
    }
}

/// Per-ring slot counts and offsets for one hive shape.
///
/// # Examples
///
/// ```
/// use hive_core::{Coord, RingAxis};
/// use hive_space::{HiveConfig, Hexagon, Layout};
///
/// let layout = Layout::generate(&Hexagon::new(2).unwrap(), &HiveConfig::default()).unwrap();
/// assert_eq!(layout.len(), 7);
/// assert_eq!(layout.x0(), 3);
/// assert_eq!(layout.ring_range(RingAxis::Y, 1), Some(3..5));
/// assert_eq!(layout.ring_range(RingAxis::Z, 1), Some(5..7));
///
/// // Northwest of the centre, written non-canonically.
/// assert_eq!(layout.index(Coord::new(1, 0, -1)), Some(3));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    x0: usize,
    y: RingTable,
    z: RingTable,
}

impl Layout {
    /// Walk `shape` once and record its ring offsets.
    ///
    /// The walk order is fixed: `dx(0, 0)`, then `dy(0), dy(1), …` until the
    /// first `false`, each `true` appending `dx(y, 0)` for the new ring, then
    /// the same along z. Fails if a width is negative, a limit in `config`
    /// is exceeded, or the shape produces no slots at all.
    pub fn generate<S: Shape + ?Sized>(shape: &S, config: &HiveConfig) -> Result<Self, HiveError> {
        config.validate()?;
        // Every ring width has to fit an i32 x coordinate.
        let max_slots = config.max_slots.min(i32::MAX as usize);
        let grow = |total: usize, y: u32, z: u32| -> Result<usize, HiveError> {
            let width = shape.dx(y, z);
            let width =
                usize::try_from(width).map_err(|_| HiveError::NegativeRingWidth { y, z, width })?;
            total
                .checked_add(width)
                .filter(|&t| t <= max_slots)
                .ok_or(HiveError::SlotLimitExceeded {
                    limit: config.max_slots,
                })
        };

        let mut total = grow(0, 0, 0)?;
        let x0 = total;

        let mut y_starts = vec![0];
        let mut y = 0u32;
        while shape.dy(y) {
            if y >= config.max_rings {
                return Err(HiveError::RingLimitExceeded {
                    axis: RingAxis::Y,
                    limit: config.max_rings,
                });
            }
            y += 1;
            y_starts.push(total);
            total = grow(total, y, 0)?;
        }
        y_starts[0] = total;

        let mut z_starts = vec![0];
        let mut z = 0u32;
        while shape.dz(z) {
            if z >= config.max_rings {
                return Err(HiveError::RingLimitExceeded {
                    axis: RingAxis::Z,
                    limit: config.max_rings,
                });
            }
            z += 1;
            z_starts.push(total);
            total = grow(total, 0, z)?;
        }
        z_starts[0] = total;

        if total == 0 {
            return Err(HiveError::EmptyShape);
        }

        let layout = Self {
            x0,
            y: RingTable { starts: y_starts },
            z: RingTable { starts: z_starts },
        };
        debug!(
            x0,
            yspan = layout.yspan(),
            zspan = layout.zspan(),
            slots = total,
            "generated hive layout"
        );
        Ok(layout)
    }

    /// Total number of slots.
    pub fn len(&self) -> usize {
        self.z.starts[0]
    }

    /// Always returns `false`: generation rejects empty shapes.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of slots in the base row.
    pub fn x0(&self) -> usize {
        self.x0
    }

    /// Rings along y, base row included. Always at least 1.
    pub fn yspan(&self) -> usize {
        self.y.span()
    }

    /// Rings along z, base row included. Always at least 1.
    pub fn zspan(&self) -> usize {
        self.z.span()
    }

    /// Slot range of ring `k` along `axis`; ring 0 is the base row.
    pub fn ring_range(&self, axis: RingAxis, k: usize) -> Option<Range<usize>> {
        if k == 0 {
            return Some(0..self.x0);
        }
        match axis {
            RingAxis::Y => self.y.range(k),
            RingAxis::Z => self.z.range(k),
        }
    }

    /// Resolve any coordinate to its slot index.
    ///
    /// The coordinate is folded to canonical form first, so every
    /// equivalent triple resolves to the same index. Returns `None` if the
    /// position lies outside the shape: a negative `x`, a ring that was
    /// never generated, or an `x` past the end of its ring.
    pub fn index(&self, coord: Coord) -> Option<usize> {
        let c = coord.canonical()?;
        let x = usize::try_from(c.x).ok()?;
        let ring = match c.ring() {
            None => 0..self.x0,
            Some((axis, k)) => self.ring_range(axis, k as usize)?,
        };
        let i = ring.start.checked_add(x)?;
        (i < ring.end).then_some(i)
    }

    /// Canonical coordinate of slot `index`.
    pub fn coord_at(&self, index: usize) -> Option<Coord> {
        if index >= self.len() {
            return None;
        }
        if index < self.x0 {
            return Some(Coord::new(index as i32, 0, 0));
        }
        let (axis, table) = if index < self.y.starts[0] {
            (RingAxis::Y, &self.y)
        } else {
            (RingAxis::Z, &self.z)
        };
        // Rings are appended in order, so the owning ring is the last
        // start at or before `index`.
        let k = table.starts[1..].partition_point(|&s| s <= index);
        let x = (index - table.starts[k]) as i32;
        Some(match axis {
            RingAxis::Y => Coord::new(x, k as i32, 0),
            RingAxis::Z => Coord::new(x, 0, k as i32),
        })
    }

    /// Canonical coordinates of every slot, in walk order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let base = (0..self.x0).map(|x| Coord::new(x as i32, 0, 0));
        let y = (1..self.yspan()).flat_map(move |k| {
            self.y
                .range(k)
                .into_iter()
                .flat_map(move |r| (0..r.len()).map(move |x| Coord::new(x as i32, k as i32, 0)))
        });
        let z = (1..self.zspan()).flat_map(move |k| {
            self.z
                .range(k)
                .into_iter()
                .flat_map(move |r| (0..r.len()).map(move |x| Coord::new(x as i32, 0, k as i32)))
        });
        base.chain(y).chain(z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{shape_fn, Hexagon};
    use proptest::prelude::*;
    use std::cell::RefCell;

    fn hexagon(radius: u32) -> Layout {
        Layout::generate(&Hexagon::new(radius).unwrap(), &HiveConfig::default()).unwrap()
    }

    // ── Generation ──────────────────────────────────────────────

    #[test]
    fn radius_two_tables() {
        let l = hexagon(2);
        assert_eq!(l.x0(), 3);
        assert_eq!(l.len(), 7);
        assert_eq!(l.y.starts, vec![5, 3]);
        assert_eq!(l.z.starts, vec![7, 5]);
        assert_eq!(l.yspan(), 2);
        assert_eq!(l.zspan(), 2);
    }

    #[test]
    fn radius_three_tables() {
        let l = hexagon(3);
        assert_eq!(l.x0(), 5);
        assert_eq!(l.y.starts, vec![12, 5, 9]);
        assert_eq!(l.z.starts, vec![19, 12, 16]);
    }

    #[test]
    fn single_slot_has_no_rings() {
        let l = hexagon(1);
        assert_eq!(l.len(), 1);
        assert_eq!(l.yspan(), 1);
        assert_eq!(l.zspan(), 1);
        assert_eq!(l.index(Coord::ORIGIN), Some(0));
        assert_eq!(l.index(Coord::new(0, 1, 0)), None);
    }

    #[test]
    fn walk_order_is_fixed() {
        let calls = RefCell::new(Vec::new());
        let shape = shape_fn(
            |y, z| {
                calls.borrow_mut().push(format!("dx({y},{z})"));
                2
            },
            |y| {
                calls.borrow_mut().push(format!("dy({y})"));
                y < 1
            },
            |z| {
                calls.borrow_mut().push(format!("dz({z})"));
                z < 2
            },
        );
        Layout::generate(&shape, &HiveConfig::default()).unwrap();
        assert_eq!(
            calls.into_inner(),
            vec![
                "dx(0,0)", "dy(0)", "dx(1,0)", "dy(1)", "dz(0)", "dx(0,1)", "dz(1)", "dx(0,2)",
                "dz(2)",
            ]
        );
    }

    #[test]
    fn empty_shape_rejected() {
        let shape = shape_fn(|_, _| 0, |_| false, |_| false);
        assert_eq!(
            Layout::generate(&shape, &HiveConfig::default()),
            Err(HiveError::EmptyShape)
        );
    }

    #[test]
    fn empty_base_row_with_rings_is_valid() {
        let shape = shape_fn(|y, _| if y == 0 { 0 } else { 2 }, |y| y < 1, |_| false);
        let l = Layout::generate(&shape, &HiveConfig::default()).unwrap();
        assert_eq!(l.x0(), 0);
        assert_eq!(l.len(), 2);
        assert_eq!(l.index(Coord::ORIGIN), None);
        assert_eq!(l.index(Coord::new(1, 1, 0)), Some(1));
    }

    #[test]
    fn negative_width_rejected() {
        let shape = shape_fn(|y, _| if y == 1 { -3 } else { 1 }, |y| y < 1, |_| false);
        assert_eq!(
            Layout::generate(&shape, &HiveConfig::default()),
            Err(HiveError::NegativeRingWidth {
                y: 1,
                z: 0,
                width: -3
            })
        );
    }

    #[test]
    fn runaway_ring_axis_rejected() {
        let shape = shape_fn(|_, _| 1, |_| false, |_| true);
        let config = HiveConfig {
            max_rings: 8,
            ..HiveConfig::default()
        };
        assert_eq!(
            Layout::generate(&shape, &config),
            Err(HiveError::RingLimitExceeded {
                axis: RingAxis::Z,
                limit: 8
            })
        );
    }

    #[test]
    fn ring_limit_is_inclusive() {
        let shape = shape_fn(|_, _| 1, |y| y < 8, |_| false);
        let config = HiveConfig {
            max_rings: 8,
            ..HiveConfig::default()
        };
        assert_eq!(Layout::generate(&shape, &config).unwrap().yspan(), 9);
    }

    #[test]
    fn slot_limit_rejected() {
        let config = HiveConfig {
            max_slots: 10,
            ..HiveConfig::default()
        };
        assert_eq!(
            Layout::generate(&Hexagon::new(3).unwrap(), &config),
            Err(HiveError::SlotLimitExceeded { limit: 10 })
        );
    }

    #[test]
    fn invalid_config_rejected_before_walking() {
        let config = HiveConfig {
            max_slots: 0,
            ..HiveConfig::default()
        };
        let shape = shape_fn(|_, _| panic!("walked"), |_| false, |_| false);
        assert!(matches!(
            Layout::generate(&shape, &config),
            Err(HiveError::InvalidConfig { .. })
        ));
    }

    // ── Index resolution ────────────────────────────────────────

    #[test]
    fn index_radius_two_canonical() {
        let l = hexagon(2);
        assert_eq!(l.index(Coord::new(0, 0, 0)), Some(0));
        assert_eq!(l.index(Coord::new(2, 0, 0)), Some(2));
        assert_eq!(l.index(Coord::new(0, 1, 0)), Some(3));
        assert_eq!(l.index(Coord::new(1, 1, 0)), Some(4));
        assert_eq!(l.index(Coord::new(0, 0, 1)), Some(5));
        assert_eq!(l.index(Coord::new(1, 0, 1)), Some(6));
    }

    #[test]
    fn index_out_of_range() {
        let l = hexagon(2);
        assert_eq!(l.index(Coord::new(-1, 0, 0)), None);
        assert_eq!(l.index(Coord::new(3, 0, 0)), None);
        assert_eq!(l.index(Coord::new(0, 2, 0)), None);
        assert_eq!(l.index(Coord::new(0, 0, 2)), None);
        assert_eq!(l.index(Coord::new(-1, 0, 1)), None);
    }

    #[test]
    fn x_offset_never_spills_into_next_ring() {
        let l = hexagon(3);
        // y ring 1 holds 4 slots (5..9); x = 4 would be ring 2's first slot.
        assert_eq!(l.index(Coord::new(3, 1, 0)), Some(8));
        assert_eq!(l.index(Coord::new(4, 1, 0)), None);
        // Last y ring does not reach into the z rings.
        assert_eq!(l.index(Coord::new(2, 2, 0)), Some(11));
        assert_eq!(l.index(Coord::new(3, 2, 0)), None);
        assert_eq!(l.index(Coord::new(3, 0, 2)), None);
    }

    #[test]
    fn index_folds_non_canonical() {
        let l = hexagon(3);
        // (3, -1, 0) ≡ (2, 0, 1)
        assert_eq!(l.index(Coord::new(3, -1, 0)), l.index(Coord::new(2, 0, 1)));
        // (0, 2, 1) ≡ (1, 1, 0)
        assert_eq!(l.index(Coord::new(0, 2, 1)), Some(6));
        assert_eq!(l.index(Coord::new(i32::MAX, 1, 1)), None);
    }

    #[test]
    fn ring_ranges() {
        let l = hexagon(3);
        assert_eq!(l.ring_range(RingAxis::Y, 0), Some(0..5));
        assert_eq!(l.ring_range(RingAxis::Y, 2), Some(9..12));
        assert_eq!(l.ring_range(RingAxis::Z, 2), Some(16..19));
        assert_eq!(l.ring_range(RingAxis::Z, 3), None);
    }

    #[test]
    fn coords_follow_walk_order() {
        let l = hexagon(2);
        let coords: Vec<_> = l.coords().collect();
        assert_eq!(
            coords,
            vec![
                Coord::new(0, 0, 0),
                Coord::new(1, 0, 0),
                Coord::new(2, 0, 0),
                Coord::new(0, 1, 0),
                Coord::new(1, 1, 0),
                Coord::new(0, 0, 1),
                Coord::new(1, 0, 1),
            ]
        );
    }

    #[test]
    fn coord_at_inverts_index() {
        let l = hexagon(4);
        for (i, c) in l.coords().enumerate() {
            assert_eq!(l.coord_at(i), Some(c));
            assert_eq!(l.index(c), Some(i));
        }
        assert_eq!(l.coord_at(l.len()), None);
    }

    proptest! {
        #[test]
        fn equivalent_triples_resolve_identically(
            radius in 1u32..6,
            x in -8i32..8, y in -8i32..8, z in -8i32..8, k in -8i32..8,
        ) {
            let l = hexagon(radius);
            prop_assert_eq!(
                l.index(Coord::new(x, y, z)),
                l.index(Coord::new(x + k, y - k, z - k))
            );
        }

        #[test]
        fn resolved_indices_are_in_bounds_and_round_trip(
            radius in 1u32..6,
            x in -8i32..8, y in -8i32..8, z in -8i32..8,
        ) {
            let l = hexagon(radius);
            if let Some(i) = l.index(Coord::new(x, y, z)) {
                prop_assert!(i < l.len());
                prop_assert_eq!(l.coord_at(i), Coord::new(x, y, z).canonical());
            }
        }
    }
}
