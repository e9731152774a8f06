//! The shape protocol: how a caller describes a hive's outline.
//!
//! A [`Shape`] answers three questions while the hive is walked once at
//! construction time:
//!
//! 1. `dx(0, 0)`: how many slots in the base row.
//! 2. `dy(y)` for `y = 0, 1, 2, …`: extend to ring `y + 1` along y? Each
//!    `true` appends `dx(y + 1, 0)` slots. The first `false` ends the phase.
//! 3. `dz(z)` likewise along z, appending `dx(0, z + 1)` slots.
//!
//! The walk itself lives in [`Layout::generate`](crate::Layout::generate).

use crate::error::HiveError;

/// Outline of a hive, queried in a fixed traversal order.
///
/// Any type with the three operations qualifies; closures can be adapted
/// with [`shape_fn`].
pub trait Shape {
    /// Number of slots on the ring at `(y, z)`. Must not be negative.
    fn dx(&self, y: u32, z: u32) -> i64;

    /// Whether the y phase continues past ring `y`.
    fn dy(&self, y: u32) -> bool;

    /// Whether the z phase continues past ring `z`.
    fn dz(&self, z: u32) -> bool;
}

impl<S: Shape + ?Sized> Shape for &S {
    fn dx(&self, y: u32, z: u32) -> i64 {
        (**self).dx(y, z)
    }

    fn dy(&self, y: u32) -> bool {
        (**self).dy(y)
    }

    fn dz(&self, z: u32) -> bool {
        (**self).dz(z)
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn dx(&self, y: u32, z: u32) -> i64 {
        (**self).dx(y, z)
    }

    fn dy(&self, y: u32) -> bool {
        (**self).dy(y)
    }

    fn dz(&self, z: u32) -> bool {
        (**self).dz(z)
    }
}

/// A regular hexagon with `radius` cells from the centre to each edge,
/// centre included.
///
/// The base row is the central column of `2r - 1` cells; every ring
/// outward along either skew axis is one cell shorter.
///
/// # Examples
///
/// ```
/// use hive_space::{Hexagon, Hive};
///
/// let hex = Hexagon::new(2).unwrap();
/// assert_eq!(hex.slot_count(), 7);
///
/// let hive: Hive<u8> = Hive::new(&hex, (0..7).map(Some)).unwrap();
/// assert_eq!(hive.len(), 7);
/// assert_eq!(hive.x0(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hexagon {
    radius: u32,
}

impl Hexagon {
    /// Largest radius whose slot count is representable on 32-bit targets.
    pub const MAX_RADIUS: u32 = 1 << 14;

    /// Create a hexagon outline.
    ///
    /// Returns `Err(HiveError::EmptyShape)` for radius 0 and
    /// `Err(HiveError::InvalidConfig)` above [`MAX_RADIUS`](Self::MAX_RADIUS).
    pub fn new(radius: u32) -> Result<Self, HiveError> {
        if radius == 0 {
            return Err(HiveError::EmptyShape);
        }
        if radius > Self::MAX_RADIUS {
            return Err(HiveError::InvalidConfig {
                reason: format!("hexagon radius {radius} exceeds {}", Self::MAX_RADIUS),
            });
        }
        Ok(Self { radius })
    }

    /// Cells from the centre to an edge, centre included.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Total slots: `3r(r - 1) + 1`.
    pub fn slot_count(&self) -> usize {
        let r = self.radius as usize;
        3 * r * (r - 1) + 1
    }
}

impl Shape for Hexagon {
    fn dx(&self, y: u32, z: u32) -> i64 {
        2 * i64::from(self.radius) - 1 - i64::from(y) - i64::from(z)
    }

    fn dy(&self, y: u32) -> bool {
        y < self.radius - 1
    }

    fn dz(&self, z: u32) -> bool {
        z < self.radius - 1
    }
}

/// A [`Shape`] assembled from three closures. See [`shape_fn`].
#[derive(Clone, Copy)]
pub struct FnShape<DX, DY, DZ> {
    dx: DX,
    dy: DY,
    dz: DZ,
}

/// Build a [`Shape`] from three closures.
///
/// ```
/// use hive_space::{shape_fn, Hive};
///
/// // A single row of four slots, no rings.
/// let row = shape_fn(|_, _| 4, |_| false, |_| false);
/// let hive: Hive<char> = Hive::new(&row, "abcd".chars().map(Some)).unwrap();
/// assert_eq!(hive.yspan(), 1);
/// assert_eq!(hive.zspan(), 1);
/// assert_eq!(hive.index(3, 0, 0), Some(3));
/// assert_eq!(hive.index(4, 0, 0), None);
/// ```
pub fn shape_fn<DX, DY, DZ>(dx: DX, dy: DY, dz: DZ) -> FnShape<DX, DY, DZ>
where
    DX: Fn(u32, u32) -> i64,
    DY: Fn(u32) -> bool,
    DZ: Fn(u32) -> bool,
{
    FnShape { dx, dy, dz }
}

impl<DX, DY, DZ> Shape for FnShape<DX, DY, DZ>
where
    DX: Fn(u32, u32) -> i64,
    DY: Fn(u32) -> bool,
    DZ: Fn(u32) -> bool,
{
    fn dx(&self, y: u32, z: u32) -> i64 {
        (self.dx)(y, z)
    }

    fn dy(&self, y: u32) -> bool {
        (self.dy)(y)
    }

    fn dz(&self, z: u32) -> bool {
        (self.dz)(z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hexagon_radius_zero_is_empty() {
        assert_eq!(Hexagon::new(0), Err(HiveError::EmptyShape));
    }

    #[test]
    fn hexagon_rejects_huge_radius() {
        assert!(matches!(
            Hexagon::new(Hexagon::MAX_RADIUS + 1),
            Err(HiveError::InvalidConfig { .. })
        ));
        assert!(Hexagon::new(Hexagon::MAX_RADIUS).is_ok());
    }

    #[test]
    fn hexagon_ring_widths_shrink_outward() {
        let h = Hexagon::new(3).unwrap();
        assert_eq!(h.dx(0, 0), 5);
        assert_eq!(h.dx(1, 0), 4);
        assert_eq!(h.dx(2, 0), 3);
        assert_eq!(h.dx(0, 2), 3);
        assert!(h.dy(1));
        assert!(!h.dy(2));
        assert!(!h.dz(2));
    }

    #[test]
    fn hexagon_slot_counts() {
        assert_eq!(Hexagon::new(1).unwrap().slot_count(), 1);
        assert_eq!(Hexagon::new(2).unwrap().slot_count(), 7);
        assert_eq!(Hexagon::new(3).unwrap().slot_count(), 19);
    }

    #[test]
    fn boxed_and_borrowed_shapes_delegate() {
        let h = Hexagon::new(2).unwrap();
        let boxed: Box<dyn Shape> = Box::new(h);
        let borrowed: &dyn Shape = &h;
        assert_eq!(boxed.dx(1, 0), 2);
        assert_eq!(borrowed.dx(0, 1), 2);
        assert!(boxed.dy(0));
        assert!(!borrowed.dz(1));
    }
}
