//! The three-axis hive coordinate and its canonical fold.

use crate::direction::Direction;
use std::fmt;

/// One of the two skew axes along which rings extend the base row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RingAxis {
    /// Rings appended while `dy` answers `true`.
    Y,
    /// Rings appended while `dz` answers `true`.
    Z,
}

impl fmt::Display for RingAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Y => write!(f, "y"),
            Self::Z => write!(f, "z"),
        }
    }
}

/// A position in a hive, addressed along three axes.
///
/// `x` runs along a ring, `y` and `z` pick the ring. Many triples name the
/// same position: moving one step along both `y` and `z` is the same as
/// moving one step along `x`, so `(x, y, z)` and `(x + 1, y - 1, z - 1)` are
/// equivalent. [`canonical`](Self::canonical) picks the unique representative
/// with at most one of `y`, `z` nonzero and `y + z >= 0`.
///
/// # Examples
///
/// ```
/// use hive_core::Coord;
///
/// let c = Coord::new(1, 0, -1);
/// assert!(!c.is_canonical());
/// assert_eq!(c.canonical(), Some(Coord::new(0, 1, 0)));
///
/// // Both skew axes set: transfer the smaller one into x.
/// assert_eq!(Coord::new(0, 3, 1).canonical(), Some(Coord::new(1, 2, 0)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Offset along the ring.
    pub x: i32,
    /// Ring index along the y axis.
    pub y: i32,
    /// Ring index along the z axis.
    pub z: i32,
}

impl Coord {
    /// The origin, first slot of the base row.
    pub const ORIGIN: Coord = Coord { x: 0, y: 0, z: 0 };

    /// Create a coordinate from its three components.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// `true` if at most one of `y`, `z` is nonzero and `y + z >= 0`.
    pub fn is_canonical(&self) -> bool {
        (self.y == 0 || self.z == 0) && i64::from(self.y) + i64::from(self.z) >= 0
    }

    /// Fold an arbitrary triple onto its canonical representative.
    ///
    /// A single fold transfers the smaller of `y`, `z` into `x` and
    /// subtracts it from both, which always lands on a canonical triple.
    /// Returns `None` if the fold overflows `i32`; such a triple cannot
    /// address any slot.
    pub fn canonical(self) -> Option<Coord> {
        if self.is_canonical() {
            return Some(self);
        }
        let Coord { x, y, z } = self;
        if y > z {
            Some(Coord::new(x.checked_add(z)?, y.checked_sub(z)?, 0))
        } else {
            Some(Coord::new(x.checked_add(y)?, 0, z.checked_sub(y)?))
        }
    }

    /// The ring this coordinate lies on, or `None` for the base row.
    ///
    /// Only meaningful on canonical coordinates, where at most one of the
    /// two ring components is nonzero and neither is negative.
    pub fn ring(&self) -> Option<(RingAxis, u32)> {
        if self.y > 0 {
            Some((RingAxis::Y, self.y.unsigned_abs()))
        } else if self.z > 0 {
            Some((RingAxis::Z, self.z.unsigned_abs()))
        } else {
            None
        }
    }

    /// The raw (not yet canonical) neighbour one step in `dir`.
    ///
    /// Returns `None` on `i32` overflow.
    pub fn step(self, dir: Direction) -> Option<Coord> {
        let (dx, dy, dz) = dir.delta();
        Some(Coord::new(
            self.x.checked_add(dx)?,
            self.y.checked_add(dy)?,
            self.z.checked_add(dz)?,
        ))
    }
}

impl From<(i32, i32, i32)> for Coord {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Coord> for (i32, i32, i32) {
    fn from(c: Coord) -> Self {
        (c.x, c.y, c.z)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
