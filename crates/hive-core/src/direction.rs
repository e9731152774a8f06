//! The six hexagonal navigation directions.

use std::fmt;

/// A step from one slot to an adjacent one.
///
/// `x` grows southward along a ring, so north and south move along `x`.
/// The four diagonal directions move one ring along `y` or `z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// `(x - 1, y, z)`
    North,
    /// `(x + 1, y, z)`
    South,
    /// `(x, y, z - 1)`
    NorthWest,
    /// `(x, y, z + 1)`
    SouthEast,
    /// `(x, y - 1, z)`
    NorthEast,
    /// `(x, y + 1, z)`
    SouthWest,
}

impl Direction {
    /// All six directions, clockwise from north.
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// Coordinate delta `(dx, dy, dz)` applied by one step.
    pub const fn delta(self) -> (i32, i32, i32) {
        match self {
            Self::North => (-1, 0, 0),
            Self::South => (1, 0, 0),
            Self::NorthWest => (0, 0, -1),
            Self::SouthEast => (0, 0, 1),
            Self::NorthEast => (0, -1, 0),
            Self::SouthWest => (0, 1, 0),
        }
    }

    /// The direction pointing back.
    pub const fn opposite(self) -> Direction {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::NorthWest => Self::SouthEast,
            Self::SouthEast => Self::NorthWest,
            Self::NorthEast => Self::SouthWest,
            Self::SouthWest => Self::NorthEast,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "n",
            Self::South => "s",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::NorthEast => "ne",
            Self::SouthWest => "sw",
        };
        f.pad(name)
    }
}
