//! Hive: irregular hexagonal grids with constant-time neighbour navigation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the hive sub-crates. For most users, adding `hive` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use hive::prelude::*;
//!
//! // Radius-2 hexagon: a column of three, one ring on each side.
//! let shape = Hexagon::new(2).unwrap();
//! let mut hive: Hive<u32> = Hive::new(&shape, [Some(0), Some(1), None]).unwrap();
//!
//! let centre = hive.get(1, 0, 0).and_then(Slot::node).unwrap();
//! assert_eq!(centre.north().and_then(|s| s.data()), Some(&0));
//! assert!(centre.south().unwrap().is_sentinel());
//!
//! hive.set(2, 0, 0, 2).unwrap();
//! let centre = hive.get(1, 0, 0).and_then(Slot::node).unwrap();
//! assert_eq!(centre.south().and_then(|s| s.data()), Some(&2));
//! assert_eq!(centre.walk(&[Direction::North, Direction::North]), None);
//!
//! println!("{}", hive::ascii::render(&hive));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Crate | Contents |
//! |--------|-------|----------|
//! | [`types`] | `hive-core` | `Coord`, `Direction`, `RingAxis`, `HiveInstanceId` |
//! | [`space`] | `hive-space` | `Hive`, `Shape`, `Layout`, `Slot`, `NodeRef`, errors |
//! | [`ascii`] | `hive-ascii` | text rendering |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, directions and identifiers (`hive-core`).
pub mod types {
    pub use hive_core::*;
}

/// Shapes, layouts, slots and navigation (`hive-space`).
pub mod space {
    pub use hive_space::*;
}

/// ASCII rendering (`hive-ascii`).
pub mod ascii {
    pub use hive_ascii::*;
}

/// Common imports for typical usage.
///
/// ```rust
/// use hive::prelude::*;
/// ```
pub mod prelude {
    pub use hive_core::{Coord, Direction, RingAxis};
    pub use hive_space::{
        shape_fn, sentinel, Hexagon, Hive, HiveBuilder, HiveConfig, HiveError, Layout, NodeRef,
        Shape, Slot,
    };
}
