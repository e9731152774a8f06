//! Core types for hive hexagonal grids.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! three-axis [`Coord`] with its canonical fold, the six navigation
//! [`Direction`]s, the two ring axes, and per-instance hive identifiers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod direction;
pub mod id;

pub use coord::{Coord, RingAxis};
pub use direction::Direction;
pub use id::HiveInstanceId;
