//! Irregular hexagonal grids over a flat slot array.
//!
//! A [`Hive`] is built once from a [`Shape`]: a base row plus rings grown
//! along two skew axes. Every slot sits at a fixed index in one flat array,
//! and any `(x, y, z)` triple resolves to that index in O(1) through the
//! ring offset tables in [`Layout`].
//!
//! # Lookups
//!
//! Lookups distinguish three outcomes: `None` (no such position),
//! [`Slot::Sentinel`] (a valid position without a node, always the shared
//! [`SENTINEL`]), and [`Slot::Node`] (a populated node). From a node,
//! [`NodeRef`] navigates to the six neighbours.
//!
//! # Mutation
//!
//! The shape never changes after construction. [`Hive::set`] either
//! updates a node's payload in place or populates an empty slot.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod find;
pub mod hive;
pub mod layout;
pub mod node;
pub mod shape;
pub mod slot;

#[cfg(test)]
pub(crate) mod compliance;

pub use config::HiveConfig;
pub use error::HiveError;
pub use find::Find;
pub use hive::{Hive, HiveBuilder};
pub use layout::Layout;
pub use node::NodeRef;
pub use shape::{shape_fn, FnShape, Hexagon, Shape};
pub use slot::{sentinel, Sentinel, Slot, SENTINEL};
