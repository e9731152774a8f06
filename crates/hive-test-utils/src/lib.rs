//! Test fixtures for hive development.
//!
//! Provides the standard radius-N hexagon ([`stdhive`]) and the two
//! reference scenarios used across the integration tests:
//!
//! - [`labelled_radius2`]: seven labelled cells around a centre.
//! - [`sparse_radius3`]: a radius-3 hive with twelve populated cells.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    hexagon_size, labelled_radius2, sparse_radius3, stdhive, SPARSE_FILL, SPARSE_RADIUS3_SHARDS,
};
