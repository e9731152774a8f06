//! Error types for hive construction and mutation.

use hive_core::{Coord, RingAxis};
use thiserror::Error;

/// Errors arising from hive construction or slot assignment.
///
/// Lookups never produce these: an unknown coordinate is reported as
/// absence. Only construction and [`Hive::set`](crate::Hive::set) fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HiveError {
    /// The builder was finalized without a shape.
    #[error("a shape is required to build a hive")]
    MissingShape,
    /// The shape walk produced zero slots.
    #[error("empty hive: the shape produced no slots")]
    EmptyShape,
    /// `dx` answered a negative slot count for a visited ring.
    #[error("shape returned negative width {width} for ring (y={y}, z={z})")]
    NegativeRingWidth {
        /// Ring offset along y.
        y: u32,
        /// Ring offset along z.
        z: u32,
        /// The offending count.
        width: i64,
    },
    /// `dy` or `dz` kept extending past the configured ring limit.
    #[error("shape extends more than {limit} rings along {axis}")]
    RingLimitExceeded {
        /// Axis that ran away.
        axis: RingAxis,
        /// Configured maximum.
        limit: u32,
    },
    /// The shape produced more slots than the configured maximum.
    #[error("shape produces more than {limit} slots")]
    SlotLimitExceeded {
        /// Configured maximum.
        limit: usize,
    },
    /// A write targeted a coordinate that resolves to no slot.
    #[error("index out of range: {coord} does not address a slot")]
    IndexOutOfRange {
        /// The coordinate as given by the caller.
        coord: Coord,
    },
    /// A [`HiveConfig`](crate::HiveConfig) failed validation.
    #[error("invalid hive config: {reason}")]
    InvalidConfig {
        /// Which invariant was violated.
        reason: String,
    },
}
