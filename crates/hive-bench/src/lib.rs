//! Benchmark profiles for hive grids.
//!
//! - [`reference_hive`]: radius-58 hexagon (~10K slots), fully populated
//! - [`sparse_hive`]: the same outline with every third slot empty
//! - [`probe_coords`]: deterministic coordinates, many non-canonical or outside

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use hive_core::Coord;
use hive_space::{Hexagon, Hive, HiveError};

/// Radius of the reference profile: `3 * 58 * 57 + 1 = 9919` slots.
pub const REFERENCE_RADIUS: u32 = 58;

/// Fully populated reference hexagon; each payload is its flat index.
pub fn reference_hive() -> Result<Hive<u64>, HiveError> {
    let shape = Hexagon::new(REFERENCE_RADIUS)?;
    let n = shape.slot_count() as u64;
    Hive::new(&shape, (0..n).map(Some))
}

/// Reference outline with every third slot left empty.
pub fn sparse_hive() -> Result<Hive<u64>, HiveError> {
    let shape = Hexagon::new(REFERENCE_RADIUS)?;
    let n = shape.slot_count() as u64;
    Hive::new(&shape, (0..n).map(|i| (i % 3 != 0).then_some(i)))
}

/// `count` deterministic probe coordinates spread over and around the
/// reference hexagon, in both canonical and folded forms.
pub fn probe_coords(count: usize) -> Vec<Coord> {
    let span = 2 * REFERENCE_RADIUS as u64;
    let half = REFERENCE_RADIUS as i32 / 2;
    (0..count as u64)
        .map(|i| {
            let x = (i.wrapping_mul(6364136223846793007) % (span + 8)) as i32 - 4;
            let y = (i.wrapping_mul(1442695040888963407) % span) as i32 - half;
            let z = (i.wrapping_mul(2862933555777941757) % span) as i32 - half;
            Coord::new(x, y, z)
        })
        .collect()
}
