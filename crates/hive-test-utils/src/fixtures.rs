//! Reusable hive fixtures.

use hive_space::{Hexagon, Hive};

/// Slot count of a hexagon with `radius` cells per edge: `3r(r - 1) + 1`.
pub fn hexagon_size(radius: u32) -> usize {
    let r = radius as usize;
    3 * r * (r - 1) + 1
}

/// A regular hexagon filled from `data` in walk order.
///
/// # Panics
///
/// If `data.len()` does not match [`hexagon_size`] or `radius` is 0.
pub fn stdhive<T>(radius: u32, data: Vec<Option<T>>) -> Hive<T> {
    assert_eq!(
        data.len(),
        hexagon_size(radius),
        "data size does not fit the expectation"
    );
    let shape = Hexagon::new(radius).expect("radius must be at least 1");
    Hive::new(&shape, data).expect("hexagon shapes are never empty")
}

/// Radius-2 hive labelled by position relative to the centre `(1, 0, 0)`.
///
/// Walk order: base row (north, centre, south), y ring (north west,
/// south west), z ring (north east, south east).
pub fn labelled_radius2() -> Hive<&'static str> {
    let labels = [
        "north 0",
        "center 1",
        "south 2",
        "north west 3",
        "south west 4",
        "north east 5",
        "south east 6",
    ];
    stdhive(2, labels.map(Some).to_vec())
}

/// Flat indices populated by [`sparse_radius3`].
pub const SPARSE_RADIUS3_SHARDS: [usize; 12] = [0, 1, 12, 16, 4, 14, 15, 18, 9, 10, 11, 7];

/// Payload of every populated cell in [`sparse_radius3`].
pub const SPARSE_FILL: &str = "########";

/// Radius-3 hive (19 slots) with only [`SPARSE_RADIUS3_SHARDS`] populated.
pub fn sparse_radius3() -> Hive<String> {
    let mut data = vec![None; hexagon_size(3)];
    for shard in SPARSE_RADIUS3_SHARDS {
        data[shard] = Some(SPARSE_FILL.to_owned());
    }
    stdhive(3, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(hexagon_size(1), 1);
        assert_eq!(hexagon_size(2), 7);
        assert_eq!(hexagon_size(3), 19);
    }

    #[test]
    fn sparse_population() {
        let hive = sparse_radius3();
        assert_eq!(hive.len(), 19);
        assert_eq!(hive.populated_count(), SPARSE_RADIUS3_SHARDS.len());
    }

    #[test]
    #[should_panic(expected = "data size does not fit")]
    fn stdhive_checks_size() {
        stdhive(2, vec![Some(1); 3]);
    }
}
