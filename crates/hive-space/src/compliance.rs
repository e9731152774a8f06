//! Hive invariant test helpers.
//!
//! These functions verify that a built hive satisfies the addressing and
//! navigation invariants. Reused by the hive tests for every shape under
//! test.

use crate::hive::Hive;
use crate::slot::Slot;
use hive_core::Direction;
use indexmap::IndexSet;

/// Assert that every slot's canonical coordinate resolves back to it, and
/// that `get` and `nodes` agree on identity.
pub fn assert_index_round_trip<T>(hive: &Hive<T>) {
    for (i, c) in hive.layout().coords().enumerate() {
        assert_eq!(
            hive.index(c.x, c.y, c.z),
            Some(i),
            "index({c}) should resolve to slot {i}"
        );
        assert!(
            hive.get(c.x, c.y, c.z) == hive.nodes(i),
            "get({c}) and nodes({i}) disagree"
        );
    }
}

/// Assert that canonical coordinates are canonical and unique.
pub fn assert_coords_unique<T>(hive: &Hive<T>) {
    let coords: IndexSet<_> = hive.layout().coords().collect();
    assert_eq!(coords.len(), hive.len(), "slot coordinates have duplicates");
    for c in &coords {
        assert!(c.is_canonical(), "stored coordinate {c} is not canonical");
    }
}

/// Assert that `b = a.dir` implies `b.dir.opposite() == a` for populated nodes.
pub fn assert_neighbours_symmetric<T>(hive: &Hive<T>) {
    for slot in hive.iter() {
        let Some(a) = slot.node() else { continue };
        for dir in Direction::ALL {
            if let Some(Slot::Node(b)) = a.neighbour(dir) {
                assert!(
                    b.neighbour(dir.opposite()) == Some(Slot::Node(a)),
                    "neighbour symmetry violated: {} -{dir}-> {} but not back",
                    a.coord(),
                    b.coord()
                );
            }
        }
    }
}

/// Assert that every neighbour a node reports is a slot of the same hive.
pub fn assert_neighbours_in_bounds<T>(hive: &Hive<T>) {
    for slot in hive.iter() {
        let Some(a) = slot.node() else { continue };
        for nb in a.neighbours().into_iter().flatten() {
            if let Slot::Node(b) = nb {
                assert!(std::ptr::eq(b.hive(), hive));
                assert!(b.index() < hive.len());
            }
        }
    }
}

/// Assert that the ring ranges tile `0..len` in walk order.
pub fn assert_rings_tile_slots<T>(hive: &Hive<T>) {
    use hive_core::RingAxis;
    let mut next = 0;
    for (axis, span) in [(RingAxis::Y, hive.yspan()), (RingAxis::Z, hive.zspan())] {
        let first = if axis == RingAxis::Y { 0 } else { 1 };
        for k in first..span {
            let r = hive
                .ring_range(axis, k)
                .unwrap_or_else(|| panic!("missing ring {axis}{k}"));
            assert_eq!(r.start, next, "ring {axis}{k} does not follow the previous ring");
            next = r.end;
        }
    }
    assert_eq!(next, hive.len(), "rings do not cover every slot");
}

/// Run all compliance checks on a hive.
pub fn run_full_compliance<T>(hive: &Hive<T>) {
    assert_index_round_trip(hive);
    assert_coords_unique(hive);
    assert_neighbours_symmetric(hive);
    assert_neighbours_in_bounds(hive);
    assert_rings_tile_slots(hive);
}
