//! Build a labelled hexagon, navigate it, and print it.
//!
//! Run with:
//!   RUST_LOG=debug cargo run -p hive --example radius -- 3

use hive::ascii::render;
use hive::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), HiveError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let radius = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2);
    let shape = Hexagon::new(radius)?;

    // Label every other cell; the rest start empty.
    let mut hive = Hive::from_fn(&shape, |c| {
        ((c.x + c.y + c.z) % 2 == 0).then(|| c.to_string())
    })?;
    println!("{}\n", render(&hive));

    let holes: Vec<Coord> = hive
        .layout()
        .coords()
        .filter(|c| hive.get(c.x, c.y, c.z).is_some_and(|s| s.is_sentinel()))
        .collect();
    for c in &holes {
        hive.set(c.x, c.y, c.z, "*".to_owned())?;
    }
    println!("{}\n", render(&hive));

    let centre = hive
        .get(radius as i32 - 1, 0, 0)
        .and_then(Slot::node)
        .ok_or(HiveError::IndexOutOfRange {
            coord: Coord::new(radius as i32 - 1, 0, 0),
        })?;
    for dir in Direction::ALL {
        let label = match centre.neighbour(dir) {
            Some(Slot::Node(n)) => n.data().clone(),
            Some(Slot::Sentinel(_)) => "(empty)".to_owned(),
            None => "(edge)".to_owned(),
        };
        println!("{dir:>2}: {label}");
    }
    Ok(())
}
