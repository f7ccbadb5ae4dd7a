//! Index a handful of colored vertical lines and look them up from each side
//! of the origin.
//!
//! ```bash
//! RUST_LOG=quadtree64=trace cargo run --example search_lines
//! ```

use quadtree64::prelude::*;
use tracing_subscriber::EnvFilter;

type Rgba = [u8; 4];

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut tree = QuadTree::new(i64::MIN, i64::MAX, i64::MIN, i64::MAX, 400)?;
    for x in 1..=5_u8 {
        let color: Rgba = [x * 40, 0, 255 - x * 40, 255];
        tree.insert(LineSegment::new(i64::from(x), 10, i64::from(x), -10, color))?;
    }

    let halves = [
        ("left", Rectangle::from_bounds(i64::MIN, 0, i64::MIN, i64::MAX)?, 0),
        ("top", Rectangle::from_bounds(i64::MIN, i64::MAX, 0, i64::MAX)?, 5),
        ("bottom", Rectangle::from_bounds(i64::MIN, i64::MAX, i64::MIN, 0)?, 5),
        ("right", Rectangle::from_bounds(0, i64::MAX, i64::MIN, i64::MAX)?, 5),
    ];
    for (name, area, expected) in halves {
        let found = tree.search(&area);
        println!("{name:>6} half: {} lines", found.len());
        for line in found.values() {
            println!("         {line}");
        }
        assert_eq!(found.len(), expected, "{name} half");
    }

    println!("{tree:?}");
    Ok(())
}
