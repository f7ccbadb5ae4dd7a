//! Insert a million random points and short segments, then run one large
//! search. Designed to be used with low-level profilers like `samply`:
//!
//! ```bash
//! samply record cargo run --release --example perf
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use quadtree64::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

const RECORDS: u32 = 1_000_000;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut rng = StdRng::seed_from_u64(12345);

    let stores = Rc::new(Cell::new(0_u64));
    let deepest = Rc::new(Cell::new(0_u8));
    let mut tree: QuadTree<Shape> = QuadTree::new(0, i64::MAX, 0, i64::MAX, 400)?;
    {
        let (stores, deepest) = (Rc::clone(&stores), Rc::clone(&deepest));
        tree.set_observer(move |e: &StoreEvent| {
            stores.set(stores.get() + 1);
            deepest.set(deepest.get().max(e.depth));
        });
    }

    let start = Instant::now();
    for i in 0..RECORDS {
        let color: [u8; 4] = rng.random();
        let (x1, y1) = (rng.random_range(0..i64::MAX), rng.random_range(0..i64::MAX));
        if i % 2 == 0 {
            tree.insert(Shape::Point(Point::new(x1, y1, color)))?;
        } else {
            let x2 = (x1 - rng.random_range(0..1000)).max(0);
            let y2 = (y1 - rng.random_range(0..1000)).max(0);
            tree.insert(Shape::Segment(LineSegment::new(x1, y1, x2, y2, color)))?;
        }
    }
    let elapsed = start.elapsed();
    println!(
        "Inserted {RECORDS} records in {:.2}ms ({:.0} inserts/s)",
        elapsed.as_secs_f64() * 1000.0,
        f64::from(RECORDS) / elapsed.as_secs_f64()
    );
    println!("Total (re)insertions: {}\nMax depth: {}", stores.get(), deepest.get());
    println!("{:?}", tree.stats());

    let half = i64::MAX / 2;
    let (x2, y2) = (rng.random_range(0..half), rng.random_range(0..half));
    let (x1, y1) = (x2 - rng.random_range(0..=x2), y2 - rng.random_range(0..=y2));
    let query = Rectangle::from_bounds(x1, x2, y1, y2)?;

    let start = Instant::now();
    let found = tree.search(&query);
    println!("Found {} objects in {query} in {:.2}ms", found.len(), start.elapsed().as_secs_f64() * 1000.0);
    Ok(())
}

#[derive(Debug, Clone)]
enum Shape {
    Point(Point<[u8; 4]>),
    Segment(LineSegment<[u8; 4]>),
}

impl SpatialObject for Shape {
    fn content_hash(&self) -> u64 {
        match self {
            Self::Point(p) => p.content_hash(),
            Self::Segment(s) => s.content_hash(),
        }
    }

    fn overlaps(&self, area: &Rectangle) -> Overlap {
        match self {
            Self::Point(p) => p.overlaps(area),
            Self::Segment(s) => s.overlaps(area),
        }
    }
}
