//! # quadtree64 - Region Quadtree over the 64-bit Integer Plane
//!
//! A spatial index for large numbers of geometric primitives with repeated
//! rectangular range queries.
//!
//! ## Features
//!
//! - **Full `i64` domain**: bounds may span `i64::MIN..i64::MAX`; subdivision
//!   bisects without overflow
//! - **Open shape set**: anything implementing [`SpatialObject`] can be
//!   indexed; [`Point`] and [`LineSegment`] are provided
//! - **Exact geometry**: segment tests use integer orientation predicates
//! - **Content addressing**: objects are keyed by a 64-bit content hash,
//!   so results come back as a set
//!
//! ## Quick Start
//!
//! ```rust
//! use quadtree64::prelude::*;
//!
//! // Bounds are x_min, x_max, y_min, y_max (half-open), then leaf capacity
//! let mut tree = QuadTree::new(0, 1000, 0, 1000, 8)?;
//!
//! tree.insert(LineSegment::new(10, 10, 90, 90, "diagonal"))?;
//! tree.insert(LineSegment::new(500, 0, 500, 999, "divider"))?;
//! tree.insert(LineSegment::new(700, 700, 710, 700, "stub"))?;
//!
//! let query = Rectangle::from_bounds(0, 600, 0, 100)?;
//! let found = tree.search(&query);
//! assert_eq!(found.len(), 2); // diagonal and divider
//! # Ok::<(), quadtree64::Error>(())
//! ```
//!
//! ## How It Works
//!
//! Each node owns a fixed half-open rectangle. A leaf fills up to its
//! capacity, then splits once into quadrants (or halves, when one axis is a
//! single unit wide) and pushes its contents down; an object straddling
//! several children is stored in each of them. Single-unit leaves never
//! split. A search skips nodes whose area misses the query and re-tests every
//! stored object with its own overlap predicate.
//!
//! The tree is single-threaded and not synchronized; wrap it in a lock to
//! share it.

mod error;
mod hash;
mod limits;
mod object;
mod observer;
mod point;
mod rectangle;
mod segment;
mod tree;

#[cfg(feature = "config")]
mod config;

pub mod prelude;

#[cfg(test)]
mod property_tests;

#[cfg(feature = "config")]
pub use config::TreeConfig;
pub use error::{Error, Result};
pub use hash::{FnvBuildHasher, FnvHasher, fnv1a64};
pub use limits::Limits;
pub use object::{Overlap, SpatialObject};
pub use observer::{InsertObserver, StoreEvent};
pub use point::Point;
pub use rectangle::Rectangle;
pub use segment::LineSegment;
pub use tree::{QuadTree, TreeStats};
