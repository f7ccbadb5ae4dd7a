//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use quadtree64::prelude::*;
//! ```

#[cfg(feature = "config")]
pub use crate::TreeConfig;
pub use crate::{
    Error, InsertObserver, Limits, LineSegment, Overlap, Point, QuadTree, Rectangle, SpatialObject,
    StoreEvent,
};
