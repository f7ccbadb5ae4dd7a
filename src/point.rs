//! Point shape.

use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

use crate::{FnvBuildHasher, Overlap, Rectangle, SpatialObject};

/// A single lattice point carrying an opaque payload.
///
/// The content hash covers the coordinates and the payload and is computed
/// once, at construction.
///
/// # Example
/// ```
/// use quadtree64::{Point, Rectangle, SpatialObject};
/// let p = Point::new(15, 15, "red");
/// let r = Rectangle::from_bounds(10, 20, 10, 20)?;
/// assert_eq!(<(bool, bool)>::from(p.overlaps(&r)), (true, true));
/// # Ok::<(), quadtree64::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point<P = ()> {
    x: i64,
    y: i64,
    payload: P,
    hash: u64,
}

impl<P: Hash> Point<P> {
    /// Creates a point hashed with the default FNV-1a digest.
    pub fn new(x: i64, y: i64, payload: P) -> Self {
        Self::with_hasher(x, y, payload, &FnvBuildHasher::default())
    }

    /// Creates a point hashed with a caller-supplied digest.
    pub fn with_hasher<S: BuildHasher>(x: i64, y: i64, payload: P, build: &S) -> Self {
        let mut h = build.build_hasher();
        h.write(&x.to_be_bytes());
        h.write(&y.to_be_bytes());
        payload.hash(&mut h);
        Self { x, y, payload, hash: h.finish() }
    }
}

impl<P> Point<P> {
    /// X coordinate.
    pub const fn x(&self) -> i64 {
        self.x
    }

    /// Y coordinate.
    pub const fn y(&self) -> i64 {
        self.y
    }

    /// Attached payload.
    pub const fn payload(&self) -> &P {
        &self.payload
    }
}

impl<P> SpatialObject for Point<P> {
    fn content_hash(&self) -> u64 {
        self.hash
    }

    fn overlaps(&self, area: &Rectangle) -> Overlap {
        Overlap::all_or_nothing(area.contains_point(self.x, self.y))
    }
}

impl<P: fmt::Debug> fmt::Display for Point<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{}): {:?}", self.x, self.y, self.payload)
    }
}
