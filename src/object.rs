//! The capability contract every indexable shape implements.

use std::rc::Rc;
use std::sync::Arc;

use crate::Rectangle;

/// Result of testing a shape against a rectangle.
///
/// `contained` implies `overlaps`; use the constants rather than building
/// inconsistent values by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Overlap {
    /// The shape intersects the rectangle's closed region.
    pub overlaps: bool,
    /// The whole shape lies within the rectangle.
    pub contained: bool,
}

impl Overlap {
    /// No intersection.
    pub const NONE: Self = Self { overlaps: false, contained: false };
    /// Intersects, but some of the shape lies outside.
    pub const PARTIAL: Self = Self { overlaps: true, contained: false };
    /// Entirely inside.
    pub const FULL: Self = Self { overlaps: true, contained: true };

    /// Builds a result where overlap and containment coincide, as for points.
    #[inline]
    #[must_use]
    pub const fn all_or_nothing(inside: bool) -> Self {
        Self { overlaps: inside, contained: inside }
    }
}

impl From<Overlap> for (bool, bool) {
    fn from(o: Overlap) -> Self {
        (o.overlaps, o.contained)
    }
}

/// A shape that can live in a [`QuadTree`](crate::QuadTree).
///
/// This is the only coupling between shapes and the tree, so new shapes can
/// be added without touching the tree.
///
/// # Example
/// ```
/// use quadtree64::{Overlap, Rectangle, SpatialObject};
///
/// /// A horizontal run of cells on one row.
/// struct Run { y: i64, x_from: i64, x_to: i64 }
///
/// impl SpatialObject for Run {
///     fn content_hash(&self) -> u64 {
///         quadtree64::fnv1a64(&[self.y.to_be_bytes(), self.x_from.to_be_bytes(), self.x_to.to_be_bytes()].concat())
///     }
///
///     fn overlaps(&self, r: &Rectangle) -> Overlap {
///         let (x, y) = (r.x_range(), r.y_range());
///         if !y.contains(self.y) || self.x_to < x.min() || self.x_from >= x.max() {
///             return Overlap::NONE;
///         }
///         Overlap { overlaps: true, contained: x.contains(self.x_from) && x.contains(self.x_to) }
///     }
/// }
/// ```
pub trait SpatialObject {
    /// Stable content identity. Objects with equal hashes are treated as the
    /// same object: a later insert replaces an earlier one in any node both
    /// reach.
    fn content_hash(&self) -> u64;

    /// Tests the shape against `area`.
    fn overlaps(&self, area: &Rectangle) -> Overlap;
}

impl<T: SpatialObject + ?Sized> SpatialObject for &T {
    fn content_hash(&self) -> u64 {
        (**self).content_hash()
    }

    fn overlaps(&self, area: &Rectangle) -> Overlap {
        (**self).overlaps(area)
    }
}

impl<T: SpatialObject + ?Sized> SpatialObject for Box<T> {
    fn content_hash(&self) -> u64 {
        (**self).content_hash()
    }

    fn overlaps(&self, area: &Rectangle) -> Overlap {
        (**self).overlaps(area)
    }
}

impl<T: SpatialObject + ?Sized> SpatialObject for Rc<T> {
    fn content_hash(&self) -> u64 {
        (**self).content_hash()
    }

    fn overlaps(&self, area: &Rectangle) -> Overlap {
        (**self).overlaps(area)
    }
}

impl<T: SpatialObject + ?Sized> SpatialObject for Arc<T> {
    fn content_hash(&self) -> u64 {
        (**self).content_hash()
    }

    fn overlaps(&self, area: &Rectangle) -> Overlap {
        (**self).overlaps(area)
    }
}
