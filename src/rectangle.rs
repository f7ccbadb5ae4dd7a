//! Axis-aligned rectangles built from two [`Limits`].

use std::fmt;

use crate::{Limits, Result};

/// Axis-aligned rectangle `[x.min, x.max) x [y.min, y.max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    x_range: Limits,
    y_range: Limits,
}

impl Rectangle {
    /// The whole plane representable with half-open `i64` bounds.
    pub const FULL: Self = Self { x_range: Limits::FULL, y_range: Limits::FULL };

    /// Creates a rectangle from its two axis bounds.
    #[must_use]
    pub const fn new(x_range: Limits, y_range: Limits) -> Self {
        Self { x_range, y_range }
    }

    /// Creates a rectangle from raw bounds, in `x_min, x_max, y_min, y_max` order.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`](crate::Error::InvalidRange) if either
    /// axis has `min > max`.
    ///
    /// # Example
    /// ```
    /// use quadtree64::Rectangle;
    /// let r = Rectangle::from_bounds(10, 20, 10, 20)?;
    /// assert!(r.contains_point(10, 19));
    /// assert!(!r.contains_point(20, 15));
    /// # Ok::<(), quadtree64::Error>(())
    /// ```
    pub fn from_bounds(x_min: i64, x_max: i64, y_min: i64, y_max: i64) -> Result<Self> {
        Ok(Self::new(Limits::new(x_min, x_max)?, Limits::new(y_min, y_max)?))
    }

    /// Bounds along the X axis.
    #[inline]
    #[must_use]
    pub const fn x_range(&self) -> Limits {
        self.x_range
    }

    /// Bounds along the Y axis.
    #[inline]
    #[must_use]
    pub const fn y_range(&self) -> Limits {
        self.y_range
    }

    /// Returns `true` if `(x, y)` lies inside the half-open rectangle.
    #[inline]
    #[must_use]
    pub const fn contains_point(&self, x: i64, y: i64) -> bool {
        self.x_range.contains(x) && self.y_range.contains(y)
    }

    /// Returns `true` if both axes overlap. See [`Limits::overlaps`] for the
    /// boundary rule.
    #[inline]
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.x_range.overlaps(&other.x_range) && self.y_range.overlaps(&other.y_range)
    }

    /// Returns `true` if the rectangle has zero extent on either axis.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.x_range.is_empty() || self.y_range.is_empty()
    }

    /// Returns `true` if neither axis can be halved.
    #[inline]
    #[must_use]
    pub const fn cannot_subdivide(&self) -> bool {
        self.x_range.cannot_subdivide() && self.y_range.cannot_subdivide()
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} (X: {}; Y: {})",
            self.x_range.len(),
            self.y_range.len(),
            self.x_range,
            self.y_range
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn rect(x_min: i64, x_max: i64, y_min: i64, y_max: i64) -> Rectangle {
        Rectangle::from_bounds(x_min, x_max, y_min, y_max).unwrap()
    }

    #[test]
    fn test_from_bounds_validates_each_axis() {
        assert!(matches!(
            Rectangle::from_bounds(5, 1, 0, 1),
            Err(Error::InvalidRange { min: 5, max: 1 })
        ));
        assert!(matches!(
            Rectangle::from_bounds(0, 1, 9, 2),
            Err(Error::InvalidRange { min: 9, max: 2 })
        ));
    }

    #[test]
    fn test_overlaps_requires_both_axes() {
        let a = rect(0, 10, 0, 10);
        assert!(a.overlaps(&rect(5, 15, 5, 15)));
        assert!(!a.overlaps(&rect(5, 15, 20, 30)), "x overlaps, y does not");
        assert!(!a.overlaps(&rect(20, 30, 5, 15)), "y overlaps, x does not");
        assert!(a.overlaps(&rect(i64::MIN, i64::MAX, i64::MIN, i64::MAX)));
    }

    #[test]
    fn test_cannot_subdivide_needs_both_axes() {
        assert!(rect(3, 4, -1, 0).cannot_subdivide());
        assert!(!rect(3, 4, -1, 1).cannot_subdivide());
        assert!(!rect(3, 5, -1, 0).cannot_subdivide());
        assert!(!Rectangle::FULL.cannot_subdivide());
    }

    #[test]
    fn test_is_empty() {
        assert!(rect(3, 3, 0, 10).is_empty());
        assert!(rect(0, 10, 3, 3).is_empty());
        assert!(!rect(0, 1, 0, 1).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(rect(0, 4, -2, 0).to_string(), "4x2 (X: 0..4; Y: -2..0)");
    }
}
