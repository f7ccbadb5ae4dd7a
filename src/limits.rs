//! One-dimensional half-open bounds.

use std::fmt;

use crate::{Error, Result};

/// Half-open bounds `[min, max)` along one axis.
///
/// `Limits` work like a slice index: `min: 0, max: 5` covers the five values
/// `0, 1, 2, 3, 4`; `5` is out of bounds.
///
/// # Example
/// ```
/// use quadtree64::Limits;
/// let l = Limits::new(0, 5)?;
/// assert!(l.contains(4));
/// assert!(!l.contains(5));
/// # Ok::<(), quadtree64::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Limits {
    min: i64,
    max: i64,
}

impl Limits {
    /// Creates bounds covering `[min, max)`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`] when `min > max`.
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Bounds covering every `i64` except `i64::MAX`.
    pub const FULL: Self = Self { min: i64::MIN, max: i64::MAX };

    /// Inclusive lower bound.
    #[inline]
    #[must_use]
    pub const fn min(&self) -> i64 {
        self.min
    }

    /// Exclusive upper bound.
    #[inline]
    #[must_use]
    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Returns `true` if `v` lies in `[min, max)`.
    #[inline]
    #[must_use]
    pub const fn contains(&self, v: i64) -> bool {
        self.min <= v && v < self.max
    }

    /// Returns `true` if the bounds have zero extent.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min == self.max
    }

    /// Number of values covered. Unsigned, since `max - min` can exceed
    /// `i64::MAX`.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.max.abs_diff(self.min)
    }

    /// Pairwise overlap test used for pruning.
    ///
    /// `self` is rejected when it starts past `other.max` or ends at or before
    /// `other.min`. The test is not symmetric at the shared boundary: bounds
    /// starting exactly at `other.max` still count as overlapping.
    #[inline]
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        if self.min > other.max {
            return false; // too far to the right
        }
        if self.max <= other.min {
            return false; // too far to the left
        }
        true
    }

    /// Midpoint of the bounds, rounded up, without intermediate overflow.
    ///
    /// Valid over the whole `i64` domain, `[i64::MIN, i64::MAX)` included.
    /// Single-unit bounds return `max`, which is how subdivision detects an
    /// axis that cannot be split.
    #[inline]
    #[must_use]
    pub const fn midpoint(&self) -> i64 {
        (self.min | self.max) - ((self.min ^ self.max) >> 1)
    }

    /// Returns `true` for single-unit bounds, which cannot be halved.
    #[inline]
    #[must_use]
    pub const fn cannot_subdivide(&self) -> bool {
        match self.min.checked_add(1) {
            Some(next) => next == self.max,
            None => false,
        }
    }

    /// Upper half `[midpoint, max)` and lower half `[min, midpoint)`.
    #[inline]
    pub(crate) const fn halves(&self) -> (Self, Self) {
        let mid = self.midpoint();
        (Self { min: mid, max: self.max }, Self { min: self.min, max: mid })
    }
}

impl fmt::Display for Limits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}
