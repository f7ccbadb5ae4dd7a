//! Line segment shape and the exact segment/rectangle test behind it.
//!
//! All geometry runs on the integer coordinates directly. Orientation tests
//! compare 128-bit magnitudes, so no `i64` input can overflow or lose
//! precision.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

use crate::{FnvBuildHasher, Overlap, Rectangle, SpatialObject};

/// A closed line segment between two lattice points, carrying an opaque
/// payload.
///
/// A segment overlaps a rectangle when it has an endpoint inside the
/// rectangle or crosses one of its four edges. Edges sit on the rectangle's
/// `max` coordinates too, so a segment that only touches the exclusive `max`
/// side, or only touches a corner, still counts as overlapping.
///
/// # Example
/// ```
/// use quadtree64::{LineSegment, Overlap, Rectangle, SpatialObject};
/// let r = Rectangle::from_bounds(10, 20, 10, 20)?;
///
/// assert_eq!(LineSegment::new(15, 15, 16, 16, ()).overlaps(&r), Overlap::FULL);
/// assert_eq!(LineSegment::new(5, 15, 25, 15, ()).overlaps(&r), Overlap::PARTIAL);
/// assert_eq!(LineSegment::new(5, 25, 15, 25, ()).overlaps(&r), Overlap::NONE);
/// # Ok::<(), quadtree64::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSegment<P = ()> {
    start: Coord,
    end: Coord,
    payload: P,
    hash: u64,
}

impl<P: Hash> LineSegment<P> {
    /// Creates a segment hashed with the default FNV-1a digest.
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64, payload: P) -> Self {
        Self::with_hasher(x1, y1, x2, y2, payload, &FnvBuildHasher::default())
    }

    /// Creates a segment hashed with a caller-supplied digest.
    pub fn with_hasher<S: BuildHasher>(
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
        payload: P,
        build: &S,
    ) -> Self {
        let mut h = build.build_hasher();
        for v in [x1, y1, x2, y2] {
            h.write(&v.to_be_bytes());
        }
        payload.hash(&mut h);
        Self {
            start: Coord { x: x1, y: y1 },
            end: Coord { x: x2, y: y2 },
            payload,
            hash: h.finish(),
        }
    }
}

impl<P> LineSegment<P> {
    /// First endpoint as `(x, y)`.
    pub const fn start(&self) -> (i64, i64) {
        (self.start.x, self.start.y)
    }

    /// Second endpoint as `(x, y)`.
    pub const fn end(&self) -> (i64, i64) {
        (self.end.x, self.end.y)
    }

    /// Attached payload.
    pub const fn payload(&self) -> &P {
        &self.payload
    }

    /// Overlap test without the region shortcuts: endpoint containment, then
    /// one intersection test per rectangle edge.
    pub(crate) fn overlaps_by_edges(&self, area: &Rectangle) -> Overlap {
        if let Some(found) = self.endpoint_overlap(area) {
            return found;
        }
        if crosses_boundary(self.start, self.end, area) {
            // no endpoint inside, so the segment cannot be fully contained
            return Overlap::PARTIAL;
        }
        Overlap::NONE
    }

    fn endpoint_overlap(&self, area: &Rectangle) -> Option<Overlap> {
        let a = area.contains_point(self.start.x, self.start.y);
        let b = area.contains_point(self.end.x, self.end.y);
        (a || b).then_some(Overlap { overlaps: true, contained: a && b })
    }
}

impl<P> SpatialObject for LineSegment<P> {
    fn content_hash(&self) -> u64 {
        self.hash
    }

    fn overlaps(&self, area: &Rectangle) -> Overlap {
        if let Some(found) = self.endpoint_overlap(area) {
            return found;
        }
        let a = Region::classify(area, self.start);
        let b = Region::classify(area, self.end);
        if let Some(decided) = a.shortcut(b) {
            return decided;
        }
        if crosses_boundary(self.start, self.end, area) {
            Overlap::PARTIAL
        } else {
            Overlap::NONE
        }
    }
}

impl<P: fmt::Debug> fmt::Display for LineSegment<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})<->({},{}): {:?}",
            self.start.x, self.start.y, self.end.x, self.end.y, self.payload
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Coord {
    x: i64,
    y: i64,
}

/// Position of a coordinate relative to the closed extent `[min, max]` of
/// one rectangle axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    Before,
    Within,
    Beyond,
}

impl Band {
    const fn of(v: i64, min: i64, max: i64) -> Self {
        if v < min {
            Self::Before
        } else if v > max {
            Self::Beyond
        } else {
            Self::Within
        }
    }

    const fn is_outside(self) -> bool {
        !matches!(self, Self::Within)
    }

    fn spans(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Before, Self::Beyond) | (Self::Beyond, Self::Before)
        )
    }
}

/// One of the nine cells around a rectangle:
///
/// ```text
///            x-min      x-max
///    Before  |  Within  |  Beyond
///   ---------+----------+--------- y-max
///            |          |
///   ---------+----------+--------- y-min
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Region {
    col: Band,
    row: Band,
}

impl Region {
    fn classify(area: &Rectangle, c: Coord) -> Self {
        let (x, y) = (area.x_range(), area.y_range());
        Self { col: Band::of(c.x, x.min(), x.max()), row: Band::of(c.y, y.min(), y.max()) }
    }

    /// Decides the overlap of a segment from its endpoint regions when that
    /// is possible without edge tests. Only valid when neither endpoint lies
    /// in the half-open rectangle.
    fn shortcut(self, other: Self) -> Option<Overlap> {
        // both endpoints strictly on the same outer side
        if (self.col == other.col && self.col.is_outside())
            || (self.row == other.row && self.row.is_outside())
        {
            return Some(Overlap::NONE);
        }
        // an endpoint on the closed boundary
        if (!self.col.is_outside() && !self.row.is_outside())
            || (!other.col.is_outside() && !other.row.is_outside())
        {
            return Some(Overlap::PARTIAL);
        }
        // straight through the middle band, left to right or bottom to top
        if (self.row == Band::Within && other.row == Band::Within && self.col.spans(other.col))
            || (self.col == Band::Within && other.col == Band::Within && self.row.spans(other.row))
        {
            return Some(Overlap::PARTIAL);
        }
        None
    }
}

/// Returns `true` if segment `a-b` touches any edge of `area`'s closed
/// boundary.
fn crosses_boundary(a: Coord, b: Coord, area: &Rectangle) -> bool {
    let (x, y) = (area.x_range(), area.y_range());
    let corners = [
        Coord { x: x.min(), y: y.min() },
        Coord { x: x.max(), y: y.min() },
        Coord { x: x.max(), y: y.max() },
        Coord { x: x.min(), y: y.max() },
    ];
    (0..corners.len()).any(|i| segments_intersect(a, b, corners[i], corners[(i + 1) % corners.len()]))
}

/// Closed segment intersection, including touching and collinear overlap.
fn segments_intersect(p1: Coord, q1: Coord, p2: Coord, q2: Coord) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Ordering::Equal && in_bounding_box(p1, p2, q1))
        || (o2 == Ordering::Equal && in_bounding_box(p1, q2, q1))
        || (o3 == Ordering::Equal && in_bounding_box(p2, p1, q2))
        || (o4 == Ordering::Equal && in_bounding_box(p2, q1, q2))
}

/// For collinear `p, q, r`: whether `q` lies on segment `p-r`.
fn in_bounding_box(p: Coord, q: Coord, r: Coord) -> bool {
    q.x >= p.x.min(r.x) && q.x <= p.x.max(r.x) && q.y >= p.y.min(r.y) && q.y <= p.y.max(r.y)
}

/// Turn direction of `p -> q -> r`: `Greater` for counter-clockwise, `Less`
/// for clockwise, `Equal` for collinear.
fn orientation(p: Coord, q: Coord, r: Coord) -> Ordering {
    let lhs = Wide::product(i128::from(q.x) - i128::from(p.x), i128::from(r.y) - i128::from(p.y));
    let rhs = Wide::product(i128::from(q.y) - i128::from(p.y), i128::from(r.x) - i128::from(p.x));
    lhs.cmp(&rhs)
}

/// Exact product of two coordinate differences.
///
/// Each factor is below `2^64` in magnitude, so the magnitude of the product
/// fits in `u128` even though the signed value may not fit in `i128`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wide {
    Negative(u128),
    NonNegative(u128),
}

impl Wide {
    fn product(a: i128, b: i128) -> Self {
        let magnitude = a.unsigned_abs() * b.unsigned_abs();
        if magnitude != 0 && (a < 0) != (b < 0) {
            Self::Negative(magnitude)
        } else {
            Self::NonNegative(magnitude)
        }
    }
}

impl Ord for Wide {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::NonNegative(a), Self::NonNegative(b)) => a.cmp(b),
            (Self::Negative(a), Self::Negative(b)) => b.cmp(a),
            (Self::Negative(_), Self::NonNegative(_)) => Ordering::Less,
            (Self::NonNegative(_), Self::Negative(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Wide {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_twenty() -> Rectangle {
        Rectangle::from_bounds(10, 20, 10, 20).unwrap()
    }

    /// Endpoint regions around `x:[10,20) y:[10,20)`:
    ///
    /// ```text
    ///   o1 | o2 | o3
    ///   ---+----+----
    ///   o4 | o5 | o6
    ///   ---+----+----
    ///   o7 | o8 | o9
    /// ```
    const CASES: &[(&str, [i64; 4], Overlap)] = &[
        // horizontal
        ("o1_o2", [5, 25, 15, 25], Overlap::NONE),
        ("o1_o3", [5, 25, 25, 25], Overlap::NONE),
        ("o2_o3", [15, 25, 25, 25], Overlap::NONE),
        ("o4_o5", [5, 15, 15, 15], Overlap::PARTIAL),
        ("o4_o6", [5, 15, 25, 15], Overlap::PARTIAL),
        ("o5_o6", [15, 15, 25, 15], Overlap::PARTIAL),
        ("o7_o8", [5, 5, 15, 5], Overlap::NONE),
        ("o7_o9", [5, 5, 25, 5], Overlap::NONE),
        ("o8_o9", [15, 5, 25, 5], Overlap::NONE),
        // vertical
        ("o1_o4", [5, 25, 5, 15], Overlap::NONE),
        ("o1_o7", [5, 25, 5, 5], Overlap::NONE),
        ("o4_o7", [5, 15, 5, 5], Overlap::NONE),
        ("o2_o5", [15, 25, 15, 15], Overlap::PARTIAL),
        ("o2_o8", [15, 25, 15, 5], Overlap::PARTIAL),
        ("o5_o8", [15, 15, 15, 5], Overlap::PARTIAL),
        ("o3_o6", [25, 25, 25, 15], Overlap::NONE),
        ("o3_o9", [25, 25, 25, 5], Overlap::NONE),
        ("o6_o9", [25, 15, 25, 5], Overlap::NONE),
        // both endpoints in one region
        ("o1", [5, 25, 6, 26], Overlap::NONE),
        ("o2", [15, 25, 16, 26], Overlap::NONE),
        ("o3", [25, 25, 26, 26], Overlap::NONE),
        ("o4", [5, 15, 6, 16], Overlap::NONE),
        ("o5", [15, 15, 16, 16], Overlap::FULL),
        ("o6", [25, 15, 26, 16], Overlap::NONE),
        ("o7", [5, 5, 6, 6], Overlap::NONE),
        ("o8", [15, 5, 16, 6], Overlap::NONE),
        ("o9", [25, 5, 26, 6], Overlap::NONE),
        // center to corner
        ("o5_o1", [15, 15, 5, 25], Overlap::PARTIAL),
        ("o5_o3", [15, 15, 25, 25], Overlap::PARTIAL),
        ("o5_o7", [15, 15, 5, 5], Overlap::PARTIAL),
        ("o5_o9", [15, 15, 25, 5], Overlap::PARTIAL),
        // diagonals
        ("o7_o3", [5, 5, 25, 25], Overlap::PARTIAL),
        ("o1_o9", [5, 25, 25, 5], Overlap::PARTIAL),
        // diagonals that miss
        ("o4_o2_miss", [4, 16, 14, 26], Overlap::NONE),
        ("o2_o6_miss", [16, 26, 26, 16], Overlap::NONE),
        ("o6_o8_miss", [26, 14, 16, 4], Overlap::NONE),
        ("o8_o4_miss", [14, 4, 4, 14], Overlap::NONE),
        // diagonals through a single corner
        ("o4_o2_corner", [5, 15, 15, 25], Overlap::PARTIAL),
        ("o2_o6_corner", [15, 25, 25, 15], Overlap::PARTIAL),
        ("o6_o8_corner", [25, 15, 15, 5], Overlap::PARTIAL),
        ("o8_o4_corner", [15, 5, 5, 15], Overlap::PARTIAL),
        // diagonals clipping a corner
        ("o4_o2_triangle", [6, 14, 16, 24], Overlap::PARTIAL),
        ("o2_o6_triangle", [14, 24, 24, 14], Overlap::PARTIAL),
        ("o6_o8_triangle", [24, 16, 14, 6], Overlap::PARTIAL),
        ("o8_o4_triangle", [16, 6, 4, 16], Overlap::PARTIAL),
    ];

    #[test]
    fn test_region_cases_both_directions() {
        let r = ten_twenty();
        for &(name, [x1, y1, x2, y2], expected) in CASES {
            let forward = LineSegment::new(x1, y1, x2, y2, ());
            let backward = LineSegment::new(x2, y2, x1, y1, ());
            assert_eq!(forward.overlaps(&r), expected, "{name}: {forward}");
            assert_eq!(backward.overlaps(&r), expected, "{name} reversed: {backward}");
        }
    }

    #[test]
    fn test_region_cases_match_edge_only_algorithm() {
        let r = ten_twenty();
        for &(name, [x1, y1, x2, y2], expected) in CASES {
            let s = LineSegment::new(x1, y1, x2, y2, ());
            assert_eq!(s.overlaps_by_edges(&r), expected, "{name}: {s}");
        }
    }

    #[test]
    fn test_touching_max_edges_counts_as_overlap() {
        let r = ten_twenty();
        // lies along the exclusive top edge
        assert_eq!(LineSegment::new(12, 20, 15, 20, ()).overlaps(&r), Overlap::PARTIAL);
        // ends exactly on the exclusive right edge
        assert_eq!(LineSegment::new(25, 15, 20, 15, ()).overlaps(&r), Overlap::PARTIAL);
        // exclusive corner
        assert_eq!(LineSegment::new(20, 20, 30, 30, ()).overlaps(&r), Overlap::PARTIAL);
        // one unit past the max edge
        assert_eq!(LineSegment::new(21, 12, 21, 18, ()).overlaps(&r), Overlap::NONE);
    }

    #[test]
    fn test_degenerate_segment_behaves_like_point_inside() {
        let r = ten_twenty();
        assert_eq!(LineSegment::new(12, 12, 12, 12, ()).overlaps(&r), Overlap::FULL);
        assert_eq!(LineSegment::new(2, 2, 2, 2, ()).overlaps(&r), Overlap::NONE);
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let r = Rectangle::from_bounds(-10, 10, -10, 10).unwrap();
        let across = LineSegment::new(i64::MIN, i64::MIN, i64::MAX, i64::MAX, ());
        assert_eq!(across.overlaps(&r), Overlap::PARTIAL);

        let anti = LineSegment::new(i64::MIN, i64::MAX, i64::MAX, i64::MIN + 1, ());
        assert_eq!(anti.overlaps(&r), Overlap::PARTIAL);

        let miss = LineSegment::new(i64::MIN, 100, i64::MAX, 101, ());
        assert_eq!(miss.overlaps(&r), Overlap::NONE);
        assert_eq!(miss.overlaps_by_edges(&r), Overlap::NONE);
    }

    #[test]
    fn test_orientation_signs() {
        let o = Coord { x: 0, y: 0 };
        let e = Coord { x: 1, y: 0 };
        assert_eq!(orientation(o, e, Coord { x: 0, y: 1 }), Ordering::Greater);
        assert_eq!(orientation(o, e, Coord { x: 0, y: -1 }), Ordering::Less);
        assert_eq!(orientation(o, e, Coord { x: 7, y: 0 }), Ordering::Equal);

        let far = Coord { x: i64::MAX, y: i64::MAX };
        let near = Coord { x: i64::MIN, y: i64::MIN };
        assert_eq!(orientation(near, far, Coord { x: 0, y: 0 }), Ordering::Equal);
        assert_eq!(orientation(near, far, Coord { x: 0, y: 1 }), Ordering::Greater);
    }

    #[test]
    fn test_wide_ordering() {
        assert!(Wide::product(-3, 4) < Wide::product(0, 9));
        assert!(Wide::product(-3, 4) < Wide::product(-1, 1));
        assert_eq!(Wide::product(0, -5), Wide::product(7, 0));
        let big = i128::from(i64::MAX) - i128::from(i64::MIN);
        assert!(Wide::product(big, big) > Wide::product(big, big - 1));
        assert!(Wide::product(-big, big) < Wide::product(-big, big - 1));
    }

    #[test]
    fn test_hash_includes_endpoint_order_and_payload() {
        let a = LineSegment::new(1, 2, 3, 4, 9_u8);
        assert_eq!(a.content_hash(), LineSegment::new(1, 2, 3, 4, 9_u8).content_hash());
        assert_ne!(a.content_hash(), LineSegment::new(3, 4, 1, 2, 9_u8).content_hash());
        assert_ne!(a.content_hash(), LineSegment::new(1, 2, 3, 4, 8_u8).content_hash());
    }
}
