//! Property tests over arbitrary coordinates, the `i64` extremes included.

#[cfg(test)]
mod properties {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use crate::{Limits, LineSegment, Point, QuadTree, Rectangle, SpatialObject};

    /// Mostly small coordinates, so shapes land on rectangle edges often.
    fn coord() -> impl Strategy<Value = i64> {
        prop_oneof![
            3 => -40_i64..40,
            1 => any::<i64>(),
            1 => prop::sample::select(vec![i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX - 1, i64::MAX]),
        ]
    }

    fn bounds() -> impl Strategy<Value = (i64, i64)> {
        (coord(), coord()).prop_map(|(a, b)| (a.min(b), a.max(b)))
    }

    fn rectangle() -> impl Strategy<Value = Rectangle> {
        (bounds(), bounds()).prop_map(|((x_min, x_max), (y_min, y_max))| {
            Rectangle::from_bounds(x_min, x_max, y_min, y_max).unwrap()
        })
    }

    fn segment() -> impl Strategy<Value = LineSegment> {
        (coord(), coord(), coord(), coord()).prop_map(|(x1, y1, x2, y2)| LineSegment::new(x1, y1, x2, y2, ()))
    }

    /// Endpoints in `[-33, 32]`, one past the `[-32, 32)` test area on each side.
    fn small_segment() -> impl Strategy<Value = LineSegment<u8>> {
        (-33_i64..=32, -33_i64..=32, -33_i64..=32, -33_i64..=32, any::<u8>())
            .prop_map(|(x1, y1, x2, y2, tag)| LineSegment::new(x1, y1, x2, y2, tag))
    }

    proptest! {
        #[test]
        fn midpoint_is_ceiling_of_mean((min, max) in bounds()) {
            let limits = Limits::new(min, max).unwrap();
            let expected = (i128::from(min) + i128::from(max) + 1).div_euclid(2);
            prop_assert_eq!(i128::from(limits.midpoint()), expected);
        }

        #[test]
        fn halves_partition_divisible_limits((min, max) in bounds()) {
            let limits = Limits::new(min, max).unwrap();
            prop_assume!(limits.len() >= 2);
            let (upper, lower) = limits.halves();
            prop_assert_eq!(lower.min(), min);
            prop_assert_eq!(upper.max(), max);
            prop_assert_eq!(lower.max(), upper.min());
            prop_assert!(!lower.is_empty() && !upper.is_empty());
            prop_assert_eq!(lower.len() + upper.len(), limits.len());
        }

        #[test]
        fn point_overlap_is_containment(x in coord(), y in coord(), area in rectangle()) {
            let overlap = Point::new(x, y, ()).overlaps(&area);
            let inside = area.contains_point(x, y);
            prop_assert_eq!(overlap.overlaps, inside);
            prop_assert_eq!(overlap.contained, inside);
        }

        #[test]
        fn segment_overlap_ignores_direction(s in segment(), area in rectangle()) {
            let (x1, y1) = s.start();
            let (x2, y2) = s.end();
            let reversed = LineSegment::new(x2, y2, x1, y1, ());
            prop_assert_eq!(s.overlaps(&area), reversed.overlaps(&area));
        }

        #[test]
        fn segment_shortcuts_agree_with_edge_tests(s in segment(), area in rectangle()) {
            prop_assert_eq!(s.overlaps(&area), s.overlaps_by_edges(&area));
        }

        #[test]
        fn contained_segment_overlaps(s in segment(), area in rectangle()) {
            let overlap = s.overlaps(&area);
            prop_assert!(!overlap.contained || overlap.overlaps);
        }

        #[test]
        fn search_is_independent_of_capacity(
            segments in prop::collection::vec(small_segment(), 0..60),
            queries in prop::collection::vec((-40_i64..40, -40_i64..40, -40_i64..40, -40_i64..40), 1..8),
        ) {
            let area = Rectangle::from_bounds(-32, 32, -32, 32).unwrap();
            let mut trees: Vec<QuadTree<LineSegment<u8>>> = Vec::new();
            for capacity in [0, 1, 3, 400] {
                let mut tree = QuadTree::with_area(area, capacity).unwrap();
                for s in &segments {
                    let accepted = tree.insert(s.clone()).is_ok();
                    prop_assert_eq!(accepted, s.overlaps(&area).contained);
                }
                trees.push(tree);
            }

            for (a, b, c, d) in queries {
                let query = Rectangle::from_bounds(a.min(b), a.max(b), c.min(d), c.max(d)).unwrap();
                let expected: HashSet<u64> = segments
                    .iter()
                    .filter(|s| s.overlaps(&area).contained && s.overlaps(&query).overlaps)
                    .map(SpatialObject::content_hash)
                    .collect();
                for tree in &trees {
                    let found: HashSet<u64> = tree.search(&query).into_keys().collect();
                    prop_assert_eq!(&found, &expected, "capacity {}", tree.max_objects_per_leaf());
                }
            }
        }
    }
}
