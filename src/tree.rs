//! Region quadtree over the `i64` plane.
//!
//! Every node covers a fixed [`Rectangle`]. A leaf stores objects keyed by
//! content hash until it holds `max_objects_per_leaf` of them; the next
//! insert splits it once, for good, into two or four children and pushes its
//! contents down. Leaves whose area is a single unit on both axes never
//! split and grow without bound.
//!
//! An object is pushed into every child it overlaps, in quadrant order
//! (I, II, III, IV), stopping at the first child that fully contains it.
//! Searches prune on node area and re-test each stored object, collecting
//! results by content hash so an object stored in several leaves is reported
//! once.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace, warn};

use crate::{Error, InsertObserver, Rectangle, Result, SpatialObject, StoreEvent};

/// Region quadtree over a bounded area of the `i64` plane.
///
/// # Example
/// ```
/// use quadtree64::{LineSegment, QuadTree, Rectangle};
///
/// let mut tree = QuadTree::new(i64::MIN, i64::MAX, i64::MIN, i64::MAX, 400)?;
/// for x in 1..=5 {
///     tree.insert(LineSegment::new(x, 10, x, -10, ()))?;
/// }
///
/// let left = Rectangle::from_bounds(i64::MIN, 0, i64::MIN, i64::MAX)?;
/// let top = Rectangle::from_bounds(i64::MIN, i64::MAX, 0, i64::MAX)?;
/// assert!(tree.search(&left).is_empty());
/// assert_eq!(tree.search(&top).len(), 5);
/// # Ok::<(), quadtree64::Error>(())
/// ```
pub struct QuadTree<T> {
    root: Node<T>,
    max_objects: u16,
    observer: Option<Box<dyn InsertObserver>>,
}

/// Shape summary returned by [`QuadTree::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    /// Nodes in the tree, root included.
    pub nodes: usize,
    /// Nodes that have not split.
    pub leaves: usize,
    /// Leaves whose area cannot be split.
    pub fixed_leaves: usize,
    /// Stored entries summed over all leaves. An object stored in several
    /// leaves counts once per leaf.
    pub stored: usize,
    /// Depth of the deepest node; the root is depth 0.
    pub max_depth: u8,
}

struct Node<T> {
    area: Rectangle,
    fixed: bool,
    contents: Contents<T>,
}

enum Contents<T> {
    Leaf(HashMap<u64, T>),
    Split(Vec<Node<T>>),
}

/// Per-insert state threaded through the recursion.
struct Insertion<'a> {
    max_objects: usize,
    observer: &'a mut Option<Box<dyn InsertObserver>>,
}

impl<T> QuadTree<T> {
    /// Creates an empty tree over `[x_min, x_max) x [y_min, y_max)`.
    ///
    /// A leaf splits on the insert that finds it already holding
    /// `max_objects_per_leaf` objects, so `0` splits on the very first insert.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] if `min > max` on either axis,
    /// [`Error::EmptyArea`] if either axis has zero extent.
    pub fn new(
        x_min: i64,
        x_max: i64,
        y_min: i64,
        y_max: i64,
        max_objects_per_leaf: u16,
    ) -> Result<Self> {
        Self::with_area(Rectangle::from_bounds(x_min, x_max, y_min, y_max)?, max_objects_per_leaf)
    }

    /// Creates an empty tree over `area`.
    ///
    /// # Errors
    /// [`Error::EmptyArea`] if either axis of `area` has zero extent.
    pub fn with_area(area: Rectangle, max_objects_per_leaf: u16) -> Result<Self> {
        if area.is_empty() {
            return Err(Error::EmptyArea { area });
        }
        Ok(Self { root: Node::new(area), max_objects: max_objects_per_leaf, observer: None })
    }

    /// Area covered by the tree.
    pub const fn area(&self) -> Rectangle {
        self.root.area
    }

    /// Leaf capacity this tree was built with.
    pub const fn max_objects_per_leaf(&self) -> u16 {
        self.max_objects
    }

    /// Installs an observer that receives a [`StoreEvent`] for every store,
    /// replacing any previous one.
    pub fn set_observer<O: InsertObserver + 'static>(&mut self, observer: O) {
        self.observer = Some(Box::new(observer));
    }

    /// Removes and returns the installed observer.
    pub fn take_observer(&mut self) -> Option<Box<dyn InsertObserver>> {
        self.observer.take()
    }

    /// Walks the tree and summarizes its shape.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        self.root.collect_stats(0, &mut stats);
        stats
    }
}

impl<T: SpatialObject + Clone> QuadTree<T> {
    /// Inserts `object`, keyed by its content hash.
    ///
    /// An object whose hash is already present replaces the earlier one in
    /// every leaf the new object reaches.
    ///
    /// # Errors
    /// [`Error::OutOfBounds`] if `object` is not contained in the tree's
    /// half-open area. Searches prune on node areas, so a part lying outside
    /// (on the exclusive `max` edge included) could never be found.
    pub fn insert(&mut self, object: T) -> Result<()> {
        let hash = object.content_hash();
        if !object.overlaps(&self.root.area).contained {
            return Err(Error::OutOfBounds { hash });
        }
        let mut ctx = Insertion { max_objects: usize::from(self.max_objects), observer: &mut self.observer };
        self.root.insert(hash, object, 0, &mut ctx);
        Ok(())
    }
}

impl<T: SpatialObject> QuadTree<T> {
    /// Returns every stored object overlapping `area`, keyed by content hash.
    pub fn search(&self, area: &Rectangle) -> HashMap<u64, &T> {
        let mut found = HashMap::new();
        self.root.search(area, &mut found);
        found
    }

    /// Like [`search`](Self::search), but adds matches to a caller-owned map
    /// so it can be reused across queries.
    pub fn search_into<'a>(&'a self, area: &Rectangle, found: &mut HashMap<u64, &'a T>) {
        self.root.search(area, found);
    }
}

impl<T> fmt::Debug for QuadTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuadTree")
            .field("area", &self.root.area)
            .field("max_objects_per_leaf", &self.max_objects)
            .field("observer", &self.observer.is_some())
            .field("stats", &self.stats())
            .finish()
    }
}

impl<T> Node<T> {
    fn new(area: Rectangle) -> Self {
        Self { area, fixed: area.cannot_subdivide(), contents: Contents::Leaf(HashMap::new()) }
    }

    fn collect_stats(&self, depth: u8, stats: &mut TreeStats) {
        stats.nodes += 1;
        stats.max_depth = stats.max_depth.max(depth);
        match &self.contents {
            Contents::Leaf(objects) => {
                stats.leaves += 1;
                stats.stored += objects.len();
                if self.fixed {
                    stats.fixed_leaves += 1;
                }
            }
            Contents::Split(children) => {
                for child in children {
                    child.collect_stats(depth + 1, stats);
                }
            }
        }
    }
}

impl<T: SpatialObject + Clone> Node<T> {
    fn insert(&mut self, hash: u64, object: T, depth: u8, ctx: &mut Insertion<'_>) {
        let objects = match &mut self.contents {
            Contents::Split(children) => {
                insert_into_children(children, hash, object, depth + 1, ctx);
                return;
            }
            Contents::Leaf(objects) => objects,
        };

        if self.fixed || objects.len() < ctx.max_objects {
            store(objects, &self.area, hash, object, depth, ctx);
            return;
        }

        let mut children: Vec<Self> = child_areas(&self.area).into_iter().map(Self::new).collect();
        debug!(
            area = %self.area,
            depth,
            children = children.len(),
            redistributed = objects.len(),
            "subdividing node"
        );
        for (h, o) in objects.drain() {
            insert_into_children(&mut children, h, o, depth + 1, ctx);
        }
        insert_into_children(&mut children, hash, object, depth + 1, ctx);
        self.contents = Contents::Split(children);
    }
}

impl<T: SpatialObject> Node<T> {
    fn search<'a>(&'a self, area: &Rectangle, found: &mut HashMap<u64, &'a T>) {
        if !self.area.overlaps(area) {
            return;
        }
        match &self.contents {
            Contents::Split(children) => {
                for child in children {
                    child.search(area, found);
                }
            }
            Contents::Leaf(objects) => {
                for (&hash, object) in objects {
                    if object.overlaps(area).overlaps {
                        let _ = found.insert(hash, object);
                    }
                }
            }
        }
    }
}

fn store<T>(
    objects: &mut HashMap<u64, T>,
    area: &Rectangle,
    hash: u64,
    object: T,
    depth: u8,
    ctx: &mut Insertion<'_>,
) {
    if objects.insert(hash, object).is_some() {
        trace!(hash, depth, "replaced object with equal hash");
    } else {
        trace!(hash, depth, "stored object");
    }
    if let Some(observer) = ctx.observer.as_deref_mut() {
        observer.on_store(&StoreEvent { area: *area, depth, stored: objects.len() });
    }
}

/// Routes `object` into each child it overlaps, stopping after the first
/// child that fully contains it.
fn insert_into_children<T: SpatialObject + Clone>(
    children: &mut [Node<T>],
    hash: u64,
    object: T,
    depth: u8,
    ctx: &mut Insertion<'_>,
) {
    let mut targets = [0_usize; 4];
    let mut count = 0;
    for (i, child) in children.iter().enumerate() {
        let overlap = object.overlaps(&child.area);
        if overlap.overlaps {
            targets[count] = i;
            count += 1;
            if overlap.contained {
                break;
            }
        }
    }

    let Some((&last, rest)) = targets[..count].split_last() else {
        warn!(hash, depth, "object overlaps no child area, dropped");
        return;
    };
    for &i in rest {
        children[i].insert(hash, object.clone(), depth, ctx);
    }
    children[last].insert(hash, object, depth, ctx);
}

/// Child areas in quadrant order. An axis already one unit wide is not
/// split, giving two children instead of four.
fn child_areas(area: &Rectangle) -> Vec<Rectangle> {
    let (x, y) = (area.x_range(), area.y_range());
    let (east, west) = x.halves();
    let (north, south) = y.halves();

    if x.midpoint() == x.max() {
        vec![Rectangle::new(x, north), Rectangle::new(x, south)]
    } else if y.midpoint() == y.max() {
        vec![Rectangle::new(east, y), Rectangle::new(west, y)]
    } else {
        vec![
            Rectangle::new(east, north), // I
            Rectangle::new(west, north), // II
            Rectangle::new(west, south), // III
            Rectangle::new(east, south), // IV
        ]
    }
}
