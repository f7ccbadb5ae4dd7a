//! Insert instrumentation.

use crate::Rectangle;

/// Emitted each time a node stores an object, including stores made while a
/// node redistributes its contents after subdividing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreEvent {
    /// Area of the node that stored the object.
    pub area: Rectangle,
    /// Depth of that node; the root is depth 0.
    pub depth: u8,
    /// Objects held by the node after the store.
    pub stored: usize,
}

/// Receives [`StoreEvent`]s from a [`QuadTree`](crate::QuadTree).
///
/// Purely observational: the tree never reads anything back from it.
/// Closures taking `&StoreEvent` implement it directly.
///
/// # Example
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use quadtree64::{Point, QuadTree, StoreEvent};
///
/// let deepest = Rc::new(Cell::new(0_u8));
/// let seen = Rc::clone(&deepest);
///
/// let mut tree = QuadTree::new(0, 1024, 0, 1024, 1)?;
/// tree.set_observer(move |e: &StoreEvent| seen.set(seen.get().max(e.depth)));
/// tree.insert(Point::new(1, 1, ()))?;
/// tree.insert(Point::new(1000, 1000, ()))?;
/// assert_eq!(deepest.get(), 1);
/// # Ok::<(), quadtree64::Error>(())
/// ```
pub trait InsertObserver {
    /// Called once per store.
    fn on_store(&mut self, event: &StoreEvent);
}

impl<F: FnMut(&StoreEvent)> InsertObserver for F {
    fn on_store(&mut self, event: &StoreEvent) {
        self(event);
    }
}
