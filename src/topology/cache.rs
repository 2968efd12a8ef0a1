//! Cache invalidation utilities shared across topology structures.

use crate::topology::point::EntityId;

/// Anything that caches derived topology (closures, adjacency summaries, …)
/// should implement this.
pub trait InvalidateCache {
    /// Invalidate *all* internal caches so future queries recompute correctly.
    fn invalidate_cache(&mut self);
}

// Blanket impl for Box<T>
impl<T: InvalidateCache + ?Sized> InvalidateCache for Box<T> {
    #[inline]
    fn invalidate_cache(&mut self) {
        (**self).invalidate_cache();
    }
}

/// One memoized closure result, keyed to the owning entity's modification
/// stamp at compute time.
///
/// The cache is valid exactly while `stamp` equals the entity's current
/// stamp; mutations bump stamps upward through the superior links, so a
/// mismatch means some inferior structure changed underneath.
#[derive(Clone, Debug)]
pub struct ClosureCache {
    /// Entity stamp at the time `items` was computed.
    pub(crate) stamp: u64,
    /// De-duplicated closure members, DFS pre-order in link-table order.
    pub(crate) items: Vec<EntityId>,
}

impl ClosureCache {
    #[inline]
    pub(crate) fn is_fresh(&self, current_stamp: u64) -> bool {
        self.stamp == current_stamp
    }
}
