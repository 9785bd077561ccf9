use crate::{error::Result, sets::queues::IndexTracker};

/// A min-priority queue whose elements can be found again after insertion.
///
/// The queue owns its elements in an arena and hands back a *handle* (the
/// arena index) from [`insert`](IndexedQueue::insert). Handles stay valid for
/// the queue's whole lifetime: an extracted element is no longer queued but
/// can still be read through [`get`](IndexedQueue::get). This is what lets a
/// shortest-path search use the queue's arena as its distance table.
///
/// Every implementation upholds, for each queued element `x` with handle `h`:
/// `slot[x.position()] == h`, and `x.position() == None` once `x` has left.
///
/// Two implementations exist:
/// - [`LinearQueue`](crate::sets::queues::LinearQueue): O(1) insert and
///   decrease-key, O(n) extract-min. Best on near-complete graphs.
/// - [`BinaryHeapQueue`](crate::sets::queues::BinaryHeapQueue): O(log n)
///   for everything. Best on sparse graphs.
pub trait IndexedQueue<T: IndexTracker + Ord> {
    /// Queues `element` and returns its handle.
    fn insert(&mut self, element: T) -> usize;

    /// Removes the smallest queued element and returns its handle.
    ///
    /// # Errors
    /// [`GraphError::EmptyQueue`](crate::error::GraphError::EmptyQueue) if
    /// nothing is queued.
    fn extract_min(&mut self) -> Result<usize>;

    /// Applies `update` to a queued element, then restores the queue order
    /// around it. The update is expected to lower the element's key.
    ///
    /// # Errors
    /// [`GraphError::InvalidArgument`](crate::error::GraphError::InvalidArgument)
    /// if `handle` is not currently queued; `update` is not applied then.
    fn decrease_key<F>(&mut self, handle: usize, update: F) -> Result<()>
    where
        F: FnOnce(&mut T);

    /// Takes a queued element out without it being the minimum.
    ///
    /// # Errors
    /// [`GraphError::InvalidArgument`](crate::error::GraphError::InvalidArgument)
    /// if `handle` is not currently queued.
    fn remove(&mut self, handle: usize) -> Result<()>;

    /// Whether `handle` is queued right now. Unknown and already extracted
    /// handles both answer `false`.
    fn contains(&self, handle: usize) -> bool;

    /// The element behind `handle`, queued or not.
    fn get(&self, handle: usize) -> Option<&T>;

    /// Number of queued elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dequeues everything. Elements stay readable through their handles.
    fn clear(&mut self);

    /// Consumes the queue, returning every element ever inserted in handle
    /// order.
    fn into_elements(self) -> Vec<T>;
}
