use std::cmp::Ordering;

use crate::{
    error::{GraphError, Result},
    sets::queues::{IndexTracker, IndexedQueue},
};

/// An indexed binary min-heap.
///
/// `heap` holds handles in heap order and every element records its heap
/// slot, so a decrease-key can start sifting right where the element sits
/// instead of searching for it.
///
/// # Time Complexity
/// - `insert`, `extract_min`, `decrease_key`, `remove`: O(log n)
/// - `contains`: O(1)
/// - building from an iterator: O(n) bottom-up heapify
pub struct BinaryHeapQueue<T> {
    arena: Vec<T>,
    heap: Vec<usize>,
}

impl<T: IndexTracker + Ord> BinaryHeapQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        BinaryHeapQueue {
            arena: Vec::with_capacity(capacity),
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Builds a heap holding every element of `elements`, handles assigned in
    /// iteration order.
    pub fn from_elements(elements: Vec<T>) -> Self {
        let mut queue = BinaryHeapQueue {
            heap: (0..elements.len()).collect(),
            arena: elements,
        };
        for (position, element) in queue.arena.iter_mut().enumerate() {
            element.set_position(Some(position));
        }
        for position in (0..queue.heap.len() / 2).rev() {
            queue.sift_down(position);
        }
        queue
    }

    fn queued_position(&self, handle: usize) -> Option<usize> {
        let position = self.arena.get(handle)?.position()?;
        match self.heap.get(position) {
            Some(&held) if held == handle => Some(position),
            _ => None,
        }
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.arena[self.heap[i]].cmp(&self.arena[self.heap[j]]) == Ordering::Less
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.arena[self.heap[i]].set_position(Some(i));
        self.arena[self.heap[j]].set_position(Some(j));
    }

    /// Returns the slot the element ends up in.
    fn sift_up(&mut self, mut position: usize) -> usize {
        while position > 0 {
            let parent = (position - 1) / 2;
            if !self.less(position, parent) {
                break;
            }
            self.swap(position, parent);
            position = parent;
        }
        position
    }

    fn sift_down(&mut self, mut position: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * position + 1;
            let right = left + 1;
            let mut smallest = position;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == position {
                return;
            }
            self.swap(position, smallest);
            position = smallest;
        }
    }

    /// Detaches the element in `position` by moving the last one into its
    /// place. Returns the detached handle.
    fn detach(&mut self, position: usize) -> Option<usize> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(position, last);
        let handle = self.heap.pop()?;
        self.arena[handle].set_position(None);
        Some(handle)
    }
}

impl<T: IndexTracker + Ord> Default for BinaryHeapQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: IndexTracker + Ord> IndexedQueue<T> for BinaryHeapQueue<T> {
    fn insert(&mut self, mut element: T) -> usize {
        if self.heap.len() == self.heap.capacity() {
            // double the storage
            self.heap.reserve_exact(self.heap.capacity().max(1));
        }

        let handle = self.arena.len();
        let position = self.heap.len();
        element.set_position(Some(position));
        self.arena.push(element);
        self.heap.push(handle);
        self.sift_up(position);
        handle
    }

    fn extract_min(&mut self) -> Result<usize> {
        let handle = self.detach(0).ok_or(GraphError::EmptyQueue)?;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(handle)
    }

    fn decrease_key<F>(&mut self, handle: usize, update: F) -> Result<()>
    where
        F: FnOnce(&mut T),
    {
        let position = self
            .queued_position(handle)
            .ok_or(GraphError::InvalidArgument("element is not queued"))?;
        update(&mut self.arena[handle]);

        // only one direction ever moves the element, trying both is harmless
        let position = self.sift_up(position);
        self.sift_down(position);
        Ok(())
    }

    fn remove(&mut self, handle: usize) -> Result<()> {
        let position = self
            .queued_position(handle)
            .ok_or(GraphError::InvalidArgument("element is not queued"))?;
        self.detach(position);

        // the former last element now sits in `position` and may violate
        // the order in either direction
        if position < self.heap.len() {
            let position = self.sift_up(position);
            self.sift_down(position);
        }
        Ok(())
    }

    fn contains(&self, handle: usize) -> bool {
        self.queued_position(handle).is_some()
    }

    fn get(&self, handle: usize) -> Option<&T> {
        self.arena.get(handle)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        for handle in self.heap.drain(..) {
            self.arena[handle].set_position(None);
        }
    }

    fn into_elements(self) -> Vec<T> {
        self.arena
    }
}

impl<T: IndexTracker + Ord> FromIterator<T> for BinaryHeapQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        BinaryHeapQueue::from_elements(iter.into_iter().collect())
    }
}

/// Adapter giving any `Ord` item a tracked heap position.
struct Ranked<E> {
    item: E,
    position: Option<usize>,
}

impl<E> IndexTracker for Ranked<E> {
    fn position(&self) -> Option<usize> {
        self.position
    }

    fn set_position(&mut self, position: Option<usize>) {
        self.position = position;
    }
}

impl<E: Ord> PartialEq for Ranked<E> {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item
    }
}

impl<E: Ord> Eq for Ranked<E> {}

impl<E: Ord> PartialOrd for Ranked<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E: Ord> Ord for Ranked<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.item.cmp(&other.item)
    }
}

/// Sorts `items` ascending by pushing them through a [`BinaryHeapQueue`].
///
/// ```
/// use waypoint::sets::queues::heap_sort;
///
/// assert_eq!(heap_sort(vec![5, 3, 8, 1]), vec![1, 3, 5, 8]);
/// ```
pub fn heap_sort<E: Ord>(items: impl IntoIterator<Item = E>) -> Vec<E> {
    let mut queue: BinaryHeapQueue<Ranked<E>> = items
        .into_iter()
        .map(|item| Ranked {
            item,
            position: None,
        })
        .collect();

    let mut order = Vec::with_capacity(queue.len());
    while let Ok(handle) = queue.extract_min() {
        order.push(handle);
    }

    let mut items: Vec<Option<E>> = queue
        .into_elements()
        .into_iter()
        .map(|ranked| Some(ranked.item))
        .collect();
    order
        .into_iter()
        .filter_map(|handle| items[handle].take())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sets::queues::IndexedValue;
    use rand::prelude::*;

    fn assert_positions_consistent<E>(queue: &BinaryHeapQueue<IndexedValue<E>>) {
        for (position, &handle) in queue.heap.iter().enumerate() {
            assert_eq!(queue.arena[handle].position(), Some(position));
        }
        for position in 1..queue.heap.len() {
            let parent = (position - 1) / 2;
            assert!(!queue.less(position, parent), "heap order broken");
        }
    }

    fn drain_values<E>(queue: &mut BinaryHeapQueue<IndexedValue<E>>) -> Vec<f64> {
        let mut out = Vec::new();
        while let Ok(handle) = queue.extract_min() {
            out.push(queue.get(handle).unwrap().value());
        }
        out
    }

    #[test]
    fn extracts_in_ascending_order() {
        let mut queue = BinaryHeapQueue::new();
        for (i, v) in [5.0, 3.0, 8.0, 1.0].into_iter().enumerate() {
            queue.insert(IndexedValue::new(i, v));
            assert_positions_consistent(&queue);
        }
        assert_eq!(drain_values(&mut queue), vec![1.0, 3.0, 5.0, 8.0]);
    }

    #[test]
    fn decrease_key_moves_element_to_the_root() {
        let mut queue = BinaryHeapQueue::new();
        queue.insert(IndexedValue::new('a', 5.0));
        queue.insert(IndexedValue::new('b', 3.0));
        let eight = queue.insert(IndexedValue::new('c', 8.0));
        queue.insert(IndexedValue::new('d', 1.0));

        queue.decrease_key(eight, |v| v.set_value(0.0)).unwrap();
        assert_positions_consistent(&queue);
        assert_eq!(queue.extract_min(), Ok(eight));
        assert_eq!(*queue.get(eight).unwrap().element(), 'c');
    }

    #[test]
    fn extract_on_empty_fails() {
        let mut queue: BinaryHeapQueue<IndexedValue<()>> = BinaryHeapQueue::new();
        assert_eq!(queue.extract_min(), Err(GraphError::EmptyQueue));
        assert!(queue.is_empty());
    }

    #[test]
    fn stale_handles_are_not_contained() {
        let mut queue = BinaryHeapQueue::new();
        let a = queue.insert(IndexedValue::new(0, 1.0));
        let b = queue.insert(IndexedValue::new(1, 2.0));
        assert!(queue.contains(a) && queue.contains(b));

        queue.extract_min().unwrap();
        assert!(!queue.contains(a));
        assert!(queue.contains(b));
        assert!(!queue.contains(99));
        assert!(queue.decrease_key(a, |v| v.set_value(0.0)).is_err());
    }

    #[test]
    fn heapify_builds_a_valid_heap() {
        let values = [9.0, 4.0, 7.0, 1.0, 8.0, 2.0, 6.0, 3.0, 5.0];
        let mut queue: BinaryHeapQueue<_> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| IndexedValue::new(i, v))
            .collect();
        assert_positions_consistent(&queue);
        // handles follow iteration order
        assert_eq!(queue.get(3).unwrap().value(), 1.0);
        assert_eq!(
            drain_values(&mut queue),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
        );
    }

    #[test]
    fn remove_from_the_middle_keeps_order() {
        let mut queue: BinaryHeapQueue<_> = (0..10)
            .map(|i| IndexedValue::new(i, f64::from(i)))
            .collect();
        queue.remove(4).unwrap();
        queue.remove(0).unwrap();
        assert_positions_consistent(&queue);
        assert!(queue.remove(4).is_err());
        assert_eq!(
            drain_values(&mut queue),
            vec![1.0, 2.0, 3.0, 5.0, 6.0, 7.0, 8.0, 9.0]
        );
    }

    #[test]
    fn clear_resets_positions() {
        let mut queue: BinaryHeapQueue<_> =
            (0..4).map(|i| IndexedValue::new(i, f64::from(i))).collect();
        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.into_elements().iter().all(|e| e.position().is_none()));
    }

    #[test]
    fn storage_doubles_when_full() {
        let mut queue = BinaryHeapQueue::with_capacity(2);
        queue.insert(IndexedValue::new(0, 1.0));
        queue.insert(IndexedValue::new(1, 2.0));
        queue.insert(IndexedValue::new(2, 3.0));
        assert!(queue.heap.capacity() >= 4);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn heap_sort_sorts() {
        assert_eq!(heap_sort(vec![5, 3, 8, 1]), vec![1, 3, 5, 8]);
        assert_eq!(heap_sort(Vec::<u8>::new()), Vec::<u8>::new());
        assert_eq!(heap_sort(vec!["pear", "apple", "fig"]), vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn test_randomized_consistency() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut queue = BinaryHeapQueue::new();
        let mut handles = Vec::new();

        for i in 0..200 {
            handles.push(queue.insert(IndexedValue::new(i, rng.random_range(0.0..1000.0))));
        }
        for _ in 0..100 {
            let handle = handles[rng.random_range(0..handles.len())];
            let lowered = queue.get(handle).unwrap().value() * rng.random_range(0.0..1.0);
            queue.decrease_key(handle, |v| v.set_value(lowered)).unwrap();
            assert_positions_consistent(&queue);
        }

        let drained = drain_values(&mut queue);
        assert_eq!(drained.len(), 200);
        assert!(drained.windows(2).all(|w| w[0] <= w[1]));
    }
}
