use std::cmp::Ordering;

use crate::sets::queues::TotalF64;

/// A value that remembers where an indexed queue keeps it.
///
/// The queue writes the position on every move and resets it to `None` when
/// the value leaves the queue. Implementors only store it; they must never
/// change it on their own.
pub trait IndexTracker {
    /// Slot currently holding this value, `None` when it is not queued.
    fn position(&self) -> Option<usize>;

    /// Records the slot holding this value. Called by the queue only.
    fn set_position(&mut self, position: Option<usize>);
}

/// An element paired with an `f64` priority, ordered by that priority.
///
/// This is the ready-made [`IndexTracker`] for callers that just want to
/// queue arbitrary payloads by a numeric key.
///
/// ```
/// use waypoint::sets::queues::{BinaryHeapQueue, IndexedQueue, IndexedValue};
///
/// let mut queue = BinaryHeapQueue::new();
/// let slow = queue.insert(IndexedValue::new("slow", 8.0));
/// queue.insert(IndexedValue::new("fast", 3.0));
///
/// queue.decrease_key(slow, |v| v.set_value(1.0)).unwrap();
/// let first = queue.extract_min().unwrap();
/// assert_eq!(*queue.get(first).unwrap().element(), "slow");
/// ```
#[derive(Debug, Clone)]
pub struct IndexedValue<E> {
    element: E,
    value: TotalF64,
    position: Option<usize>,
}

impl<E> IndexedValue<E> {
    pub fn new(element: E, value: f64) -> Self {
        IndexedValue {
            element,
            value: value.into(),
            position: None,
        }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn into_element(self) -> E {
        self.element
    }

    pub fn value(&self) -> f64 {
        self.value.0
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value.into();
    }
}

impl<E> IndexTracker for IndexedValue<E> {
    fn position(&self) -> Option<usize> {
        self.position
    }

    fn set_position(&mut self, position: Option<usize>) {
        self.position = position;
    }
}

// only the priority takes part in comparisons; the payload and the position
// are irrelevant to the queue order
impl<E> PartialEq for IndexedValue<E> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<E> Eq for IndexedValue<E> {}

impl<E> PartialOrd for IndexedValue<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for IndexedValue<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}
