use crate::{
    error::{GraphError, Result},
    sets::queues::{IndexTracker, IndexedQueue},
};

/// An indexed min-queue backed by an unordered slot array.
///
/// Inserting appends a slot and lowering a key costs nothing beyond the
/// caller's update, since no order is maintained. `extract_min` pays for it
/// with a scan over every slot. Extracted slots are emptied, never compacted,
/// so positions stay stable for the queue's lifetime.
///
/// On a near-complete graph Dijkstra performs about as many decrease-keys as
/// there are edges, which makes this variant cheaper than a binary heap there.
///
/// # Time Complexity
/// - `insert`, `decrease_key`, `remove`, `contains`: O(1)
/// - `extract_min`: O(s) where s is the number of slots ever used
pub struct LinearQueue<T> {
    arena: Vec<T>,
    slots: Vec<Option<usize>>,
    queued: usize,
}

impl<T: IndexTracker + Ord> LinearQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        LinearQueue {
            arena: Vec::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
            queued: 0,
        }
    }

    fn queued_position(&self, handle: usize) -> Option<usize> {
        let position = self.arena.get(handle)?.position()?;
        match self.slots.get(position) {
            Some(&Some(held)) if held == handle => Some(position),
            _ => None,
        }
    }
}

impl<T: IndexTracker + Ord> Default for LinearQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: IndexTracker + Ord> IndexedQueue<T> for LinearQueue<T> {
    fn insert(&mut self, mut element: T) -> usize {
        let handle = self.arena.len();
        element.set_position(Some(self.slots.len()));
        self.arena.push(element);
        self.slots.push(Some(handle));
        self.queued += 1;
        handle
    }

    fn extract_min(&mut self) -> Result<usize> {
        // min_by keeps the first of equal minima, so ties go to the oldest slot
        let (position, handle) = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(position, slot)| slot.map(|handle| (position, handle)))
            .min_by(|(_, a), (_, b)| self.arena[*a].cmp(&self.arena[*b]))
            .ok_or(GraphError::EmptyQueue)?;

        self.slots[position] = None;
        self.arena[handle].set_position(None);
        self.queued -= 1;
        Ok(handle)
    }

    fn decrease_key<F>(&mut self, handle: usize, update: F) -> Result<()>
    where
        F: FnOnce(&mut T),
    {
        if self.queued_position(handle).is_none() {
            return Err(GraphError::InvalidArgument("element is not queued"));
        }
        // the next scan sees the new key; nothing to move
        update(&mut self.arena[handle]);
        Ok(())
    }

    fn remove(&mut self, handle: usize) -> Result<()> {
        let position = self
            .queued_position(handle)
            .ok_or(GraphError::InvalidArgument("element is not queued"))?;
        self.slots[position] = None;
        self.arena[handle].set_position(None);
        self.queued -= 1;
        Ok(())
    }

    fn contains(&self, handle: usize) -> bool {
        self.queued_position(handle).is_some()
    }

    fn get(&self, handle: usize) -> Option<&T> {
        self.arena.get(handle)
    }

    fn len(&self) -> usize {
        self.queued
    }

    fn clear(&mut self) {
        for handle in self.slots.drain(..).flatten() {
            self.arena[handle].set_position(None);
        }
        self.queued = 0;
    }

    fn into_elements(self) -> Vec<T> {
        self.arena
    }
}

impl<T: IndexTracker + Ord> FromIterator<T> for LinearQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = LinearQueue::new();
        for element in iter {
            queue.insert(element);
        }
        queue
    }
}
