use std::{fmt::Debug, iter::Flatten};

use hashbrown::HashMap;

use crate::graph::VertexId;

/// One adjacency entry: the vertex on the other side and the edge weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
    pub id: VertexId,
    pub weight: f64,
}

/// The neighbors of a single vertex, in the order the edges were added.
///
/// Holds at most one entry per neighbor. The graph keeps both endpoints of an
/// edge in sync; this type only guards its own half.
///
/// Entries live in an ordered vector with a hashed position index beside it.
/// Removal leaves a hole that iteration skips; once holes outnumber entries
/// the vector is compacted, keeping every operation amortized O(1).
#[derive(Clone, Default)]
pub struct NeighborSet {
    entries: Vec<Option<Neighbor>>,
    positions: HashMap<VertexId, usize>,
}

impl NeighborSet {
    pub fn new() -> Self {
        NeighborSet {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    fn find(&self, id: VertexId) -> Option<&Neighbor> {
        let &index = self.positions.get(&id)?;
        self.entries[index].as_ref()
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.positions.contains_key(&id)
    }

    pub fn weight(&self, id: VertexId) -> Option<f64> {
        self.find(id).map(|n| n.weight)
    }

    /// Appends `id` with `weight`. Returns `false`, leaving the set untouched,
    /// when `id` is already present.
    pub fn insert(&mut self, id: VertexId, weight: f64) -> bool {
        if self.contains(id) {
            return false;
        }
        self.positions.insert(id, self.entries.len());
        self.entries.push(Some(Neighbor { id, weight }));
        true
    }

    /// Removes `id`, returning the weight of the dropped entry.
    pub fn remove(&mut self, id: VertexId) -> Option<f64> {
        let index = self.positions.remove(&id)?;
        let removed = self.entries[index].take()?;
        if self.holes() > self.positions.len() {
            self.compact();
        }
        Some(removed.weight)
    }

    /// Overwrites the weight of an existing entry. Returns `false` if `id` is
    /// not a neighbor.
    pub fn set_weight(&mut self, id: VertexId, weight: f64) -> bool {
        let Some(&index) = self.positions.get(&id) else {
            return false;
        };
        match self.entries[index].as_mut() {
            Some(entry) => {
                entry.weight = weight;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        self.entries.iter().flatten()
    }

    fn holes(&self) -> usize {
        self.entries.len() - self.positions.len()
    }

    fn compact(&mut self) {
        self.entries.retain(Option::is_some);
        for (index, entry) in self.entries.iter().flatten().enumerate() {
            self.positions.insert(entry.id, index);
        }
    }
}

/// Iterator over the entries of a [`NeighborSet`], in insertion order.
pub type Iter<'a> = Flatten<std::slice::Iter<'a, Option<Neighbor>>>;

impl<'a> IntoIterator for &'a NeighborSet {
    type Item = &'a Neighbor;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Debug for NeighborSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NeighborSet")
            .field("neighbors", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(i: usize) -> VertexId {
        VertexId::new(i)
    }

    #[test]
    fn test_new_is_empty() {
        let set = NeighborSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn test_insert_keeps_insertion_order() {
        let mut set = NeighborSet::new();
        assert!(set.insert(id(5), 1.0));
        assert!(set.insert(id(2), 2.0));
        assert!(set.insert(id(9), 3.0));
        assert_eq!(
            set.iter().map(|n| n.id.index()).collect::<Vec<_>>(),
            vec![5, 2, 9]
        );
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut set = NeighborSet::new();
        assert!(set.insert(id(1), 1.0));
        assert!(!set.insert(id(1), 4.0));
        assert_eq!(set.len(), 1);
        assert_eq!(set.weight(id(1)), Some(1.0));
    }

    #[test]
    fn test_remove_returns_weight() {
        let mut set = NeighborSet::new();
        set.insert(id(1), 1.5);
        set.insert(id(2), 2.5);
        set.insert(id(3), 3.5);
        assert_eq!(set.remove(id(2)), Some(2.5));
        assert_eq!(set.remove(id(2)), None);
        assert!(!set.contains(id(2)));
        assert_eq!(
            set.iter().map(|n| n.id.index()).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn test_order_survives_compaction() {
        let mut set = NeighborSet::new();
        for i in 0..10 {
            set.insert(id(i), i as f64 + 1.0);
        }
        // five holes among ten slots stay put, a sixth triggers compaction
        for i in (0..10).step_by(2) {
            assert_eq!(set.remove(id(i)), Some(i as f64 + 1.0));
        }
        assert_eq!(set.entries.len(), 10);
        set.remove(id(9));
        assert_eq!(set.entries.len(), 4);
        set.insert(id(0), 0.5);
        assert_eq!(
            set.iter().map(|n| n.id.index()).collect::<Vec<_>>(),
            vec![1, 3, 5, 7, 0]
        );
        assert_eq!(set.len(), 5);
        for i in [1usize, 3, 5, 7] {
            assert_eq!(set.weight(id(i)), Some(i as f64 + 1.0));
        }
        assert!(set.set_weight(id(7), 2.0));
        assert_eq!(set.weight(id(7)), Some(2.0));
        assert!(!set.contains(id(9)));
    }

    #[test]
    fn test_churn_keeps_storage_small() {
        let mut set = NeighborSet::new();
        set.insert(id(0), 1.0);
        for i in 1..10_000 {
            set.insert(id(i), 1.0);
            set.remove(id(i));
        }
        assert_eq!(set.len(), 1);
        assert!(set.entries.len() <= 2);
        assert_eq!(set.iter().count(), 1);
    }

    #[test]
    fn test_set_weight() {
        let mut set = NeighborSet::new();
        set.insert(id(4), 1.0);
        assert!(set.set_weight(id(4), 7.0));
        assert!(!set.set_weight(id(5), 7.0));
        assert_eq!(set.weight(id(4)), Some(7.0));
        assert_eq!(set.weight(id(5)), None);
    }

    #[test]
    fn test_debug_formatting() {
        let mut set = NeighborSet::new();
        set.insert(id(7), 0.5);
        let debug_string = format!("{set:?}");
        assert!(debug_string.contains("NeighborSet"));
        assert!(debug_string.contains("neighbors"));
        assert!(debug_string.contains("0.5"));
    }
}
