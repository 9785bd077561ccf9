use std::{
    fmt::{self, Debug, Display},
    hash::Hash,
};

use hashbrown::HashMap;
use tracing::trace;

use crate::{
    error::{GraphError, Result},
    graph::{Vertex, VertexId, VertexRef, algo::VertexVisitor},
    sets::visited::{VisitedSet, VisitorSet},
};

/// In-memory undirected, weighted graph over user-supplied elements.
///
/// # Invariants
/// - `slots[i]` holds the vertex with index `i` and the slot's current
///   generation, or nothing while the slot sits in `free`.
/// - `head`/`tail` and the per-slot links thread every live slot in
///   insertion order, independently of slot reuse.
/// - `index` maps the element of every live vertex to its id, and nothing
///   else.
/// - Edges are symmetric: if `a` lists `b` with weight `w`, `b` lists `a`
///   with the very same `w`. Weights are finite and strictly positive.
/// - No vertex lists itself, and no vertex lists the same neighbor twice.
/// - `edges` equals half the sum of all degrees.
///
/// Every operation validates its arguments before touching anything, so an
/// `Err` always leaves the graph unchanged.
///
/// Searches (`bfs`, `dfs`, `shortest_path`, `dijkstra`, ...) keep their
/// scratch state in per-call tables and only need `&self`; several can run
/// at once on a shared graph.
#[derive(Clone)]
pub struct Graph<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    index: HashMap<T, VertexId>,
    edges: usize,
}

#[derive(Clone)]
struct Slot<T> {
    vertex: Option<Vertex<T>>,
    generation: u32,
    // insertion-order neighbors among live slots
    prev: Option<usize>,
    next: Option<usize>,
}

impl<T> Slot<T> {
    fn vacant() -> Self {
        Slot {
            vertex: None,
            generation: 0,
            prev: None,
            next: None,
        }
    }
}

impl<T> Graph<T> {
    pub fn new() -> Self {
        Graph {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            index: HashMap::new(),
            edges: 0,
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Number of vertex slots, live or free. Freed slots are reused, so this
    /// is the largest number of vertices the graph has held at once. Every
    /// [`VertexId`] of this graph indexes below it.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The live vertex in `id`.
    ///
    /// # Panics
    /// If `id` is vacant. Ids reached through adjacency are always live.
    pub(crate) fn slot(&self, id: VertexId) -> &Vertex<T> {
        self.slots[id.index()]
            .vertex
            .as_ref()
            .expect("adjacency refers to a removed vertex")
    }

    fn slot_mut(&mut self, id: VertexId) -> &mut Vertex<T> {
        self.slots[id.index()]
            .vertex
            .as_mut()
            .expect("adjacency refers to a removed vertex")
    }

    /// Element behind `id`, or `None` if that vertex has been removed since.
    pub fn element(&self, id: VertexId) -> Option<&T> {
        let slot = self.slots.get(id.index())?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.vertex.as_ref().map(|v| &v.element)
    }

    /// Live vertices in insertion order.
    pub(crate) fn live(&self) -> impl Iterator<Item = (VertexId, &Vertex<T>)> {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let index = cursor?;
            let slot = &self.slots[index];
            cursor = slot.next;
            let vertex = slot.vertex.as_ref()?;
            Some((VertexId::with_generation(index, slot.generation), vertex))
        })
    }

    /// Elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.live().map(|(_, v)| &v.element)
    }

    /// Views of every vertex in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexRef<'_, T>> {
        self.live().map(|(id, v)| VertexRef::new(self, id, v))
    }

    /// Calls `visitor` on every vertex in insertion order.
    pub fn for_each_vertex<V: VertexVisitor<T>>(&self, mut visitor: V) {
        for vertex in self.vertices() {
            visitor.act_on(vertex);
        }
    }

    /// Removes every vertex and edge. Slots are kept for reuse and every id
    /// handed out so far goes stale.
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.vertex.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index);
            }
            slot.prev = None;
            slot.next = None;
        }
        self.head = None;
        self.tail = None;
        self.index.clear();
        self.edges = 0;
    }

    /// Claims a slot for `vertex` and appends it to the insertion order.
    fn occupy(&mut self, vertex: Vertex<T>) -> VertexId {
        let index = self.free.pop().unwrap_or_else(|| {
            self.slots.push(Slot::vacant());
            self.slots.len() - 1
        });
        let tail = self.tail;
        let slot = &mut self.slots[index];
        slot.vertex = Some(vertex);
        slot.prev = tail;
        slot.next = None;
        let id = VertexId::with_generation(index, slot.generation);

        match tail {
            Some(tail) => self.slots[tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        id
    }

    /// Empties the slot of `id`, unlinks it and queues it for reuse.
    fn vacate(&mut self, id: VertexId) -> Option<Vertex<T>> {
        let slot = &mut self.slots[id.index()];
        let vertex = slot.vertex.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        let (prev, next) = (slot.prev.take(), slot.next.take());

        match prev {
            Some(prev) => self.slots[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.slots[next].prev = prev,
            None => self.tail = prev,
        }
        self.free.push(id.index());
        Some(vertex)
    }
}

fn check_weight(weight: f64) -> Result<()> {
    // also rejects NaN
    if weight.is_finite() && weight > 0.0 {
        Ok(())
    } else {
        Err(GraphError::InvalidArgument(
            "weight must be a finite positive number",
        ))
    }
}

impl<T: Eq + Hash + Clone> Graph<T> {
    pub(crate) fn id_of(&self, element: &T) -> Result<VertexId> {
        self.index.get(element).copied().ok_or(GraphError::NotFound)
    }

    pub fn contains(&self, element: &T) -> bool {
        self.index.contains_key(element)
    }

    /// View of the vertex holding `element`.
    pub fn vertex(&self, element: &T) -> Result<VertexRef<'_, T>> {
        let id = self.id_of(element)?;
        Ok(VertexRef::new(self, id, self.slot(id)))
    }

    /// Adds `element` as an isolated vertex.
    ///
    /// # Errors
    /// [`GraphError::DuplicateElement`] if it is already present.
    pub fn add_vertex(&mut self, element: T) -> Result<VertexId> {
        if self.index.contains_key(&element) {
            return Err(GraphError::DuplicateElement);
        }
        let key = element.clone();
        let id = self.occupy(Vertex::new(element));
        self.index.insert(key, id);
        trace!(vertex = id.index(), "added vertex");
        Ok(id)
    }

    /// Connects `a` and `b` with an edge of weight 1.
    pub fn connect(&mut self, a: &T, b: &T) -> Result<()> {
        self.connect_weighted(a, b, 1.0)
    }

    /// Connects `a` and `b` with an edge of weight `weight`.
    ///
    /// # Errors
    /// - [`GraphError::NotFound`] if `a` or `b` is absent.
    /// - [`GraphError::InvalidArgument`] if `a == b`, if they are already
    ///   connected, or if `weight` is not a finite positive number.
    pub fn connect_weighted(&mut self, a: &T, b: &T, weight: f64) -> Result<()> {
        let (id_a, id_b) = (self.id_of(a)?, self.id_of(b)?);
        if id_a == id_b {
            return Err(GraphError::InvalidArgument(
                "cannot connect an element to itself",
            ));
        }
        if self.slot(id_a).neighbors.contains(id_b) {
            return Err(GraphError::InvalidArgument("elements are already connected"));
        }
        check_weight(weight)?;

        self.slot_mut(id_a).neighbors.insert(id_b, weight);
        self.slot_mut(id_b).neighbors.insert(id_a, weight);
        self.edges += 1;
        trace!(a = id_a.index(), b = id_b.index(), weight, "connected");
        Ok(())
    }

    /// Removes the edge between `a` and `b`.
    ///
    /// # Errors
    /// - [`GraphError::NotFound`] if `a` or `b` is absent.
    /// - [`GraphError::InvalidArgument`] if they are not connected.
    pub fn disconnect(&mut self, a: &T, b: &T) -> Result<()> {
        let (id_a, id_b) = (self.id_of(a)?, self.id_of(b)?);
        if !self.slot(id_a).neighbors.contains(id_b) {
            return Err(GraphError::InvalidArgument("elements are not connected"));
        }

        self.slot_mut(id_a).neighbors.remove(id_b);
        self.slot_mut(id_b).neighbors.remove(id_a);
        self.edges -= 1;
        trace!(a = id_a.index(), b = id_b.index(), "disconnected");
        Ok(())
    }

    /// Removes `element` together with all of its edges and hands it back.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if it is absent.
    pub fn remove_vertex(&mut self, element: &T) -> Result<T> {
        let id = self.id_of(element)?;
        let vertex = self.vacate(id).ok_or(GraphError::NotFound)?;

        for neighbor in &vertex.neighbors {
            self.slot_mut(neighbor.id).neighbors.remove(id);
            self.edges -= 1;
        }
        self.index.remove(element);
        trace!(vertex = id.index(), degree = vertex.neighbors.len(), "removed vertex");
        Ok(vertex.element)
    }

    /// Whether `a` and `b` share an edge.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if `a` or `b` is absent.
    pub fn are_neighbors(&self, a: &T, b: &T) -> Result<bool> {
        let (id_a, id_b) = (self.id_of(a)?, self.id_of(b)?);
        Ok(self.slot(id_a).neighbors.contains(id_b))
    }

    /// Weight of the edge between `a` and `b`.
    ///
    /// # Errors
    /// - [`GraphError::NotFound`] if `a` or `b` is absent.
    /// - [`GraphError::InvalidArgument`] if they are not connected.
    pub fn weight(&self, a: &T, b: &T) -> Result<f64> {
        let (id_a, id_b) = (self.id_of(a)?, self.id_of(b)?);
        self.slot(id_a)
            .neighbors
            .weight(id_b)
            .ok_or(GraphError::InvalidArgument("elements are not connected"))
    }

    /// Changes the weight of the edge between `a` and `b`, on both sides.
    ///
    /// # Errors
    /// - [`GraphError::NotFound`] if `a` or `b` is absent.
    /// - [`GraphError::InvalidArgument`] if they are not connected or `weight`
    ///   is not a finite positive number.
    pub fn set_weight(&mut self, a: &T, b: &T, weight: f64) -> Result<()> {
        let (id_a, id_b) = (self.id_of(a)?, self.id_of(b)?);
        if !self.slot(id_a).neighbors.contains(id_b) {
            return Err(GraphError::InvalidArgument("elements are not connected"));
        }
        check_weight(weight)?;

        self.slot_mut(id_a).neighbors.set_weight(id_b, weight);
        self.slot_mut(id_b).neighbors.set_weight(id_a, weight);
        Ok(())
    }

    /// Total weight of the edges along `path`. Paths of zero or one element
    /// weigh 0.
    ///
    /// # Errors
    /// - [`GraphError::NotFound`] if an element is absent.
    /// - [`GraphError::InvalidArgument`] if two consecutive elements are not
    ///   connected.
    pub fn path_weight(&self, path: &[&T]) -> Result<f64> {
        if let [single] = path {
            self.id_of(single)?;
        }
        path.windows(2)
            .map(|pair| self.weight(pair[0], pair[1]))
            .sum()
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Topological equality: same vertex elements, same edge set. Weights are
/// not compared.
impl<T: Eq + Hash + Clone> PartialEq for Graph<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.edges != other.edges || self.len() != other.len() {
            return false;
        }

        self.live().all(|(_, vertex)| {
            let Ok(other_id) = other.id_of(&vertex.element) else {
                return false;
            };
            let other_vertex = other.slot(other_id);
            other_vertex.neighbors.len() == vertex.neighbors.len()
                && vertex.neighbors.iter().all(|n| {
                    other
                        .id_of(&self.slot(n.id).element)
                        .is_ok_and(|id| other_vertex.neighbors.contains(id))
                })
        })
    }
}

impl<T: Eq + Hash + Clone> Eq for Graph<T> {}

/// Renders `{a, b, c}, {(a, b), (b, c)}`: vertices in insertion order, then
/// every edge once, from its older endpoint.
impl<T: Display> Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (_, vertex)) in self.live().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", vertex.element)?;
        }

        write!(f, "}}, {{")?;
        let mut first = true;
        let mut printed = VisitedSet::new(self.capacity());
        for (id, vertex) in self.live() {
            printed.mark(id);
            for neighbor in vertex.neighbors.iter().filter(|n| !printed.is_visited(n.id)) {
                if !first {
                    write!(f, ", ")?;
                }
                first = false;
                write!(
                    f,
                    "({}, {})",
                    vertex.element,
                    self.slot(neighbor.id).element
                )?;
            }
        }
        write!(f, "}}")
    }
}

impl<T: Debug> Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.live().map(|(_, v)| v).collect::<Vec<_>>())
            .field("edges", &self.edges)
            .finish()
    }
}
