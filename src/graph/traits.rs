use num_traits::{Float, Zero};
use std::fmt::Debug;
use std::hash::Hash;

/// Marker bounds for vertex identifiers.
///
/// Vertices are opaque tokens: string labels at the input boundary, but any
/// cloneable, hashable type works. `Ord` is only used to break ties between
/// equal-priority heap entries deterministically.
pub trait VertexId: Clone + Eq + Hash + Ord + Debug {}

impl<V> VertexId for V where V: Clone + Eq + Hash + Ord + Debug {}

/// Trait representing a weighted directed graph
pub trait Graph<V, W>: Debug
where
    V: VertexId,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_>;

    /// Returns an iterator over the incoming edges to a vertex
    fn incoming_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &V, to: &V) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: &V, to: &V) -> Option<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex to the graph; returns false if it was already present
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Adds a directed edge between vertices with the given weight,
    /// registering missing endpoints as vertices
    fn add_edge(&mut self, from: V, to: V, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: &V, to: &V) -> bool;

    /// Updates the weight of an existing edge
    fn update_edge_weight(&mut self, from: &V, to: &V, weight: W) -> bool;
}
