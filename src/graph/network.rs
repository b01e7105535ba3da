use crate::graph::traits::{Graph, MutableGraph, VertexId};
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

/// A directed graph implementation using keyed adjacency maps
///
/// Each vertex maps to a map of its out-neighbours and edge weights. A
/// mirrored incoming-edge index is maintained alongside so that a backward
/// shortest-path search can traverse edges in reverse on asymmetric graphs.
#[derive(Debug, Clone, PartialEq)]
pub struct Network<V, W>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each vertex: vertex -> {target vertex -> weight}
    outgoing: HashMap<V, HashMap<V, W>>,

    /// Incoming edges for each vertex: vertex -> {source vertex -> weight}
    incoming: HashMap<V, HashMap<V, W>>,
}

impl<V, W> Network<V, W>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty network
    pub fn new() -> Self {
        Network {
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
        }
    }

    /// Creates a new network with capacity reserved for the given vertex count
    pub fn with_capacity(vertices: usize) -> Self {
        Network {
            outgoing: HashMap::with_capacity(vertices),
            incoming: HashMap::with_capacity(vertices),
        }
    }

    /// Returns an iterator over all vertices in the network
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.outgoing.keys()
    }

    /// Validate that the network doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        for edges in self.outgoing.values() {
            for weight in edges.values() {
                if *weight < W::zero() {
                    return false;
                }
            }
        }
        true
    }
}

impl<V, W> Default for Network<V, W>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Network::new()
    }
}

impl<V, W> Graph<V, W> for Network<V, W>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing.values().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        if let Some(edges) = self.outgoing.get(vertex) {
            Box::new(edges.iter().map(|(target, weight)| (target, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn incoming_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        if let Some(edges) = self.incoming.get(vertex) {
            Box::new(edges.iter().map(|(source, weight)| (source, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.outgoing.contains_key(vertex)
    }

    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.outgoing
            .get(from)
            .map_or(false, |edges| edges.contains_key(to))
    }

    fn get_edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.outgoing.get(from).and_then(|edges| edges.get(to)).copied()
    }
}

impl<V, W> MutableGraph<V, W> for Network<V, W>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.outgoing.contains_key(&vertex) {
            return false;
        }
        self.outgoing.insert(vertex.clone(), HashMap::new());
        self.incoming.insert(vertex, HashMap::new());
        true
    }

    fn add_edge(&mut self, from: V, to: V, weight: W) -> bool {
        if weight < W::zero() {
            return false;
        }

        // Both endpoints become vertices, so a destination with no outgoing
        // edges is still a key in the adjacency structure.
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());

        if let Some(edges) = self.outgoing.get_mut(&from) {
            edges.insert(to.clone(), weight);
        }
        if let Some(edges) = self.incoming.get_mut(&to) {
            edges.insert(from, weight);
        }

        true
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        let removed = self
            .outgoing
            .get_mut(from)
            .map_or(false, |edges| edges.remove(to).is_some());

        if let Some(edges) = self.incoming.get_mut(to) {
            edges.remove(from);
        }

        removed
    }

    fn update_edge_weight(&mut self, from: &V, to: &V, weight: W) -> bool {
        let mut updated = false;

        if let Some(edge) = self.outgoing.get_mut(from).and_then(|edges| edges.get_mut(to)) {
            *edge = weight;
            updated = true;
        }

        if let Some(edge) = self.incoming.get_mut(to).and_then(|edges| edges.get_mut(from)) {
            *edge = weight;
        }

        updated
    }
}
