use crate::graph::traits::VertexId;
use crate::graph::Graph;
use num_traits::{Float, Zero};
use std::collections::HashSet;
use std::fmt::Debug;

/// A path together with the total distance of its traversed edges
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPath<V, W>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy,
{
    /// Vertices in order, source to destination inclusive
    pub vertices: Vec<V>,

    /// Sum of the traversed edge weights
    pub distance: W,
}

impl<V, W> WeightedPath<V, W>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy,
{
    /// The first vertex of the path
    pub fn source(&self) -> Option<&V> {
        self.vertices.first()
    }

    /// The last vertex of the path
    pub fn destination(&self) -> Option<&V> {
        self.vertices.last()
    }

    /// Returns true if no vertex repeats within the path
    pub fn is_loopless(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.vertices.len());
        self.vertices.iter().all(|vertex| seen.insert(vertex))
    }
}

/// Trait for point-to-point shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<V, W>,
{
    /// Computes the lowest-cost simple path between two vertices, or `None`
    /// if the destination is unreachable
    fn shortest_path(&self, graph: &G, source: &V, destination: &V) -> Option<WeightedPath<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
