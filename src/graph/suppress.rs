use crate::graph::traits::{MutableGraph, VertexId};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Returns the sentinel weight that disables an edge
///
/// A disabled edge is effectively absent: its weight compares greater than
/// any finite tentative distance, so a monotone relaxation never folds it
/// into a finite-valued label.
pub fn disabled<W: Float>() -> W {
    W::infinity()
}

/// Returns true if the weight marks a disabled edge
pub fn is_disabled<W: Float>(weight: W) -> bool {
    weight.is_infinite()
}

/// Scoped edge suppression with guaranteed restoration
///
/// Records the original weight of every edge it disables and writes the
/// weights back when dropped, so the graph is restored on every exit path of
/// a spur search, including the no-path branch. Re-suppressing an edge that
/// is already disabled within the scope is a no-op, which keeps the saved
/// list free of sentinel values.
#[derive(Debug)]
pub struct SuppressionScope<'g, V, W, G>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy,
    G: MutableGraph<V, W>,
{
    graph: &'g mut G,
    saved: Vec<(V, V, W)>,
}

impl<'g, V, W, G> SuppressionScope<'g, V, W, G>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy,
    G: MutableGraph<V, W>,
{
    /// Opens a suppression scope over the graph
    pub fn new(graph: &'g mut G) -> Self {
        SuppressionScope {
            graph,
            saved: Vec::new(),
        }
    }

    /// Disables a single edge, remembering its current weight
    pub fn suppress_edge(&mut self, from: &V, to: &V) {
        match self.graph.get_edge_weight(from, to) {
            Some(weight) if !is_disabled(weight) => {
                self.saved.push((from.clone(), to.clone(), weight));
                self.graph.update_edge_weight(from, to, disabled());
            }
            _ => {}
        }
    }

    /// Disables every outgoing edge of a vertex
    pub fn suppress_outgoing(&mut self, vertex: &V) {
        let targets: Vec<V> = self
            .graph
            .outgoing_edges(vertex)
            .map(|(target, _)| target.clone())
            .collect();
        for target in &targets {
            self.suppress_edge(vertex, target);
        }
    }

    /// Returns the suppressed view of the graph
    pub fn graph(&self) -> &G {
        self.graph
    }

    /// Returns the number of edges currently suppressed by this scope
    pub fn suppressed_count(&self) -> usize {
        self.saved.len()
    }
}

impl<'g, V, W, G> Drop for SuppressionScope<'g, V, W, G>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy,
    G: MutableGraph<V, W>,
{
    fn drop(&mut self) {
        for (from, to, weight) in self.saved.drain(..) {
            self.graph.update_edge_weight(&from, &to, weight);
        }
    }
}
