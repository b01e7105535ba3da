use log::{debug, trace};
use num_traits::{Float, Zero};
use rayon::prelude::*;
use std::fmt::Debug;

use crate::algorithm::bidirectional::BidirectionalDijkstra;
use crate::algorithm::{ShortestPathAlgorithm, WeightedPath};
use crate::graph::suppress::SuppressionScope;
use crate::graph::traits::VertexId;
use crate::graph::{Graph, Network};

/// K shortest loopless paths via Yen's algorithm
///
/// Owns all transient mutation of the network it is given: every spur search
/// runs against a suppressed view whose weights are restored before the next
/// logical operation reads the graph. After a full enumeration the network
/// weights are identical to what they were before the call.
///
/// With `with_parallel_spurs(true)`, the spur positions of each round are
/// evaluated concurrently, each worker on its own cloned network. Candidates
/// are collected in spur-index order, so results are identical to the
/// sequential mode.
#[derive(Debug, Default)]
pub struct Yen {
    engine: BidirectionalDijkstra,
    parallel_spurs: bool,
}

/// Everything one spur search needs, computed against unsuppressed weights
struct SpurPlan<V, W> {
    /// Prefix of the branched path up to and including the spur vertex
    root: Vec<V>,
    /// Cost of the root prefix
    root_cost: W,
    /// Spur-vertex exits taken by accepted paths sharing this root
    blocked_edges: Vec<(V, V)>,
    /// Root vertices whose outgoing edges are disabled for looplessness
    blocked_vertices: Vec<V>,
}

impl Yen {
    /// Creates a new enumerator with sequential spur evaluation
    pub fn new() -> Self {
        Yen {
            engine: BidirectionalDijkstra::new(),
            parallel_spurs: false,
        }
    }

    /// Enable or disable parallel evaluation of the spurs within a round
    pub fn with_parallel_spurs(mut self, enabled: bool) -> Self {
        self.parallel_spurs = enabled;
        self
    }

    /// Computes up to `k` loopless paths from `source` to `destination` in
    /// non-decreasing distance order.
    ///
    /// Returns an empty vector when no path exists at all; returns fewer than
    /// `k` entries when fewer loopless paths exist. Neither is an error.
    pub fn k_shortest_paths<V, W>(
        &self,
        network: &mut Network<V, W>,
        source: &V,
        destination: &V,
        k: usize,
    ) -> Vec<WeightedPath<V, W>>
    where
        V: VertexId + Send + Sync,
        W: Float + Zero + Debug + Copy + Ord + Send + Sync,
    {
        if k == 0 {
            return Vec::new();
        }

        let first = match self.engine.shortest_path(network, source, destination) {
            Some(path) => path,
            None => return Vec::new(),
        };
        debug!(
            "shortest path has {} vertices, distance {:?}",
            first.vertices.len(),
            first.distance
        );

        let mut accepted = vec![first];
        let mut pool: Vec<WeightedPath<V, W>> = Vec::new();

        while accepted.len() < k {
            let plans = spur_plans(network, &accepted);

            let found = if self.parallel_spurs {
                let shared: &Network<V, W> = network;
                plans
                    .par_iter()
                    .map(|plan| {
                        // Worker-confined copy; the shared network is never
                        // touched from the parallel round.
                        let mut copy = shared.clone();
                        self.evaluate_spur(&mut copy, plan, destination)
                    })
                    .collect::<Vec<_>>()
            } else {
                plans
                    .iter()
                    .map(|plan| self.evaluate_spur(network, plan, destination))
                    .collect()
            };

            for candidate in found.into_iter().flatten() {
                offer(&mut pool, &accepted, candidate);
            }
            trace!("candidate pool holds {} paths", pool.len());

            match take_minimum(&mut pool) {
                Some(next) => {
                    debug!(
                        "accepted path {} with distance {:?}",
                        accepted.len() + 1,
                        next.distance
                    );
                    accepted.push(next);
                }
                None => break,
            }
        }

        accepted
    }

    /// Distance-only convenience over [`Yen::k_shortest_paths`]
    pub fn k_shortest_distances<V, W>(
        &self,
        network: &mut Network<V, W>,
        source: &V,
        destination: &V,
        k: usize,
    ) -> Vec<W>
    where
        V: VertexId + Send + Sync,
        W: Float + Zero + Debug + Copy + Ord + Send + Sync,
    {
        self.k_shortest_paths(network, source, destination, k)
            .into_iter()
            .map(|path| path.distance)
            .collect()
    }

    /// Runs one spur search under a suppression scope; the scope restores
    /// every disabled weight when it drops, on the found and not-found
    /// branches alike
    fn evaluate_spur<V, W>(
        &self,
        network: &mut Network<V, W>,
        plan: &SpurPlan<V, W>,
        destination: &V,
    ) -> Option<WeightedPath<V, W>>
    where
        V: VertexId,
        W: Float + Zero + Debug + Copy + Ord,
    {
        let spur_vertex = plan.root.last()?;

        let mut scope = SuppressionScope::new(network);
        for (from, to) in &plan.blocked_edges {
            scope.suppress_edge(from, to);
        }
        for vertex in &plan.blocked_vertices {
            scope.suppress_outgoing(vertex);
        }

        let spur_path = self
            .engine
            .shortest_path(scope.graph(), spur_vertex, destination)?;

        // Root minus its last vertex, so the spur vertex appears once
        let mut vertices = plan.root[..plan.root.len() - 1].to_vec();
        vertices.extend(spur_path.vertices.iter().cloned());

        Some(WeightedPath {
            vertices,
            distance: plan.root_cost + spur_path.distance,
        })
    }
}

/// Builds the spur plans for one round from the most recently accepted path.
///
/// Every position except the last vertex is a spur, the source included.
/// Root costs and suppression sets are computed here, against original
/// weights, before any suppression is applied; recomputing the edge set from
/// the full accepted list replays every suppression previously applied for
/// the same root, since the accepted list only grows.
fn spur_plans<V, W>(
    network: &Network<V, W>,
    accepted: &[WeightedPath<V, W>],
) -> Vec<SpurPlan<V, W>>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy + Ord,
{
    let last = match accepted.last() {
        Some(path) => path,
        None => return Vec::new(),
    };

    let mut plans = Vec::new();
    for spur_index in 0..last.vertices.len().saturating_sub(1) {
        let root = &last.vertices[..=spur_index];

        let mut root_cost = W::zero();
        let mut complete = true;
        for pair in root.windows(2) {
            match network.get_edge_weight(&pair[0], &pair[1]) {
                Some(weight) => root_cost = root_cost + weight,
                None => {
                    complete = false;
                    break;
                }
            }
        }
        if !complete {
            continue;
        }

        let mut blocked_edges = Vec::new();
        for path in accepted {
            if path.vertices.len() > spur_index + 1 && path.vertices[..=spur_index] == *root {
                blocked_edges.push((
                    path.vertices[spur_index].clone(),
                    path.vertices[spur_index + 1].clone(),
                ));
            }
        }

        plans.push(SpurPlan {
            root: root.to_vec(),
            root_cost,
            blocked_edges,
            blocked_vertices: root[..spur_index].to_vec(),
        });
    }

    plans
}

/// Admits a candidate into the pool unless its vertex sequence duplicates an
/// accepted path or a pooled candidate
fn offer<V, W>(
    pool: &mut Vec<WeightedPath<V, W>>,
    accepted: &[WeightedPath<V, W>],
    candidate: WeightedPath<V, W>,
) where
    V: VertexId,
    W: Float + Zero + Debug + Copy,
{
    let duplicate = accepted
        .iter()
        .chain(pool.iter())
        .any(|path| path.vertices == candidate.vertices);
    if !duplicate {
        pool.push(candidate);
    }
}

/// Extracts the minimum-distance candidate, first minimum wins
fn take_minimum<V, W>(pool: &mut Vec<WeightedPath<V, W>>) -> Option<WeightedPath<V, W>>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy + Ord,
{
    let mut best: Option<usize> = None;
    for (index, candidate) in pool.iter().enumerate() {
        let better = match best {
            None => true,
            Some(current) => candidate.distance < pool[current].distance,
        };
        if better {
            best = Some(index);
        }
    }
    best.map(|index| pool.remove(index))
}
