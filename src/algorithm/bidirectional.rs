use log::trace;
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, WeightedPath};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::suppress;
use crate::graph::traits::VertexId;
use crate::graph::Graph;

/// Point-to-point bidirectional Dijkstra
///
/// Runs one Dijkstra frontier from the source over outgoing edges and one
/// from the destination over incoming edges, advancing both in lockstep. The
/// backward frontier traverses the graph's reverse adjacency, so the search
/// is exact on asymmetric directed graphs. The search terminates when either
/// frontier exhausts its queue, at which point the exhausted direction has
/// settled every vertex it can reach and the best meeting sum is final.
#[derive(Debug, Default)]
pub struct BidirectionalDijkstra;

impl BidirectionalDijkstra {
    /// Creates a new bidirectional Dijkstra instance
    pub fn new() -> Self {
        BidirectionalDijkstra
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

/// Best meeting of the two frontiers seen so far
struct Meeting<V, W> {
    vertex: V,
    distance: W,
}

/// One search direction: tentative distances, predecessor links, and the
/// frontier queue
struct Frontier<V, W>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy + Ord,
{
    distances: HashMap<V, W>,
    predecessors: HashMap<V, V>,
    queue: BinaryHeapWrapper<V, W>,
}

impl<V, W> Frontier<V, W>
where
    V: VertexId,
    W: Float + Zero + Debug + Copy + Ord,
{
    fn seeded(origin: &V) -> Self {
        let mut distances = HashMap::new();
        distances.insert(origin.clone(), W::zero());
        let mut queue = BinaryHeapWrapper::new();
        queue.push(origin.clone(), W::zero());
        Frontier {
            distances,
            predecessors: HashMap::new(),
            queue,
        }
    }

    /// Pops and settles one vertex; returns false once the queue is empty.
    ///
    /// The meeting check runs before the stale-entry skip: any popped vertex
    /// with a tentative distance in the other direction is a meeting
    /// candidate, and the first minimum sum wins (equal sums never replace
    /// it).
    fn advance<G>(
        &mut self,
        graph: &G,
        direction: Direction,
        other: &Frontier<V, W>,
        meeting: &mut Option<Meeting<V, W>>,
    ) -> bool
    where
        G: Graph<V, W>,
    {
        let (vertex, priority) = match self.queue.pop() {
            Some(entry) => entry,
            None => return false,
        };

        let settled = match self.distances.get(&vertex) {
            Some(distance) => *distance,
            None => return true,
        };

        if let Some(other_distance) = other.distances.get(&vertex) {
            let total = settled + *other_distance;
            let improves = match meeting {
                None => true,
                Some(best) => total < best.distance,
            };
            if improves {
                trace!("frontiers meet at {:?}, total distance {:?}", vertex, total);
                *meeting = Some(Meeting {
                    vertex: vertex.clone(),
                    distance: total,
                });
            }
        }

        // Standard stale-entry skip
        if priority > settled {
            return true;
        }

        let neighbours = match direction {
            Direction::Forward => graph.outgoing_edges(&vertex),
            Direction::Backward => graph.incoming_edges(&vertex),
        };

        for (neighbour, weight) in neighbours {
            // Disabled edges are effectively absent
            if suppress::is_disabled(weight) {
                continue;
            }

            let candidate = settled + weight;
            let improves = match self.distances.get(neighbour) {
                None => true,
                Some(current) => candidate < *current,
            };

            if improves {
                self.distances.insert(neighbour.clone(), candidate);
                self.predecessors.insert(neighbour.clone(), vertex.clone());
                self.queue.push(neighbour.clone(), candidate);
            }
        }

        true
    }

    /// Walks predecessor links from a vertex back to the frontier's origin
    fn walk_to_origin(&self, from: &V, origin: &V) -> Option<Vec<V>> {
        let mut path = Vec::new();
        let mut current = from.clone();
        while current != *origin {
            path.push(current.clone());
            match self.predecessors.get(&current) {
                Some(previous) => current = previous.clone(),
                None => return None,
            }
        }
        path.push(origin.clone());
        Some(path)
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for BidirectionalDijkstra
where
    V: VertexId,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "BidirectionalDijkstra"
    }

    fn shortest_path(&self, graph: &G, source: &V, destination: &V) -> Option<WeightedPath<V, W>> {
        if source == destination {
            return Some(WeightedPath {
                vertices: vec![source.clone()],
                distance: W::zero(),
            });
        }

        let mut forward = Frontier::seeded(source);
        let mut backward = Frontier::seeded(destination);
        let mut meeting: Option<Meeting<V, W>> = None;

        loop {
            if !forward.advance(graph, Direction::Forward, &backward, &mut meeting) {
                break;
            }
            if !backward.advance(graph, Direction::Backward, &forward, &mut meeting) {
                break;
            }
        }

        let meeting = meeting?;

        // Meeting vertex to source, reversed to source-first order
        let mut vertices = forward.walk_to_origin(&meeting.vertex, source)?;
        vertices.reverse();

        // Backward predecessor links already point towards the destination
        let tail = backward.walk_to_origin(&meeting.vertex, destination)?;
        vertices.extend(tail.into_iter().skip(1));

        Some(WeightedPath {
            vertices,
            distance: meeting.distance,
        })
    }
}
