//! K Shortest Loopless Paths
//!
//! This library computes the k shortest loopless (simple) paths between a
//! source and a destination vertex in a weighted directed graph. It combines
//! a point-to-point bidirectional Dijkstra search with Yen's algorithm for
//! enumerating successive loopless alternatives in non-decreasing distance
//! order.
//!
//! Edge weights must be real and non-negative; results are exact and
//! deterministic, including tie-breaks between equal-distance candidates.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod request;

pub use algorithm::{
    bidirectional::BidirectionalDijkstra, yen::Yen, ShortestPathAlgorithm, WeightedPath,
};
/// Re-export main types for convenient use
pub use graph::network::Network;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Source vertex '{0}' not found in network")]
    SourceNotFound(String),

    #[error("Destination vertex '{0}' not found in network")]
    DestinationNotFound(String),

    #[error("Requested path count must be at least 1")]
    InvalidPathCount,

    #[error("Malformed network description: {0}")]
    MalformedInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
