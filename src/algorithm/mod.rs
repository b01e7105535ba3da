pub mod traits;
pub mod bidirectional;
pub mod yen;

pub use traits::{ShortestPathAlgorithm, WeightedPath};
