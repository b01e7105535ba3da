pub mod traits;
pub mod network;
pub mod suppress;

pub use traits::{Graph, MutableGraph, VertexId};
pub use network::Network;
pub use suppress::SuppressionScope;
