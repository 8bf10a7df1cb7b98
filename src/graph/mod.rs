pub mod traits;
pub mod directed;
pub mod generators;
pub mod networks;

pub use traits::{Graph, Node, Weight};
pub use directed::DirectedGraph;
