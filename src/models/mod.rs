//! Domain model types for road networks.
//!
//! Provides the core abstractions: an immutable undirected weighted graph
//! built through a validating builder, paths and tours through it, and the
//! weight formula that turns raw road measurements into edge weights.

mod graph;
mod path;
mod tour;
mod weight;

pub use graph::{Edge, EdgeKey, Graph, GraphBuilder, NodeId};
pub use path::Path;
pub use tour::Tour;
pub use weight::road_weight;
