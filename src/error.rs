//! Error types for graph construction and queries.

use thiserror::Error;

/// Why an edge was rejected during graph construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EdgeDefect {
    /// One endpoint is not a node of the graph.
    #[error("endpoint '{0}' is not a known node")]
    UnknownEndpoint(String),

    /// Both endpoints are the same node.
    #[error("self-loops are not allowed")]
    SelfLoop,

    /// An edge between the two endpoints already exists.
    #[error("an edge between these nodes already exists")]
    Duplicate,

    /// Weight is negative.
    #[error("weight {0} is negative")]
    NegativeWeight(f64),

    /// Weight is NaN or infinite.
    #[error("weight is not finite")]
    NonFiniteWeight,
}

/// Errors reported by graph construction and graph queries.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A node label was added twice.
    #[error("node '{0}' already exists")]
    DuplicateNode(String),

    /// A node label or id does not belong to the graph.
    #[error("unknown node '{0}'")]
    UnknownNode(String),

    /// Malformed edge construction.
    #[error("invalid edge {u} - {v}: {reason}")]
    InvalidEdge {
        u: String,
        v: String,
        reason: EdgeDefect,
    },

    /// The target cannot be reached from the origin.
    #[error("no path from {from} to {to}")]
    NoPath { from: String, to: String },

    /// No tour exists because some node is unreachable.
    #[error("graph is disconnected: {unreachable} cannot be reached from {start}")]
    DisconnectedGraph { start: String, unreachable: String },

    /// A tour step uses a pair of nodes that share no edge.
    #[error("tour step {from} -> {to} has no edge")]
    MissingEdge { from: String, to: String },

    /// Dirac/Ore need at least three vertices.
    #[error("{theorem}'s theorem needs at least 3 vertices, graph has {nodes}")]
    IndeterminateTheorem { theorem: &'static str, nodes: usize },

    /// Failed to parse a network description.
    #[error("failed to parse network description: {0}")]
    Parse(#[from] serde_json::Error),

    /// Failed to read a network description.
    #[error("failed to read network description: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
