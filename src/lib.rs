//! # road-graph
//!
//! Weighted road-network analysis: Hamiltonicity certificates, shortest
//! paths, transitive closure, and approximate traveling-salesman tours over
//! an immutable undirected graph.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Graph, GraphBuilder, Path, Tour, road weights)
//! - [`config`] — Serde network description and the built-in sample network
//! - [`distance`] — Dense distance matrix
//! - [`theorems`] — Dirac and Ore sufficient conditions
//! - [`shortest_path`] — Dijkstra, farthest-node and all-pairs queries
//! - [`closure`] — Connected components and transitive closure
//! - [`tour`] — Approximate minimum-cost Hamiltonian cycle
//! - [`evaluation`] — Tour cost over direct edges
//! - [`error`] — Error type shared by all modules

pub mod closure;
pub mod config;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod shortest_path;
pub mod theorems;
pub mod tour;

pub use error::{GraphError, Result};
