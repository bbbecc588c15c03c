//! Weighted shortest-path queries.
//!
//! - [`dijkstra`] — Single-source shortest-path tree, O(E log V)
//! - [`shortest_path`] / [`shortest_distance`] — Point-to-point queries
//! - [`farthest_reachable`] — Farthest candidate from a source
//! - [`all_pairs_shortest_paths`] — Every ordered pair, O(V·E log V)

mod all_pairs;
mod dijkstra;

pub use all_pairs::{all_pairs_shortest_paths, AllPairsShortestPaths};
pub use dijkstra::{
    dijkstra, farthest_reachable, shortest_distance, shortest_path, Farthest, ShortestPathTree,
};
