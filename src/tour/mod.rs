//! Approximate traveling-salesman tours.
//!
//! - [`approximate_tour`] — Nearest neighbor + 2-opt + Or-opt, kept on
//!   direct edges whenever a Hamiltonian cycle is found
//! - [`nearest_neighbor_route`] — Greedy construction, O(n²)
//! - [`two_opt_improve`] — Segment reversal (Croes, 1958)
//! - [`or_opt_improve`] — Segment relocation (Or, 1976)
//! - [`tour_cost`] — Cost of a node order over direct edges

mod approximate;
mod hamiltonian;
mod nearest_neighbor;
mod or_opt;
mod two_opt;

pub use approximate::{approximate_tour, approximate_tour_from};
pub use nearest_neighbor::nearest_neighbor_route;
pub use or_opt::{or_opt_improve, route_distance};
pub use two_opt::two_opt_improve;

pub use crate::evaluation::tour_cost;
