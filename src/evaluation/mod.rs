//! Tour evaluation against the edges of a graph.

mod tour_cost;

pub use tour_cost::{is_hamiltonian_cycle, tour_cost};
