//! Dense distance matrices.
//!
//! Provides the matrix type behind adjacency export and the metric closure
//! used for tour construction.

mod matrix;

pub use matrix::DistanceMatrix;
