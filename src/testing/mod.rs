//! Graph generators and reference solvers used by the unit tests.

pub mod brute_force;
pub mod graph_enumerator;
pub mod random_graphs;
pub mod shapes;
