//! # outerplanar_mis
//!
//! Size of a maximum independent set for the two base cases of outerplanar graphs:
//! trees and simple cycles.
//!
//! Based on [`petgraph`](https://docs.rs/petgraph).
//!
//! The input is an edge list such as `"1-2,2-3,3-1"`. Trees are solved exactly with a
//! linear dynamic program, a single cycle on `n` vertices has answer `⌊n / 2⌋`.
//!
//! ```
//! use outerplanar_mis::compute_mis;
//!
//! assert_eq!(compute_mis("1-2,2-3"), Ok(2));
//! assert_eq!(compute_mis("1-2,2-3,3-4,4-1"), Ok(2));
//! assert!(compute_mis("1-2,foo").is_err());
//! ```

pub mod classify;
pub mod config;
pub mod cycle_basis;
pub mod cycle_mis;
pub mod error;
pub mod input;
pub mod output;
pub mod tree_mis;
pub mod types;

#[cfg(test)]
mod testing;

pub use config::{CyclePolicy, SolverConfig};
pub use error::MisError;
pub use types::LabelGraph;
pub use types::Topology;

use tracing::debug;

/// Parses an edge list and returns the size of its maximum independent set.
///
/// Blank input is the empty graph and gives `0`. Each call builds a fresh graph,
/// nothing is shared between calls.
pub fn solve(input: &str, config: &SolverConfig) -> Result<usize, MisError> {
    if input.trim().is_empty() {
        return Ok(0);
    }

    let graph = input::from_str(input)?;
    let mis = match classify::classify(&graph) {
        Topology::Empty => 0,
        Topology::Tree => tree_mis::tree_mis(&graph),
        Topology::Cyclic => cycle_mis::cycle_mis(&graph, config.cycle_policy)?,
    };
    debug!(mis, "solved");
    Ok(mis)
}

/// [`solve`] with the default (lenient) configuration.
pub fn compute_mis(input: &str) -> Result<usize, MisError> {
    solve(input, &SolverConfig::default())
}
