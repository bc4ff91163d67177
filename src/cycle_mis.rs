use crate::LabelGraph;
use crate::config::CyclePolicy;
use crate::cycle_basis::{cycle_basis, is_simple_cycle};
use crate::error::MisError;
use crate::tree_mis::tree_mis;
use tracing::{debug, warn};

/// Computes the maximum independent set size of a graph expected to be one simple cycle.
///
/// The answer is `⌊n / 2⌋` for the first cycle of [`cycle_basis`]. If the basis is empty the
/// graph is a forest and [`tree_mis`] is used instead. That sums the answers of all
/// components, e.g. `1-2,3-4` gives `2`, whereas running the dp from a single root
/// would only count the first component and give `1`.
///
/// With [`CyclePolicy::Lenient`] chords, pendant trees and further cycles are ignored
/// (a warning is logged), so the result can be wrong for such graphs.
/// With [`CyclePolicy::Strict`] they are rejected with [`MisError::PreconditionViolation`].
pub fn cycle_mis(graph: &LabelGraph, policy: CyclePolicy) -> Result<usize, MisError> {
    let basis = cycle_basis(graph);
    let Some(cycle) = basis.first() else {
        warn!("no cycle found, falling back to tree dp");
        return Ok(tree_mis(graph));
    };

    if !is_simple_cycle(graph) {
        match policy {
            CyclePolicy::Strict => {
                return Err(MisError::PreconditionViolation(format!(
                    "graph with {} vertices, {} edges and {} independent cycles is not a single simple cycle",
                    graph.node_count(),
                    graph.edge_count(),
                    basis.len()
                )));
            }
            CyclePolicy::Lenient => {
                warn!(
                    cycles = basis.len(),
                    nodes = graph.node_count(),
                    cycle_len = cycle.len(),
                    "graph is not a single cycle, result is a best-effort estimate"
                );
            }
        }
    }

    debug!(cycle_len = cycle.len(), "applying cycle formula");
    Ok(cycle.len() / 2)
}
