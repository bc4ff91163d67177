use crate::{LabelGraph, Topology};
use petgraph::algo::connected_components;
use tracing::debug;

/// Returns `true` if the graph is connected and has exactly `|V| - 1` edges.
///
/// An empty graph counts as a tree.
pub fn is_tree(graph: &LabelGraph) -> bool {
    let n = graph.node_count();
    if n == 0 {
        return true;
    }
    graph.edge_count() == n - 1 && connected_components(graph) == 1
}

/// Decides which solver the graph goes to.
pub fn classify(graph: &LabelGraph) -> Topology {
    let topology = if graph.node_count() == 0 {
        Topology::Empty
    } else if is_tree(graph) {
        Topology::Tree
    } else {
        Topology::Cyclic
    };
    debug!(%topology, "classified graph");
    topology
}
