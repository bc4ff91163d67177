use crate::LabelGraph;
use petgraph::graph::NodeIndex;

fn with_nodes(n: usize) -> LabelGraph {
    let mut graph = LabelGraph::with_capacity(n, n);
    for i in 0..n {
        graph.add_node(i.to_string());
    }
    graph
}

/// Path `0 - 1 - ... - (n-1)`.
pub fn path(n: usize) -> LabelGraph {
    let mut graph = with_nodes(n);
    for i in 1..n {
        graph.add_edge(NodeIndex::new(i - 1), NodeIndex::new(i), ());
    }
    graph
}

/// Center `0` with leaves `1..=k`.
pub fn star(k: usize) -> LabelGraph {
    let mut graph = with_nodes(k + 1);
    for i in 1..=k {
        graph.add_edge(NodeIndex::new(0), NodeIndex::new(i), ());
    }
    graph
}

/// Simple cycle on `n >= 3` vertices.
pub fn cycle(n: usize) -> LabelGraph {
    assert!(n >= 3);
    let mut graph = path(n);
    graph.add_edge(NodeIndex::new(n - 1), NodeIndex::new(0), ());
    graph
}
