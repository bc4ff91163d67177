use crate::LabelGraph;
use petgraph::visit::{EdgeRef, NodeIndexable};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Random labeled tree: vertex `i` hangs off a uniformly chosen earlier vertex.
pub fn random_tree(n: usize, seed: u64) -> LabelGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = LabelGraph::new_undirected();

    for i in 0..n {
        graph.add_node(i.to_string());
        if i > 0 {
            let j = rng.random_range(0..i);
            graph.add_edge(graph.from_index(i), graph.from_index(j), ());
        }
    }

    graph
}

/// Renders a graph back into the textual edge list format.
pub fn to_edge_list(graph: &LabelGraph) -> String {
    graph
        .edge_references()
        .map(|e| format!("{}-{}", graph[e.source()], graph[e.target()]))
        .collect::<Vec<_>>()
        .join(",")
}
