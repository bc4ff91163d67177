use crate::LabelGraph;
use petgraph::visit::EdgeRef;

/// Returns a graph in DOT format.
///
/// It shows the vertex labels from the edge list, not petgraph's internal indices.
///
/// Self-loops are drawn dashed.
///
/// Intended to be used with `neato`.
pub fn draw_graph(graph: &LabelGraph) -> String {
    let mut output = String::from("graph {\n");
    output.push_str("  mode=sgd;\n");
    output.push_str("  maxiter=1000;\n");
    output.push_str("  node [shape=circle, style=filled, fillcolor=lightblue];\n");

    for node_idx in graph.node_indices() {
        output.push_str(&format!(
            "  {} [label=\"{}\"];\n",
            node_idx.index(),
            escape_label(&graph[node_idx])
        ));
    }

    for edge in graph.edge_references() {
        let (a, b) = (edge.source().index(), edge.target().index());
        let style = if a == b { "dashed" } else { "solid" };
        output.push_str(&format!("  {} -- {} [style={}];\n", a, b, style));
    }
    output.push_str("}\n");
    output
}

fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
