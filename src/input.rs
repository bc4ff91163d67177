use crate::LabelGraph;
use crate::error::{FormatCause, MisError};
use hashbrown::HashMap;
use petgraph::graph::NodeIndex;
use tracing::debug;

const EDGE_SEPARATOR: char = ',';
const LABEL_SEPARATOR: char = '-';

/// Parses an edge list into pairs of vertex labels.
///
/// Input format:
/// - edges separated by `,`, endpoints of an edge separated by `-`,
/// - whitespace around edges and labels is ignored,
/// - empty edges (e.g. from a trailing `,`) are skipped.
///
/// Example input:
/// ```text
/// a-b, b-c, c - d,
/// ```
///
/// Labels are returned in input order. Empty labels are not rejected here,
/// [`build_graph`] does that.
pub fn parse_edges(input: &str) -> Result<Vec<(String, String)>, MisError> {
    let mut edges = Vec::new();

    for token in input.split(EDGE_SEPARATOR) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let parts: Vec<_> = token.split(LABEL_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [u, v] => edges.push((u.to_string(), v.to_string())),
            [_] => {
                return Err(FormatCause::MissingSeparator { token: token.to_string() }.into());
            }
            _ => {
                return Err(FormatCause::TooManySeparators {
                    token: token.to_string(),
                    parts: parts.len(),
                }
                .into());
            }
        }
    }

    debug!(edges = edges.len(), "parsed edge list");
    Ok(edges)
}

/// Builds a simple undirected graph from label pairs.
///
/// <div class="warning">
///
/// > Vertices are created the first time their label shows up.
/// > Repeated edges (in either direction) are stored once.
/// > Self-loops are kept, solvers treat them as cycles of length 1.
///
/// </div>
pub fn build_graph<S: AsRef<str>>(edges: &[(S, S)]) -> Result<LabelGraph, MisError> {
    let mut graph = LabelGraph::new_undirected();
    let mut label_to_node: HashMap<&str, NodeIndex> = HashMap::with_capacity(edges.len() + 1);

    for (u, v) in edges {
        let (u, v) = (u.as_ref(), v.as_ref());
        if u.is_empty() || v.is_empty() {
            return Err(FormatCause::EmptyLabel {
                token: format!("{}{}{}", u, LABEL_SEPARATOR, v),
            }
            .into());
        }
        let a = *label_to_node
            .entry(u)
            .or_insert_with(|| graph.add_node(u.to_string()));
        let b = *label_to_node
            .entry(v)
            .or_insert_with(|| graph.add_node(v.to_string()));
        graph.update_edge(a, b, ());
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built graph"
    );
    Ok(graph)
}

/// This is equivalent to [`parse_edges`] followed by [`build_graph`].
pub fn from_str(input: &str) -> Result<LabelGraph, MisError> {
    let edges = parse_edges(input)?;
    build_graph(&edges)
}
