use crate::LabelGraph;
use fixedbitset::FixedBitSet;
use petgraph::graph::{Neighbors, NodeIndex};
use tracing::{debug, trace};

/// Best independent set sizes inside the subtree of one vertex.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct DpRecord {
    /// The vertex is in the set.
    pub incl: usize,
    /// The vertex is not in the set.
    pub excl: usize,
}

impl DpRecord {
    fn leaf() -> Self {
        Self { incl: 1, excl: 0 }
    }

    /// Best of both choices.
    pub fn best(&self) -> usize {
        self.incl.max(self.excl)
    }

    /// Folds a finished child into its parent.
    fn absorb(&mut self, child: &DpRecord) {
        self.incl += child.excl;
        self.excl += child.best();
    }
}

/// One level of the explicit DFS stack.
struct Frame<'a> {
    node: NodeIndex,
    parent: Option<NodeIndex>,
    neighbors: Neighbors<'a, ()>,
}

/// Computes the maximum independent set size of a tree.
///
/// Graph should be undirected and acyclic. Every connected component is rooted at its
/// first vertex (in insertion order) and the component results are added up, so forests
/// are handled exactly too. An empty graph gives `0`.
///
/// Edges closing a cycle are skipped, so cyclic input still terminates, but the answer is
/// then the MIS of a spanning forest, which can exceed the true one.
pub fn tree_mis(graph: &LabelGraph) -> usize {
    let mut visited = FixedBitSet::with_capacity(graph.node_count());
    let mut records = vec![DpRecord::default(); graph.node_count()];
    let mut total = 0;
    let mut components = 0;

    for root in graph.node_indices() {
        if visited.contains(root.index()) {
            continue;
        }
        total += dfs(graph, root, &mut visited, &mut records).best();
        components += 1;
    }

    debug!(components, mis = total, "tree dp finished");
    total
}

/// Runs the tree DP only on the component of `root` and returns the root's record.
pub fn tree_mis_from(graph: &LabelGraph, root: NodeIndex) -> DpRecord {
    let mut visited = FixedBitSet::with_capacity(graph.node_count());
    let mut records = vec![DpRecord::default(); graph.node_count()];
    dfs(graph, root, &mut visited, &mut records)
}

/// Post-order traversal with an explicit stack, children are folded into
/// the parent's record when their frame is popped.
fn dfs(
    graph: &LabelGraph,
    root: NodeIndex,
    visited: &mut FixedBitSet,
    records: &mut [DpRecord],
) -> DpRecord {
    visited.insert(root.index());
    records[root.index()] = DpRecord::leaf();
    let mut stack = vec![Frame {
        node: root,
        parent: None,
        neighbors: graph.neighbors(root),
    }];

    while let Some(frame) = stack.last_mut() {
        let (node, parent) = (frame.node, frame.parent);
        match frame.neighbors.next() {
            Some(next) => {
                if Some(next) == parent || visited.contains(next.index()) {
                    continue;
                }
                visited.insert(next.index());
                records[next.index()] = DpRecord::leaf();
                stack.push(Frame {
                    node: next,
                    parent: Some(node),
                    neighbors: graph.neighbors(next),
                });
            }
            None => {
                stack.pop();
                let record = records[node.index()];
                trace!(vertex = %graph[node], incl = record.incl, excl = record.excl, "dp record");
                if let Some(p) = parent {
                    records[p.index()].absorb(&record);
                }
            }
        }
    }

    records[root.index()]
}
