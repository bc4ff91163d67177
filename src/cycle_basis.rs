use crate::LabelGraph;
use fixedbitset::FixedBitSet;
use hashbrown::HashSet;
use petgraph::algo::connected_components;
use petgraph::graph::NodeIndex;
use petgraph::visit::{EdgeRef, NodeIndexable};

/// Computes a fundamental cycle basis of an undirected graph.
///
/// Each component gets its own spanning tree, grown from a stack (so not strictly DFS order).
/// Every non-tree edge `(z, nbr)` closes exactly one cycle: `nbr, z`, then the tree path from
/// `z` up to the lowest ancestor that `nbr` is already attached to.
///
/// Order is deterministic and follows the edge list: components are rooted at the most
/// recently added vertex not yet covered, and neighbors are scanned in the order their edges
/// were added. The first cycle returned therefore only depends on the input text.
///
/// A self-loop is reported as a cycle with a single vertex.
///
/// Graph does not need to be connected. Returned cycles list vertices in walking order,
/// the closing edge between the last and the first vertex is implicit.
pub fn cycle_basis(g: &LabelGraph) -> Vec<Vec<NodeIndex>> {
    let n = g.node_count();
    let mut cycles = Vec::new();
    let mut done = FixedBitSet::with_capacity(n);
    // pred[v] == v for roots
    let mut pred = vec![usize::MAX; n];
    // neighbors of v that already closed a cycle with (or are the tree parent of) v
    let mut used: Vec<Option<HashSet<usize>>> = vec![None; n];
    let adj = adjacency_in_edge_order(g);

    for root in (0..n).rev() {
        if done.contains(root) {
            continue;
        }
        pred[root] = root;
        used[root] = Some(HashSet::new());
        let mut stack = vec![root];
        let mut component = vec![root];

        while let Some(z) = stack.pop() {
            for &nbr in &adj[z] {
                if used[nbr].is_none() {
                    // tree edge
                    pred[nbr] = z;
                    used[nbr] = Some(HashSet::from([z]));
                    stack.push(nbr);
                    component.push(nbr);
                } else if nbr == z {
                    cycles.push(vec![g.from_index(z)]);
                } else if !used[z].as_ref().is_some_and(|s| s.contains(&nbr)) {
                    // back edge, walk up from z until we hit something nbr is attached to
                    let mut cycle = vec![nbr, z];
                    let mut p = pred[z];
                    while !used[nbr].as_ref().is_some_and(|s| s.contains(&p)) {
                        cycle.push(p);
                        p = pred[p];
                    }
                    cycle.push(p);
                    cycles.push(cycle.into_iter().map(|v| g.from_index(v)).collect());
                    if let Some(s) = used[nbr].as_mut() {
                        s.insert(z);
                    }
                }
            }
        }

        for v in component {
            done.insert(v);
        }
    }

    cycles
}

/// Adjacency lists in edge insertion order, petgraph's own `neighbors` yields newest first.
/// A self-loop appears once in its vertex's list.
fn adjacency_in_edge_order(g: &LabelGraph) -> Vec<Vec<usize>> {
    let mut adj = vec![Vec::new(); g.node_count()];
    for edge in g.edge_references() {
        let (a, b) = (edge.source().index(), edge.target().index());
        adj[a].push(b);
        if a != b {
            adj[b].push(a);
        }
    }
    adj
}

/// Returns `true` if the whole graph is exactly one simple cycle:
/// connected, at least 3 vertices, as many edges as vertices, no self-loops
/// and every vertex of degree 2.
pub fn is_simple_cycle(g: &LabelGraph) -> bool {
    g.node_count() >= 3
        && g.edge_count() == g.node_count()
        && g.edge_references().all(|e| e.source() != e.target())
        && g.node_indices().all(|v| g.neighbors(v).count() == 2)
        && connected_components(g) == 1
}
