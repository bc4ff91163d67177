use crate::LabelGraph;
use petgraph::visit::EdgeRef;

/// Exhaustive MIS size, tries every vertex subset. Only for tiny graphs.
pub fn brute_force_mis(graph: &LabelGraph) -> usize {
    let n = graph.node_count();
    assert!(n <= 20, "brute force is exponential");

    let edges: Vec<(usize, usize)> = graph
        .edge_references()
        .map(|e| (e.source().index(), e.target().index()))
        .collect();

    (0usize..1 << n)
        .filter(|&mask| {
            edges
                .iter()
                .all(|&(u, v)| mask & (1usize << u) == 0 || mask & (1usize << v) == 0)
        })
        .map(|mask| mask.count_ones() as usize)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::shapes::cycle;

    #[test]
    fn test_brute_force_cycles() {
        assert_eq!(brute_force_mis(&cycle(3)), 1);
        assert_eq!(brute_force_mis(&cycle(4)), 2);
        assert_eq!(brute_force_mis(&cycle(5)), 2);
    }
}
